//! Shared constants and parameter types.
//! This crate contains pure data with no external dependencies.

/// Hooke's law spring constant (`F = -kx`).
pub const SPRING_CONSTANT: f64 = 1.0;

/// Velocity-proportional damping coefficient.
///
/// Load-bearing: removing it turns the oscillation undamped and the marker
/// never settles toward the center column.
pub const DAMPING_COEFFICIENT: f64 = 0.1;

/// Simulation timestep in seconds per tick.
pub const TIMESTEP: f64 = 0.1;

/// Mass of the oscillating body (fixed and positive for the process lifetime).
pub const BODY_MASS: f64 = 0.1;

/// Starting position: 39 columns left of the rest point.
pub const INITIAL_POSITION: f64 = -39.0;

/// Blocking sleep between frames, in microseconds (50 ms).
pub const FRAME_DELAY_US: u64 = 50_000;

/// Columns added to the truncated position to get the padding width,
/// so the rest point sits at column 39.
pub const PADDING_OFFSET: i64 = 39;

/// Marker character drawn at the body's position.
pub const MARKER: char = 'O';

/// Blank lines emitted before and after the marker line.
pub const LEAD_BLANK_LINES: usize = 4;
pub const TRAIL_BLANK_LINES: usize = 3;

/// Physical parameters of the spring system.
///
/// Passed into the step function rather than read from globals so the
/// simulation stays a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Hooke's law constant `k`.
    pub spring_constant: f64,
    /// Velocity damping coefficient.
    pub damping: f64,
    /// Seconds advanced per tick.
    pub timestep: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            spring_constant: SPRING_CONSTANT,
            damping: DAMPING_COEFFICIENT,
            timestep: TIMESTEP,
        }
    }
}
