//! The oscillating point mass and its state transition.

use tui_spring_types::{SpringParams, BODY_MASS, INITIAL_POSITION};

/// The simulated point mass.
///
/// `mass` is fixed for the process lifetime; the other three fields evolve
/// once per tick as a function of the previous tick's values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f64,
    pub acceleration: f64,
    pub velocity: f64,
    pub position: f64,
}

impl Body {
    /// Body at the documented initial state: at rest, 39 columns left of
    /// the spring's rest point.
    pub fn new() -> Self {
        Self {
            mass: BODY_MASS,
            acceleration: 0.0,
            velocity: 0.0,
            position: INITIAL_POSITION,
        }
    }

    /// Restoring force plus the velocity-proportional damping term.
    pub fn spring_force(&self, params: &SpringParams) -> f64 {
        -params.spring_constant * self.position - self.velocity * params.damping
    }

    /// Advance one tick of semi-implicit Euler integration.
    ///
    /// Pure state transition: velocity updates from the new acceleration,
    /// then position updates from the new velocity.
    pub fn stepped(self, params: &SpringParams) -> Self {
        let force = self.spring_force(params);
        let acceleration = force / self.mass;
        let velocity = self.velocity + acceleration * params.timestep;
        let position = self.position + velocity * params.timestep;
        Self {
            mass: self.mass,
            acceleration,
            velocity,
            position,
        }
    }

    /// Kinetic plus spring potential energy.
    ///
    /// Strictly decreasing only in the continuous system, but the damping
    /// drives it toward zero over any run of ticks.
    pub fn energy(&self, params: &SpringParams) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
            + 0.5 * params.spring_constant * self.position * self.position
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}
