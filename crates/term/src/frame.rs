//! FrameView: maps a `Body` into one frame of terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_spring_core::Body;
use tui_spring_types::{LEAD_BLANK_LINES, MARKER, PADDING_OFFSET, TRAIL_BLANK_LINES};

/// Leading spaces for a given position.
///
/// The position is truncated toward zero and offset so that the rest point
/// lands at column 39. A computed count <= 0 renders zero spaces; positions
/// left of column zero silently collapse onto it rather than erroring.
pub fn padding_width(position: f64) -> usize {
    let count = position.trunc() as i64 + PADDING_OFFSET;
    if count <= 0 {
        0
    } else {
        count as usize
    }
}

/// Composes one frame of output around the marker line.
pub struct FrameView {
    marker: char,
    lead_blank_lines: usize,
    trail_blank_lines: usize,
}

impl Default for FrameView {
    fn default() -> Self {
        Self {
            marker: MARKER,
            lead_blank_lines: LEAD_BLANK_LINES,
            trail_blank_lines: TRAIL_BLANK_LINES,
        }
    }
}

impl FrameView {
    /// Render the body's current position into frame text.
    ///
    /// Layout: blank lines, then padding spaces and the marker on its own
    /// line, then trailing blank lines. Exactly one marker per frame.
    pub fn render(&self, body: &Body) -> String {
        let pad = padding_width(body.position);
        let mut frame = String::with_capacity(self.lead_blank_lines + pad + 2 + self.trail_blank_lines);

        for _ in 0..self.lead_blank_lines {
            frame.push('\n');
        }
        for _ in 0..pad {
            frame.push(' ');
        }
        frame.push(self.marker);
        frame.push('\n');
        for _ in 0..self.trail_blank_lines {
            frame.push('\n');
        }

        frame
    }
}
