//! Terminal rendering for the spring animation.
//!
//! Split the way the core is split from everything else:
//!
//! - [`frame`] composes a frame's text from a [`Body`](tui_spring_core::Body)
//!   with no I/O, so frame layout is unit-testable without a terminal
//! - [`renderer`] flushes frame text to stdout and clears the screen
//!   between frames

pub mod frame;
pub mod renderer;

pub use frame::{padding_width, FrameView};
pub use renderer::TerminalRenderer;
