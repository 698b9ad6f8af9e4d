//! Spring animation runner (default binary).
//!
//! Steps the simulation once per frame, draws the marker line, sleeps for
//! the frame delay, then clears the screen. Runs until the process is
//! killed; there is no input handling and no normal exit path.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use tui_spring::core::Body;
use tui_spring::term::{FrameView, TerminalRenderer};
use tui_spring::types::{SpringParams, FRAME_DELAY_US};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    run(&mut term)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let params = SpringParams::default();
    let view = FrameView::default();
    let mut body = Body::new();

    let frame_delay = Duration::from_micros(FRAME_DELAY_US);

    loop {
        // Tick.
        body = body.stepped(&params);

        // Render.
        let frame = view.render(&body);
        term.draw(&frame)?;

        // Blocking sleep, then wipe the frame for the next one.
        thread::sleep(frame_delay);
        term.clear()?;
    }
}
