//! TerminalRenderer: flushes frame text to a real terminal.
//!
//! The drawing API is intentionally small: write one frame, clear the
//! screen. The clear emits `ESC [ 2 J` and leaves the cursor where it is.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Write one frame's text and flush.
    pub fn draw(&mut self, frame: &str) -> Result<()> {
        self.stdout.queue(Print(frame))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Clear the screen contents without moving the cursor.
    pub fn clear(&mut self) -> Result<()> {
        self.stdout.queue(Clear(ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
