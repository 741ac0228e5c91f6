//! Display sinks: where formatted lines get painted.
//!
//! The pipeline hands a [`RenderLines`] to a sink and forgets about it; sinks
//! never wrap, scroll or reflow. `TerminalSink` stands in for the device's
//! character panel, painting from a fixed origin. `PlainSink` writes plain
//! newline-terminated lines for `--once` mode and tests.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{Stdout, Write, stdout};
use tracing::debug;

use crate::error::AppError;
use crate::render::{DisplayLayout, RenderLines};

/// Accepts a bounded sequence of text lines and paints them.
pub trait DisplaySink {
    fn render(&mut self, lines: &RenderLines, layout: &DisplayLayout) -> Result<(), AppError>;
}

/// Paints lines onto the terminal from origin (0, 0), one row per line,
/// clearing the previous frame first. Never scrolls.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl TerminalSink<Stdout> {
    pub fn stdout() -> Self {
        TerminalSink { out: stdout() }
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        TerminalSink { out }
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn render(&mut self, lines: &RenderLines, _layout: &DisplayLayout) -> Result<(), AppError> {
        debug!("Painting {} line(s)", lines.len());
        queue!(self.out, Clear(ClearType::All))?;
        for (row, line) in lines.lines().iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Writes each line followed by a newline. Output stays in terminal history.
pub struct PlainSink<W: Write> {
    out: W,
}

impl PlainSink<Stdout> {
    pub fn stdout() -> Self {
        PlainSink { out: stdout() }
    }
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        PlainSink { out }
    }
}

impl<W: Write> DisplaySink for PlainSink<W> {
    fn render(&mut self, lines: &RenderLines, _layout: &DisplayLayout) -> Result<(), AppError> {
        for line in lines.lines() {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
