//! # Render Engine
//!
//! Builds a frame (one string per screen row) from the menu state and writes
//! only the rows that changed since the previous frame.
//!
//! ## Frame layout
//!
//! ```text
//! Use ↑(k) ↓(j) to move, Enter to select: (Item 2 of 5)
//!   feat: A new feature
//! ❯ fix: A bug fix            <- underlined, highlighted
//!   docs: Documentation only
//!     changes                 <- continuation, indented 4
//! ```
//!
//! Rows are addressed absolutely from the anchor row, so redraws never
//! scroll the terminal.

use crate::menu::state::MenuState;
use crate::menu::theme::MenuTheme;
use crate::text::{strip_ansi, wrap};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// The header row of every frame.
pub fn header(state: &MenuState) -> String {
    format!(
        "Use ↑(k) ↓(j) to move, Enter to select: (Item {} of {})",
        state.selected() + 1,
        state.len()
    )
}

/// Build the rows for the current state.
pub fn build_frame(state: &MenuState, theme: &MenuTheme) -> Vec<String> {
    let mut frame = vec![header(state)];

    for index in state.visible_range() {
        let plain = strip_ansi(&state.options()[index]);
        let lines = wrap(&plain, state.max_width());

        if index == state.selected() {
            for (i, line) in lines.iter().enumerate() {
                let styled = theme.styled_selection(line);
                if i == 0 {
                    frame.push(format!("{} {}", theme.styled_pointer(), styled));
                } else {
                    frame.push(format!("    {styled}"));
                }
            }
        } else {
            for (i, line) in lines.iter().enumerate() {
                let indent = if i == 0 { "  " } else { "    " };
                frame.push(format!("{indent}{line}"));
            }
        }
    }

    frame
}

/// Writes frames at a fixed anchor row, touching only changed rows.
#[derive(Debug)]
pub struct FrameRenderer {
    anchor_row: usize,
    previous: Vec<String>,
}

impl FrameRenderer {
    /// `anchor_row` is 1-based.
    pub fn new(anchor_row: usize) -> Self {
        Self {
            anchor_row: anchor_row.max(1),
            previous: Vec::new(),
        }
    }

    pub fn anchor_row(&self) -> usize {
        self.anchor_row
    }

    /// The last frame written.
    pub fn previous(&self) -> &[String] {
        &self.previous
    }

    /// Write `frame`, diffing against the previous one.
    ///
    /// Changed rows are moved to, cleared and rewritten; rows only present
    /// in the previous frame are cleared.
    pub fn draw<W: Write>(&mut self, frame: Vec<String>, out: &mut W) -> io::Result<()> {
        for (i, line) in frame.iter().enumerate() {
            if self.previous.get(i) != Some(line) {
                self.move_to_row(out, i)?;
                queue!(out, Clear(ClearType::CurrentLine), Print(line))?;
            }
        }

        for i in frame.len()..self.previous.len() {
            self.move_to_row(out, i)?;
            queue!(out, Clear(ClearType::CurrentLine))?;
        }

        out.flush()?;
        self.previous = frame;
        Ok(())
    }

    /// Move the cursor to column 1 of the row `offset` rows below the anchor.
    pub fn move_to_row<W: Write>(&self, out: &mut W, offset: usize) -> io::Result<()> {
        let row = self.anchor_row + offset;
        // MoveTo is 0-based and emits `ESC [ row+1 ; col+1 H`.
        let row = u16::try_from(row - 1).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row))
    }
}
