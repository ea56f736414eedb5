//! Unix implementation (Linux, macOS, the BSDs) using rustix's safe termios API.
//!
//! rustix picks the right request codes per OS (`TCGETS`/`TCSETS` on Linux,
//! `TIOCGETA`/`TIOCSETA` on Darwin and the BSDs) and the matching `termios`
//! layout, so this file stays free of `unsafe`.

use crate::term::backend::{TerminalBackend, WindowSize};
use crossterm::{cursor, execute};
use rustix::termios::{self, LocalModes, OptionalActions, Termios};
use std::io;

/// The real terminal attached to this process's stdin/stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixTerminal;

impl TerminalBackend for UnixTerminal {
    type SavedMode = Termios;

    fn is_terminal(&self) -> bool {
        termios::isatty(io::stdin())
    }

    fn enter_raw_mode(&self) -> io::Result<Termios> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(&stdin)?;

        let mut raw = original.clone();
        raw.local_modes.remove(LocalModes::ICANON | LocalModes::ECHO);
        termios::tcsetattr(&stdin, OptionalActions::Now, &raw)?;

        Ok(original)
    }

    fn restore_mode(&self, saved: &Termios) -> io::Result<()> {
        termios::tcsetattr(io::stdin(), OptionalActions::Now, saved)?;
        Ok(())
    }

    fn window_size(&self) -> io::Result<WindowSize> {
        let size = termios::tcgetwinsize(io::stdout())?;
        Ok(WindowSize {
            cols: size.ws_col,
            rows: size.ws_row,
        })
    }

    fn set_cursor_visible(&self, visible: bool) -> io::Result<()> {
        let mut stdout = io::stdout();
        if visible {
            execute!(stdout, cursor::Show)
        } else {
            execute!(stdout, cursor::Hide)
        }
    }
}
