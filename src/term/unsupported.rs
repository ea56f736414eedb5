//! Fallback for targets without termios. The menu refuses to start there.

use crate::term::backend::{TerminalBackend, WindowSize};
use std::io;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedTerminal;

fn unsupported() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "raw terminal mode is not supported on this platform",
    )
}

impl TerminalBackend for UnsupportedTerminal {
    type SavedMode = ();

    fn is_terminal(&self) -> bool {
        false
    }

    fn enter_raw_mode(&self) -> io::Result<()> {
        Err(unsupported())
    }

    fn restore_mode(&self, _saved: &()) -> io::Result<()> {
        Ok(())
    }

    fn window_size(&self) -> io::Result<WindowSize> {
        Err(unsupported())
    }

    fn set_cursor_visible(&self, _visible: bool) -> io::Result<()> {
        Err(unsupported())
    }
}
