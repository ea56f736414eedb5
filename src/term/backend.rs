//! The capability interface every platform terminal implements.

use std::io;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub cols: u16,
    pub rows: u16,
}

/// Process-wide terminal resources: input mode, cursor visibility and size.
///
/// Implementations are selected at build time (see [`crate::term::PlatformTerminal`]).
/// A backend is shared with the signal watcher thread, hence `Send + Sync`.
pub trait TerminalBackend: Send + Sync + 'static {
    /// Opaque snapshot of the attributes in effect before raw mode.
    type SavedMode: Send + 'static;

    /// Whether standard input is an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Capture the current attributes, then disable canonical line buffering
    /// and local echo.
    ///
    /// On error nothing has been changed.
    fn enter_raw_mode(&self) -> io::Result<Self::SavedMode>;

    /// Reapply attributes captured by [`enter_raw_mode`](Self::enter_raw_mode).
    fn restore_mode(&self, saved: &Self::SavedMode) -> io::Result<()>;

    /// Query the terminal size.
    fn window_size(&self) -> io::Result<WindowSize>;

    /// Show or hide the text cursor.
    fn set_cursor_visible(&self, visible: bool) -> io::Result<()>;
}
