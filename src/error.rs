//! # Errors
//!
//! Every way a menu invocation can fail. All variants except
//! [`SelectError::NotATerminal`] and [`SelectError::InvalidInput`] are
//! produced after the terminal was touched, and are only returned once the
//! terminal has been restored.

use std::io;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, SelectError>;

/// Failure of a menu invocation.
#[derive(Debug, Error)]
pub enum SelectError {
    /// Standard input is not an interactive terminal. The terminal was not modified.
    #[error("stdin is not a terminal")]
    NotATerminal,

    /// The options or display constraints are unusable.
    #[error("invalid menu input: {0}")]
    InvalidInput(String),

    /// Terminal attributes could not be read or written.
    #[error("failed to switch terminal mode: {0}")]
    Mode(#[source] io::Error),

    /// The window size or cursor position could not be determined.
    #[error("failed to probe terminal geometry: {0}")]
    Geometry(String),

    /// The interrupt/terminate watcher could not be installed.
    #[error("failed to install signal handler: {0}")]
    Signals(#[source] io::Error),

    /// Writing to the terminal failed.
    #[error("failed to write to terminal: {0}")]
    Output(#[source] io::Error),

    /// Reading a key press failed.
    #[error("input read error: {0}")]
    InputRead(#[source] io::Error),

    /// The user pressed the cancel key.
    #[error("cancelled by user")]
    Cancelled,
}

impl SelectError {
    /// Whether this error is a user cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(SelectError::NotATerminal.to_string(), "stdin is not a terminal");
        assert_eq!(SelectError::Cancelled.to_string(), "cancelled by user");

        let err = SelectError::InputRead(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert_eq!(err.to_string(), "input read error: eof");
    }

    #[test]
    fn test_is_cancelled() {
        assert!(SelectError::Cancelled.is_cancelled());
        assert!(!SelectError::NotATerminal.is_cancelled());
    }
}
