//! # Terminal Module
//!
//! Platform layer behind the menu: raw-mode control, window size, cursor
//! visibility and the cursor-position probe.
//!
//! ## Components
//!
//! - [`TerminalBackend`] - capability interface (`enter_raw_mode`,
//!   `restore_mode`, `window_size`, ...)
//! - [`PlatformTerminal`] - the implementation for the target OS, chosen at
//!   build time
//! - [`probe`] - Device Status Report round trip for the cursor row
//!
//! ## Platforms
//!
//! | Target | Implementation |
//! |--------|----------------|
//! | Linux, macOS, BSD | `UnixTerminal` (rustix termios) |
//! | everything else | `UnsupportedTerminal` (always "not a terminal") |

pub mod backend;
pub mod probe;

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod unsupported;

pub use backend::{TerminalBackend, WindowSize};

#[cfg(unix)]
pub use unix::UnixTerminal as PlatformTerminal;
#[cfg(not(unix))]
pub use unsupported::UnsupportedTerminal as PlatformTerminal;
