//! Anchor Select - an inline single-select terminal menu
//!
//! This library draws a scrollable, word-wrapped option list directly below
//! the cursor, lets the user move with the arrow keys (or `j`/`k`) and returns
//! the chosen option. The terminal is always restored afterwards, including
//! on interrupt and terminate signals.
//!
//! ```no_run
//! let choice = anchor_select::select(["feat: a new feature", "fix: a bug fix"], 5, 60)?;
//! println!("{} {}", choice.index, choice.label);
//! # Ok::<(), anchor_select::SelectError>(())
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod term;
pub mod text;

pub use config::MenuConfig;
pub use error::SelectError;
pub use menu::{select, select_with, Selection, Selector};
