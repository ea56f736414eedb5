//! # Text Module
//!
//! Pure text helpers used by the menu renderer.
//!
//! - [`wrap`] - greedy word wrapping with hyphenation of over-long tokens
//! - [`style`] - ANSI styling helpers and [`style::strip_ansi`]
//!
//! Nothing in here touches the terminal.

pub mod style;
pub mod wrap;

pub use style::strip_ansi;
pub use wrap::wrap;
