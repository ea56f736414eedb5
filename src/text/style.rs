//! # Styling Helpers
//!
//! Wraps text in ANSI SGR sequences through crossterm's [`style`] API and
//! removes them again with [`strip_ansi`].
//!
//! Option labels handed to the menu may already carry styling. The renderer
//! always strips it before measuring or wrapping, so escape bytes never count
//! against the column budget.

use crossterm::style::{style, Color, Stylize};
use regex::Regex;
use std::sync::OnceLock;

/// Matches SGR escape sequences (`ESC [ <params> m`).
static ANSI_SGR: OnceLock<Regex> = OnceLock::new();

fn ansi_sgr() -> &'static Regex {
    ANSI_SGR.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is valid"))
}

/// Remove every SGR escape sequence from `text`.
pub fn strip_ansi(text: &str) -> String {
    ansi_sgr().replace_all(text, "").into_owned()
}

/// Bold text.
pub fn bold(text: &str) -> String {
    style(text).bold().to_string()
}

/// Underlined text.
pub fn underline(text: &str) -> String {
    style(text).underlined().to_string()
}

/// Text in the given foreground color.
pub fn paint(text: &str, color: Color) -> String {
    style(text).with(color).to_string()
}

/// Bold text with both foreground and background colors.
pub fn highlight(text: &str, fg: Color, bg: Color) -> String {
    style(text).with(fg).on(bg).bold().to_string()
}

/// Bold, underlined text with foreground and background colors, used for the
/// selected entry.
pub fn emphasize(text: &str, fg: Color, bg: Color) -> String {
    style(text).with(fg).on(bg).bold().underlined().to_string()
}

/// Parse a color name such as `"green"` or `"dark_blue"`.
///
/// Accepts the names crossterm understands (case-insensitive).
pub fn parse_color(name: &str) -> Option<Color> {
    Color::try_from(name.to_ascii_lowercase().as_str()).ok()
}
