//! # Menu Theme
//!
//! Colors and glyphs used for the selected option. Built from the string
//! color names in [`MenuConfig`]; unknown names fall back to the default
//! color for that role.

use crate::config::MenuConfig;
use crate::text::style::{emphasize, paint, parse_color};
use crossterm::style::Color;

/// Pointer glyph and highlight colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTheme {
    /// Glyph drawn in front of the selected option.
    pub pointer: String,
    pub pointer_color: Color,
    /// Foreground of the selected option.
    pub highlight_fg: Color,
    /// Background of the selected option.
    pub highlight_bg: Color,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            pointer: "❯".to_string(),
            pointer_color: Color::Green,
            highlight_fg: Color::White,
            highlight_bg: Color::Green,
        }
    }
}

impl MenuTheme {
    /// Build the theme described by `config`.
    pub fn from_config(config: &MenuConfig) -> Self {
        let defaults = Self::default();
        Self {
            pointer: config.pointer.clone(),
            pointer_color: color_or(&config.pointer_color, defaults.pointer_color),
            highlight_fg: color_or(&config.highlight_fg, defaults.highlight_fg),
            highlight_bg: color_or(&config.highlight_bg, defaults.highlight_bg),
        }
    }

    /// The colored pointer glyph.
    pub fn styled_pointer(&self) -> String {
        paint(&self.pointer, self.pointer_color)
    }

    /// `text` styled as the selected entry.
    pub fn styled_selection(&self, text: &str) -> String {
        emphasize(text, self.highlight_fg, self.highlight_bg)
    }
}

fn color_or(name: &str, fallback: Color) -> Color {
    parse_color(name).unwrap_or_else(|| {
        log::warn!("unknown color {name:?}, using {fallback:?}");
        fallback
    })
}
