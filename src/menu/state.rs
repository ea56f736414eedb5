//! Selection and scroll window of the menu.

use crate::error::{Result, SelectError};
use std::ops::Range;

/// Direction of a move key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Options, the selected index and the visible window.
///
/// Invariants, upheld by every method:
/// - `selected < options.len()`
/// - `first_visible <= selected < first_visible + max_visible`
/// - `first_visible <= options.len() - min(options.len(), max_visible)`
#[derive(Debug, Clone)]
pub struct MenuState {
    options: Vec<String>,
    selected: usize,
    first_visible: usize,
    max_visible: usize,
    max_width: usize,
}

impl MenuState {
    /// Create a menu with the first option selected.
    ///
    /// # Errors
    ///
    /// [`SelectError::InvalidInput`] if `options` is empty or either limit is zero.
    pub fn new(options: Vec<String>, max_visible: usize, max_width: usize) -> Result<Self> {
        if options.is_empty() {
            return Err(SelectError::InvalidInput("no options to choose from".to_string()));
        }
        if max_visible == 0 {
            return Err(SelectError::InvalidInput(
                "visible option count must be positive".to_string(),
            ));
        }
        if max_width == 0 {
            return Err(SelectError::InvalidInput("option width must be positive".to_string()));
        }

        Ok(Self {
            options,
            selected: 0,
            first_visible: 0,
            max_visible,
            max_width,
        })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; a menu holds at least one option.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.selected]
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Indices of the options currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.first_visible + self.max_visible).min(self.options.len());
        self.first_visible..end
    }

    /// Index a single move in `direction` lands on, wrapping at both ends.
    pub fn target(&self, direction: Direction) -> usize {
        let last = self.options.len() - 1;
        match direction {
            Direction::Up if self.selected == 0 => last,
            Direction::Up => self.selected - 1,
            Direction::Down if self.selected == last => 0,
            Direction::Down => self.selected + 1,
        }
    }

    /// Select `index` (clamped to the last option) and scroll it into view.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.options.len() - 1);
        self.scroll_into_view();
    }

    fn scroll_into_view(&mut self) {
        if self.selected < self.first_visible {
            self.first_visible = self.selected;
        } else if self.selected >= self.first_visible + self.max_visible {
            self.first_visible = self.selected + 1 - self.max_visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(n: usize, visible: usize) -> MenuState {
        let options = (0..n).map(|i| format!("option {i}")).collect();
        MenuState::new(options, visible, 40).expect("valid menu")
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        assert!(MenuState::new(Vec::new(), 3, 40).is_err());
        assert!(MenuState::new(vec!["a".to_string()], 0, 40).is_err());
        assert!(MenuState::new(vec!["a".to_string()], 3, 0).is_err());
    }

    #[test]
    fn test_target_wraps() {
        let mut state = menu(3, 2);
        assert_eq!(state.target(Direction::Up), 2);
        assert_eq!(state.target(Direction::Down), 1);
        state.select(2);
        assert_eq!(state.target(Direction::Down), 0);
        assert_eq!(state.target(Direction::Up), 1);
    }

    #[test]
    fn test_single_option_targets_itself() {
        let state = menu(1, 3);
        assert_eq!(state.target(Direction::Up), 0);
        assert_eq!(state.target(Direction::Down), 0);
    }

    #[test]
    fn test_window_follows_selection() {
        let mut state = menu(10, 3);
        assert_eq!(state.visible_range(), 0..3);

        state.select(3);
        assert_eq!(state.visible_range(), 1..4);

        state.select(9);
        assert_eq!(state.visible_range(), 7..10);

        state.select(8);
        assert_eq!(state.visible_range(), 7..10);

        state.select(2);
        assert_eq!(state.visible_range(), 2..5);
    }

    #[test]
    fn test_visible_range_clamped_to_len() {
        let state = menu(2, 5);
        assert_eq!(state.visible_range(), 0..2);
    }

    #[test]
    fn test_select_clamps_out_of_range() {
        let mut state = menu(3, 2);
        state.select(17);
        assert_eq!(state.selected(), 2);
        assert_eq!(state.selected_label(), "option 2");
    }
}
