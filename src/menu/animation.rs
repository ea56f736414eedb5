//! # Animation Scheduler
//!
//! A move walks the selection one option at a time towards its target,
//! redrawing after every step. The pause after each step shrinks as the
//! target gets closer:
//!
//! ```text
//! delay = base + sqrt(remaining_steps) * scale
//! ```
//!
//! Wrapping from the first to the last option therefore visibly scrolls
//! through the whole list and decelerates into place. Steps are synchronous;
//! keys pressed meanwhile are read after the animation finishes.

use crate::config::AnimationConfig;
use std::time::Duration;

/// Delay curve for one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Easing {
    pub base: Duration,
    pub scale: Duration,
}

impl Easing {
    /// No pauses at all.
    pub const NONE: Easing = Easing {
        base: Duration::ZERO,
        scale: Duration::ZERO,
    };

    pub fn from_config(config: &AnimationConfig) -> Self {
        if config.enabled {
            Self {
                base: config.base(),
                scale: config.scale(),
            }
        } else {
            Self::NONE
        }
    }

    /// Pause after a step that leaves `remaining` steps to go.
    pub fn delay(&self, remaining: usize) -> Duration {
        self.base + self.scale.mul_f64((remaining as f64).sqrt())
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

/// One animation step: the index to select and how many steps follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub index: usize,
    pub remaining: usize,
}

/// Iterator over the unit steps from `from` to `to` (exclusive of `from`).
#[derive(Debug, Clone)]
pub struct Steps {
    current: usize,
    target: usize,
}

/// Steps needed to move the selection from `from` to `to`.
pub fn steps(from: usize, to: usize) -> Steps {
    Steps {
        current: from,
        target: to,
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.current == self.target {
            return None;
        }
        if self.current < self.target {
            self.current += 1;
        } else {
            self.current -= 1;
        }
        Some(Step {
            index: self.current,
            remaining: self.current.abs_diff(self.target),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.current.abs_diff(self.target);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Steps {}
