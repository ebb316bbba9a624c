//! Vertical swipe detection. An upward swipe closes the mobile menu.

#[cfg(test)]
#[path = "swipe_test.rs"]
mod swipe_test;

use crate::binding::UiBinding;
use crate::consts::SWIPE_THRESHOLD_PX;
use crate::nav;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeDetector {
    start_y: f64,
}

impl SwipeDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, screen_y: f64) {
        self.start_y = screen_y;
    }

    /// Classify the gesture ending at `screen_y`.
    #[must_use]
    pub fn touch_end(&self, screen_y: f64) -> Option<Swipe> {
        let diff = self.start_y - screen_y;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if diff > 0.0 { Swipe::Up } else { Swipe::Down })
    }

    /// Finish a gesture and apply its effect.
    pub fn handle_end<B: UiBinding>(&self, binding: &B, screen_y: f64) -> Option<Swipe> {
        let swipe = self.touch_end(screen_y);
        if swipe == Some(Swipe::Up) {
            nav::close_menu(binding);
        }
        swipe
    }
}
