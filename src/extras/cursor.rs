//! Custom cursor follower.
//!
//! Two decorative nodes (a dot and an outline) track the pointer and grow
//! while it hovers interactive elements. Narrow viewports keep the native
//! cursor.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::binding::{UiBinding, UiNode};

/// Elements that enlarge the cursor on hover.
pub const HOVER_SELECTOR: &str = "a, button, .project-card, .service-card, .tech-item";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFollower {
    enabled: bool,
}

impl CursorFollower {
    #[must_use]
    pub fn new(viewport_width: f64, min_viewport_width: f64) -> Self {
        Self { enabled: viewport_width > min_viewport_width }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn on_move<B: UiBinding>(&self, binding: &B, x: f64, y: f64) {
        if !self.enabled {
            return;
        }
        let (left, top) = (format!("{x}px"), format!("{y}px"));
        for node in [binding.cursor_dot(), binding.cursor_outline()].into_iter().flatten() {
            node.set_style("left", &left);
            node.set_style("top", &top);
        }
    }

    pub fn on_hover<B: UiBinding>(&self, binding: &B, entering: bool) {
        if !self.enabled {
            return;
        }
        let (dot_scale, outline_scale) = if entering { ("scale(2)", "scale(1.5)") } else { ("scale(1)", "scale(1)") };
        if let Some(dot) = binding.cursor_dot() {
            dot.set_style("transform", dot_scale);
        }
        if let Some(outline) = binding.cursor_outline() {
            outline.set_style("transform", outline_scale);
        }
    }
}
