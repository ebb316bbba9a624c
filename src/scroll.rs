//! Scroll state tracker.
//!
//! Every scroll recomputes four independent concerns from the current offset:
//! the navbar's scrolled style, back-to-top visibility, the active section, and
//! the parallax transform of each background shape. The computation is a pure
//! function of the offset and section geometry, so repeating it with the same
//! offset yields the same state.
//!
//! DESIGN
//! ======
//! Raw scroll events are coalesced to one recompute per animation frame. The
//! host asks [`ScrollTracker::on_scroll`] whether a frame must be requested and
//! reads the offset when that frame runs, so the last settled offset is always
//! the one applied.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::binding::{UiBinding, UiNode};
use crate::consts::{
    BACK_TO_TOP_AFTER_PX, NAVBAR_SCROLLED_AFTER_PX, PARALLAX_BASE_SPEED, PARALLAX_ROTATION_PER_PX,
    PARALLAX_SPEED_STEP, SECTION_ACTIVATION_MARGIN_PX,
};
use crate::nav;

pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";
pub const BACK_TO_TOP_SHOWN_CLASS: &str = "show";

/// Geometry of one page section, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn of<N: UiNode>(node: &N) -> Self {
        Self { id: node.attr("id"), top: node.offset_top(), height: node.height() }
    }
}

/// Derived UI state for one scroll offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
    /// Empty when no section has been reached (or the reached one has no id).
    pub active_section_id: String,
}

impl ScrollState {
    #[must_use]
    pub fn compute(scroll_y: f64, sections: &[SectionBounds]) -> Self {
        Self {
            scroll_y,
            navbar_scrolled: navbar_scrolled(scroll_y),
            back_to_top_visible: back_to_top_visible(scroll_y),
            active_section_id: active_section(scroll_y, sections).unwrap_or_default().to_owned(),
        }
    }
}

#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER_PX
}

#[must_use]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER_PX
}

/// Id of the last section whose top, less the activation margin, has been
/// scrolled past.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - SECTION_ACTIVATION_MARGIN_PX)
        .and_then(|s| s.id.as_deref())
}

/// Parallax transform of one background shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOffset {
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl ParallaxOffset {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(shape_index: usize, scroll_y: f64) -> Self {
        let speed = PARALLAX_BASE_SPEED + shape_index as f64 * PARALLAX_SPEED_STEP;
        // Adding zero folds -0 into 0 so the rendered transform stays clean.
        Self { translate_y: -(scroll_y * speed) + 0.0, rotate_deg: scroll_y * PARALLAX_ROTATION_PER_PX }
    }

    /// CSS `transform` value.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateY({}px) rotate({}deg)", self.translate_y, self.rotate_deg)
    }
}

/// Owns the last applied state and the frame-coalescing flag.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    last_scroll_top: f64,
    frame_pending: bool,
    state: ScrollState,
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a raw scroll event. Returns `true` if the host should request an
    /// animation frame; `false` means one is already pending.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    #[must_use]
    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    #[must_use]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Recompute from `scroll_y` and push the result into the page.
    pub fn apply<B: UiBinding>(&mut self, binding: &B, scroll_y: f64) -> &ScrollState {
        self.frame_pending = false;

        let sections: Vec<SectionBounds> = binding.sections().iter().map(SectionBounds::of).collect();
        let state = ScrollState::compute(scroll_y, &sections);

        if let Some(navbar) = binding.navbar() {
            set_class(&navbar, NAVBAR_SCROLLED_CLASS, state.navbar_scrolled);
        }
        if let Some(button) = binding.back_to_top() {
            set_class(&button, BACK_TO_TOP_SHOWN_CLASS, state.back_to_top_visible);
        }
        nav::highlight_active_link(&binding.nav_links(), &state.active_section_id);
        for (index, shape) in binding.shapes().iter().enumerate() {
            shape.set_style("transform", &ParallaxOffset::compute(index, scroll_y).transform());
        }

        self.last_scroll_top = scroll_y;
        self.state = state;
        &self.state
    }
}

fn set_class<N: UiNode>(node: &N, class: &str, on: bool) {
    if on {
        node.add_class(class);
    } else {
        node.remove_class(class);
    }
}
