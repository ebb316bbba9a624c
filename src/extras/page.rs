//! Page-level touches: focus rings, the copyright year, and pausing CSS
//! animations while the tab is hidden.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::binding::{UiBinding, UiNode};

pub const FOCUSABLE_SELECTOR: &str = "a, button, input, textarea, select";

/// Year the footer text was authored with.
const AUTHORED_YEAR: &str = "2024";

pub fn focus_ring<N: UiNode>(node: &N, focused: bool) {
    if focused {
        node.set_style("outline", "2px solid var(--primary-color)");
        node.set_style("outline-offset", "2px");
    } else {
        node.set_style("outline", "");
        node.set_style("outline-offset", "");
    }
}

/// Replace the first authored year in `text` with `year`.
#[must_use]
pub fn replace_copyright_year(text: &str, year: u32) -> String {
    text.replacen(AUTHORED_YEAR, &year.to_string(), 1)
}

/// Rewrite the footer year in place. Works on markup so links and icons in
/// the footer survive.
pub fn update_copyright<B: UiBinding>(binding: &B, year: u32) {
    if let Some(node) = binding.copyright_text() {
        node.set_inner_html(&replace_copyright_year(&node.inner_html(), year));
    }
}

/// Pause body animations while the document is hidden.
pub fn on_visibility_change<B: UiBinding>(binding: &B, hidden: bool) {
    if let Some(body) = binding.body() {
        body.set_style("animation-play-state", if hidden { "paused" } else { "running" });
    }
}
