//! Mobile menu and in-page anchor scrolling.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::binding::{UiBinding, UiNode};

/// Marks an open menu, its toggle button, and the current nav link.
pub const ACTIVE_CLASS: &str = "active";

/// Toggle the mobile menu. Returns whether it is now open.
pub fn toggle_menu<B: UiBinding>(binding: &B) -> bool {
    let open = binding.nav_menu().is_some_and(|menu| menu.toggle_class(ACTIVE_CLASS));
    if let Some(toggle) = binding.nav_toggle() {
        toggle.toggle_class(ACTIVE_CLASS);
    }
    open
}

pub fn close_menu<B: UiBinding>(binding: &B) {
    if let Some(menu) = binding.nav_menu() {
        menu.remove_class(ACTIVE_CLASS);
    }
    if let Some(toggle) = binding.nav_toggle() {
        toggle.remove_class(ACTIVE_CLASS);
    }
}

#[must_use]
pub fn is_menu_open<B: UiBinding>(binding: &B) -> bool {
    binding.nav_menu().is_some_and(|menu| menu.has_class(ACTIVE_CLASS))
}

/// Close the menu when a click lands outside both the toggle and the menu.
pub fn on_document_click<B: UiBinding>(binding: &B, target: &B::Node) {
    let inside = |node: Option<B::Node>| node.is_some_and(|n| n.contains(target));
    if !inside(binding.nav_toggle()) && !inside(binding.nav_menu()) {
        close_menu(binding);
    }
}

/// Resolve an in-page `href` (`#id`) to its target node.
pub fn anchor_target<B: UiBinding>(binding: &B, href: &str) -> Option<B::Node> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    binding.by_id(id)
}

/// Scroll destination for an anchor target, leaving room for the navbar.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, offset: f64) -> f64 {
    target_top - offset
}

/// Mark the link pointing at `active_id` and clear every other link.
pub fn highlight_active_link<N: UiNode>(links: &[N], active_id: &str) {
    let wanted = format!("#{active_id}");
    for link in links {
        link.remove_class(ACTIVE_CLASS);
        if link.attr("href").as_deref() == Some(wanted.as_str()) {
            link.add_class(ACTIVE_CLASS);
        }
    }
}
