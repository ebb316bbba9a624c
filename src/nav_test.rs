use super::*;
use crate::testing::{FakeBinding, FakeNode};

fn menu_binding() -> (FakeBinding, FakeNode, FakeNode) {
    let mut binding = FakeBinding::new();
    let toggle = binding.slot("nav_toggle");
    let menu = binding.slot("nav_menu");
    (binding, toggle, menu)
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_opens_and_closes_both_nodes() {
    let (binding, toggle, menu) = menu_binding();
    assert!(toggle_menu(&binding));
    assert!(menu.has_class(ACTIVE_CLASS));
    assert!(toggle.has_class(ACTIVE_CLASS));
    assert!(is_menu_open(&binding));

    assert!(!toggle_menu(&binding));
    assert!(!menu.has_class(ACTIVE_CLASS));
    assert!(!toggle.has_class(ACTIVE_CLASS));
}

#[test]
fn close_is_idempotent() {
    let (binding, _, menu) = menu_binding();
    toggle_menu(&binding);
    close_menu(&binding);
    close_menu(&binding);
    assert!(!menu.has_class(ACTIVE_CLASS));
}

#[test]
fn menu_functions_tolerate_missing_nodes() {
    let binding = FakeBinding::new();
    assert!(!toggle_menu(&binding));
    close_menu(&binding);
    assert!(!is_menu_open(&binding));
    on_document_click(&binding, &FakeNode::new());
}

#[test]
fn click_outside_closes_menu() {
    let (binding, _, menu) = menu_binding();
    toggle_menu(&binding);
    on_document_click(&binding, &FakeNode::new());
    assert!(!menu.has_class(ACTIVE_CLASS));
}

#[test]
fn click_inside_menu_or_toggle_keeps_menu_open() {
    let (binding, toggle, menu) = menu_binding();
    toggle_menu(&binding);

    on_document_click(&binding, &menu.child().child());
    assert!(menu.has_class(ACTIVE_CLASS));

    on_document_click(&binding, &toggle.child());
    assert!(menu.has_class(ACTIVE_CLASS));

    on_document_click(&binding, &menu);
    assert!(menu.has_class(ACTIVE_CLASS));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_target_resolves_ids() {
    let mut binding = FakeBinding::new();
    let about = FakeNode::new().with_geometry(640.0, 400.0);
    binding.add_id("about", about.clone());

    assert_eq!(anchor_target(&binding, "#about"), Some(about));
    assert_eq!(anchor_target(&binding, "#missing"), None);
    assert_eq!(anchor_target(&binding, "#"), None);
    assert_eq!(anchor_target(&binding, "about"), None);
}

#[test]
fn anchor_scroll_leaves_navbar_room() {
    assert_eq!(anchor_scroll_top(640.0, 80.0), 560.0);
}

// =============================================================
// Active link
// =============================================================

#[test]
fn highlight_marks_only_matching_link() {
    let links = vec![
        FakeNode::new().with_attr("href", "#home"),
        FakeNode::new().with_attr("href", "#about"),
        FakeNode::new(),
    ];
    links[0].add_class(ACTIVE_CLASS);

    highlight_active_link(&links, "about");
    assert!(!links[0].has_class(ACTIVE_CLASS));
    assert!(links[1].has_class(ACTIVE_CLASS));
    assert!(!links[2].has_class(ACTIVE_CLASS));
}

#[test]
fn empty_active_id_clears_all_links() {
    let links = vec![FakeNode::new().with_attr("href", "#home")];
    links[0].add_class(ACTIVE_CLASS);
    highlight_active_link(&links, "");
    assert!(!links[0].has_class(ACTIVE_CLASS));
}
