use super::*;
use crate::testing::{FakeBinding, FakeNode};

#[test]
fn focus_ring_applies_and_clears() {
    let node = FakeNode::new();
    focus_ring(&node, true);
    assert_eq!(node.style("outline").as_deref(), Some("2px solid var(--primary-color)"));
    assert_eq!(node.style("outline-offset").as_deref(), Some("2px"));

    focus_ring(&node, false);
    assert_eq!(node.style("outline"), None);
    assert_eq!(node.style("outline-offset"), None);
}

#[test]
fn copyright_year_replaces_first_occurrence() {
    assert_eq!(replace_copyright_year("© 2024 Jane. All rights reserved.", 2026), "© 2026 Jane. All rights reserved.");
    assert_eq!(replace_copyright_year("2024-2024", 2026), "2026-2024");
    assert_eq!(replace_copyright_year("No year here", 2026), "No year here");
}

#[test]
fn update_copyright_rewrites_footer() {
    let mut binding = FakeBinding::new();
    let footer = binding.slot("copyright_text");
    footer.set_inner_html("&copy; 2024 Jane");
    update_copyright(&binding, 2027);
    assert_eq!(footer.inner_html(), "&copy; 2027 Jane");
}

#[test]
fn update_copyright_keeps_footer_markup() {
    let markup = r#"&copy; 2024 <a href="/">Jane</a> · Made with <i class="fas fa-heart"></i>"#;
    let footer = FakeNode::new().with_html(markup);
    let mut binding = FakeBinding::new();
    binding.named.insert("copyright_text", footer.clone());

    update_copyright(&binding, 2026);

    assert_eq!(
        footer.inner_html(),
        r#"&copy; 2026 <a href="/">Jane</a> · Made with <i class="fas fa-heart"></i>"#
    );
}

#[test]
fn update_copyright_without_footer_is_noop() {
    update_copyright(&FakeBinding::new(), 2027);
}

#[test]
fn visibility_toggles_animation_play_state() {
    let mut binding = FakeBinding::new();
    let body = binding.slot("body");
    on_visibility_change(&binding, true);
    assert_eq!(body.style("animation-play-state").as_deref(), Some("paused"));
    on_visibility_change(&binding, false);
    assert_eq!(body.style("animation-play-state").as_deref(), Some("running"));
}
