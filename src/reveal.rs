//! Scroll-reveal tagging and the preloader hand-off.
//!
//! Elements matched by the configured selector groups are tagged at startup
//! and receive the revealed class the first time they are 10% visible, with
//! the viewport's bottom edge pulled in by 50px. A revealed element never
//! reverts.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::binding::{UiBinding, UiNode};
use crate::consts::{HERO_REVEAL_DELAY_MS, REVEAL_ROOT_MARGIN_BOTTOM_PX, REVEAL_THRESHOLD};
use crate::trigger::VisibilityOptions;

/// Marks an element as eligible for reveal.
pub const REVEAL_TAG_CLASS: &str = "animate-on-scroll";

/// Marks an element as revealed.
pub const REVEALED_CLASS: &str = "animated";

/// Added to the body once the window has loaded.
pub const LOADED_CLASS: &str = "loaded";

#[derive(Clone, Debug)]
pub struct RevealAnimator<N> {
    tagged: Vec<N>,
}

impl<N: UiNode> RevealAnimator<N> {
    /// Tag every element matched by `selectors`, each element once.
    pub fn tag<B: UiBinding<Node = N>>(binding: &B, selectors: &[String]) -> Self {
        let mut tagged: Vec<N> = Vec::new();
        for selector in selectors {
            for node in binding.query_all(selector) {
                if tagged.contains(&node) {
                    continue;
                }
                node.add_class(REVEAL_TAG_CLASS);
                tagged.push(node);
            }
        }
        log::debug!("tagged {} elements for reveal", tagged.len());
        Self { tagged }
    }

    #[must_use]
    pub fn options() -> VisibilityOptions {
        VisibilityOptions::once(REVEAL_THRESHOLD).with_bottom_margin(REVEAL_ROOT_MARGIN_BOTTOM_PX)
    }

    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.tagged
    }

    /// Tagged elements not yet revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tagged.iter().filter(|n| !n.has_class(REVEALED_CLASS)).count()
    }

    pub fn reveal(&self, node: &N) {
        node.add_class(REVEALED_CLASS);
    }
}

/// Mark the page as loaded. Returns the delay after which
/// [`reveal_hero`] should run.
pub fn on_window_load<B: UiBinding>(binding: &B) -> u32 {
    if let Some(body) = binding.body() {
        body.add_class(LOADED_CLASS);
    }
    HERO_REVEAL_DELAY_MS
}

pub fn reveal_hero<B: UiBinding>(binding: &B) {
    if let Some(hero) = binding.hero_content() {
        hero.add_class(REVEALED_CLASS);
    }
}
