//! Deferred image loading and broken-image handling.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::binding::UiNode;
use crate::trigger::VisibilityOptions;

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const DEFERRED_SRC_ATTR: &str = "data-src";
pub const LAZY_CLASS: &str = "lazy";

#[must_use]
pub fn lazy_options() -> VisibilityOptions {
    VisibilityOptions::once(0.0)
}

/// Swap the deferred source into `src`. Returns `false` if there was none.
pub fn load_deferred<N: UiNode>(img: &N) -> bool {
    let Some(src) = img.attr(DEFERRED_SRC_ATTR) else {
        return false;
    };
    img.set_attr("src", &src);
    img.remove_class(LAZY_CLASS);
    true
}

/// Hide an image that failed to load.
pub fn on_image_error<N: UiNode>(img: &N) {
    img.set_style("display", "none");
    log::warn!("failed to load image: {}", img.attr("src").unwrap_or_default());
}
