//! # folio
//!
//! Client-side interactivity for a single-page portfolio site, compiled to
//! WebAssembly and attached to server-rendered markup.
//!
//! The crate is split the same way throughout: each component owns an explicit
//! state object whose logic runs against the [`binding::UiBinding`] traits and
//! is tested natively, while the `hydrate` feature adds the [`web`] layer that
//! implements those traits over `web-sys` and wires browser events and timers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`binding`] | UI binding traits (nodes, named accessors, preference storage) |
//! | [`trigger`] | Visibility trigger bookkeeping (thresholds, one-shot unobserve) |
//! | [`counter`] | Animated numeric counters |
//! | [`skills`] | Staggered skill-bar fills |
//! | [`reveal`] | Scroll-reveal tagging and the preloader hand-off |
//! | [`scroll`] | Scroll state tracker (navbar, back-to-top, active section, parallax) |
//! | [`theme`] | Light/dark theme preference |
//! | [`typing`] | Typing-text effect |
//! | [`nav`] | Mobile menu and in-page anchor scrolling |
//! | [`extras`] | Peripheral conveniences (form, cursor, swipe, keys, images, page) |
//! | [`config`] | Runtime configuration |
//! | [`consts`] | Fixed thresholds and timings |
//! | [`error`] | Error type for the boot path |

pub mod binding;
pub mod config;
pub mod consts;
pub mod counter;
pub mod error;
pub mod extras;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod skills;
pub mod theme;
pub mod trigger;
pub mod typing;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod testing;

/// WASM entry point: installs diagnostics and boots every component.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    web::runtime::start();
}
