//! Light/dark theme preference.
//!
//! The preference is a single string in [`PreferenceStore`], read once at
//! startup and written on every toggle. It is applied as a `data-theme`
//! attribute on the document element, and the toggle's icon shows the theme
//! a click would switch to.
//!
//! TRADE-OFFS
//! ==========
//! Unknown stored values are treated as light rather than applied verbatim, so
//! a corrupted preference cannot leave the page without a theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::binding::{PreferenceStore, UiBinding, UiNode};
use crate::consts::THEME_TRANSITION_MS;

const THEME_ATTR: &str = "data-theme";
const BODY_TRANSITION: &str = "all 0.3s ease";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon classes for the toggle control.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Current theme plus the key it is persisted under.
#[derive(Clone, Debug)]
pub struct ThemeController {
    storage_key: String,
    current: Theme,
}

impl ThemeController {
    /// Read the saved preference and apply it.
    pub fn load<B: UiBinding, S: PreferenceStore>(binding: &B, store: &S, storage_key: &str) -> Self {
        let current = match store.get(storage_key) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("unknown theme preference {raw:?}, using light");
                Theme::Light
            }),
            None => Theme::default(),
        };
        apply(binding, current);
        Self { storage_key: storage_key.to_owned(), current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip, apply, and persist the theme.
    ///
    /// Returns the delay after which [`clear_transition`] should run.
    pub fn toggle<B: UiBinding, S: PreferenceStore>(&mut self, binding: &B, store: &S) -> u32 {
        self.current = self.current.toggled();
        apply(binding, self.current);
        store.set(&self.storage_key, self.current.as_str());
        if let Some(body) = binding.body() {
            body.set_style("transition", BODY_TRANSITION);
        }
        log::debug!("theme switched to {}", self.current.as_str());
        THEME_TRANSITION_MS
    }
}

/// Apply `theme` to the document element and toggle icon.
pub fn apply<B: UiBinding>(binding: &B, theme: Theme) {
    if let Some(root) = binding.root() {
        root.set_attr(THEME_ATTR, theme.as_str());
    }
    if let Some(icon) = binding.theme_icon() {
        icon.set_attr("class", theme.icon_class());
    }
}

pub fn clear_transition<B: UiBinding>(binding: &B) {
    if let Some(body) = binding.body() {
        body.set_style("transition", "");
    }
}
