//! Runtime configuration.
//!
//! Pages may embed a `<script type="application/json" id="folio-config">`
//! block to override content-level settings. Every field is optional; anything
//! omitted keeps the built-in default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::Result;

/// Element id of the inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolioConfig {
    /// Storage key holding the theme preference.
    pub theme_storage_key: String,
    /// Phrases cycled by the typing effect, in order.
    pub typing_phrases: Vec<String>,
    /// Selector groups tagged for scroll reveal.
    pub reveal_selectors: Vec<String>,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// The custom cursor is only enabled above this viewport width.
    pub cursor_min_viewport_width: f64,
    /// Anchor scrolling stops this far above the target to clear the navbar.
    pub nav_scroll_offset: f64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            typing_phrases: [
                "Backend Developer",
                "API Architect",
                "Laravel Specialist",
                "RESTful API Expert",
                "PHP Artisan",
                "Scalable Systems Builder",
                "Backend Problem Solver",
                "Clean Code Evangelist",
                "Security-First Developer",
                "MySQL & PostgreSQL Ninja",
                "Microservices Engineer",
                "Server-Side Logic Master",
                "Laravel + MySQL",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            reveal_selectors: [
                ".hero-content",
                ".about-text",
                ".about-visual",
                ".skill-category",
                ".project-card",
                ".service-card",
                ".contact-info",
                ".contact-form",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            log_level: "info".to_owned(),
            cursor_min_viewport_width: 768.0,
            nav_scroll_offset: 80.0,
        }
    }
}

impl FolioConfig {
    /// Parse a configuration block.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::FolioError::Config`] when `raw` is not valid
    /// JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an optional block, falling back to defaults on absence or error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {CONFIG_ELEMENT_ID} block: {err}");
                Self::default()
            }
        }
    }

    /// Resolved log level, defaulting to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
