//! Error type for the boot path.
//!
//! Components never fail at runtime: missing nodes are skipped. Only wiring a
//! feature into the browser can fail, and those failures are logged by the
//! caller rather than surfaced to the page.

use thiserror::Error;

/// Failures raised while attaching components to the page.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
