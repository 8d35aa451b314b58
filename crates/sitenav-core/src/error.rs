//! Error types for sitenav
//!
//! Menu operations never fail: a missing element turns them into no-ops.
//! These errors only describe failures at the page boundary, which callers
//! log and swallow.

use thiserror::Error;

/// Failure raised by a [`NavSurface`](crate::NavSurface) or while mounting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Browser window is not available")]
    WindowUnavailable,

    #[error("Document is not available")]
    DocumentUnavailable,

    #[error("Failed to attach '{event}' listener: {message}")]
    Listener { event: &'static str, message: String },

    #[error("Failed to schedule timer: {message}")]
    Timer { message: String },

    #[error("Failed to open {url}: {message}")]
    OpenWindow { url: String, message: String },
}

impl NavError {
    /// Whether the error means there is no page to drive at all
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::WindowUnavailable | Self::DocumentUnavailable)
    }
}
