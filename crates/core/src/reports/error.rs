//! Report error types.
//!
//! Report synthesis itself cannot fail. These errors come from handing a
//! finished report to a renderer.

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The renderer rejected the report.
    #[error("Render failed: {0}")]
    Render(String),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the output failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}
