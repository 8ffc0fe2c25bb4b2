//! Error types for the drivelink crate.

use thiserror::Error;

/// Errors surfaced by strict extraction and the relay fetch path.
///
/// Lenient normalization ([`crate::normalizer`]) never returns these;
/// unrecognized input degrades to passthrough there.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Unrecognized share link: {0}")]
    UnrecognizedLink(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to write fetched content: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for LinkError.
pub type Result<T> = std::result::Result<T, LinkError>;
