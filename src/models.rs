//! Data models for normalization results.

use serde::{Deserialize, Serialize};

/// Outcome of normalizing a single input string.
///
/// `file_id` is present only when the input matched one of the recognized
/// share-link shapes; otherwise `url` equals `input`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedLink {
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    pub url: String,
}

impl NormalizedLink {
    /// Whether the input was recognized and rewritten.
    pub fn is_rewritten(&self) -> bool {
        self.file_id.is_some()
    }
}

impl std::fmt::Display for NormalizedLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
