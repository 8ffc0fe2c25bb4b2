//! Share-link matching and Drive file identifier extraction.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{LinkError, Result};

/// The two recognized share-link shapes, as alternatives of one pattern:
/// a `/d/<ID>` path segment or a `?id=<ID>` query parameter. Only the
/// leftmost occurrence in the input is considered.
static SHARE_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/d/(?P<path_id>[a-zA-Z0-9_-]+)|\?id=(?P<query_id>[a-zA-Z0-9_-]+)")
        .expect("Invalid share link regex")
});

/// Base of the direct-content URL form served by Drive.
const DIRECT_CONTENT_BASE: &str = "https://drive.google.com/uc?export=view";

/// Extract a Google Drive file identifier from a share URL.
///
/// Supports the following URL shapes:
/// - `https://drive.google.com/file/d/<ID>/view`
/// - `https://drive.google.com/open?id=<ID>`
/// - `https://drive.google.com/uc?id=<ID>`
///
/// Exactly one of the two capture groups is populated on a match; whichever
/// shape occurs first in the string wins. Anything else is rejected.
///
/// # Examples
///
/// ```
/// use drivelink::url_parser::extract_file_id;
///
/// let id = extract_file_id("https://drive.google.com/file/d/1abc123/view").unwrap();
/// assert_eq!(id, "1abc123");
///
/// assert!(extract_file_id("https://example.com/a.png").is_err());
/// ```
pub fn extract_file_id(url: &str) -> Result<String> {
    if let Some(captures) = SHARE_LINK_REGEX.captures(url) {
        if let Some(id) = captures.name("path_id").or_else(|| captures.name("query_id")) {
            return Ok(id.as_str().to_string());
        }
    }

    Err(LinkError::UnrecognizedLink(url.to_string()))
}

/// Build the canonical direct-content URL for a file identifier.
///
/// The identifier alphabet (`[a-zA-Z0-9_-]`) is already URL-safe, so it is
/// substituted literally.
pub fn direct_url(file_id: &str) -> String {
    format!("{}&id={}", DIRECT_CONTENT_BASE, file_id)
}
