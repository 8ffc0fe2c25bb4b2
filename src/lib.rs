//! drivelink - Rewrite Google Drive share links into direct-access URLs.
//!
//! This library provides functionality to:
//! - Detect Drive share links in either of the two common shapes
//!   (`/d/<ID>` path segment, `?id=<ID>` query parameter)
//! - Rewrite them into direct-content URLs, optionally wrapped behind a
//!   same-origin image-proxy endpoint
//! - Fetch the resolved content and stream it to disk
//!
//! Normalization is lenient: anything that is not a recognized share link
//! passes through unchanged, and no input can make it fail.
//!
//! # Example
//!
//! ```
//! use drivelink::LinkNormalizer;
//!
//! let normalizer = LinkNormalizer::direct();
//!
//! let url = normalizer.normalize("https://drive.google.com/file/d/1abc123/view");
//! assert_eq!(url, "https://drive.google.com/uc?export=view&id=1abc123");
//!
//! // Non-Drive inputs are returned untouched.
//! assert_eq!(
//!     normalizer.normalize("https://example.com/a.png"),
//!     "https://example.com/a.png"
//! );
//! ```

pub mod error;
pub mod models;
pub mod normalizer;
pub mod relay;
pub mod url_parser;

// Re-exports for convenience
pub use error::{LinkError, Result};
pub use models::NormalizedLink;
pub use normalizer::{normalize, LinkNormalizer, LinkVariant};
pub use relay::{FetchedFile, RelayClient};
pub use url_parser::extract_file_id;
