//! Lenient rewriting of share links into direct-access or proxied URLs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::NormalizedLink;
use crate::url_parser::{direct_url, extract_file_id};

/// Default path of the same-origin image-proxy endpoint.
pub const DEFAULT_PROXY_PATH: &str = "/api/proxy-image";

/// RFC 3986 unreserved characters survive encoding; everything else is
/// escaped when the canonical URL is embedded as a query parameter.
const PROXY_QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Which URL form a recognized share link is rewritten into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    /// The bare canonical `uc?export=view` URL.
    Direct,
    /// The canonical URL percent-encoded behind the image-proxy endpoint,
    /// for deployments where direct hot-linking gets access-denied responses.
    Proxied,
}

/// Rewrites Google Drive share links into direct-access URLs.
///
/// Normalization is total: any input that is not a recognized share link is
/// returned unchanged, including empty strings and malformed URLs. Callers
/// treat the result as a best-effort possibly-rewritten URL.
#[derive(Debug, Clone)]
pub struct LinkNormalizer {
    variant: LinkVariant,
    proxy_path: String,
}

impl LinkNormalizer {
    /// Normalizer producing bare canonical direct-content URLs.
    pub fn direct() -> Self {
        Self {
            variant: LinkVariant::Direct,
            proxy_path: DEFAULT_PROXY_PATH.to_string(),
        }
    }

    /// Normalizer wrapping rewritten URLs behind the default proxy endpoint.
    pub fn proxied() -> Self {
        Self::proxied_at(DEFAULT_PROXY_PATH)
    }

    /// Normalizer wrapping rewritten URLs behind a proxy endpoint at `path`.
    pub fn proxied_at(path: impl Into<String>) -> Self {
        Self {
            variant: LinkVariant::Proxied,
            proxy_path: path.into(),
        }
    }

    /// The variant this normalizer rewrites into.
    pub fn variant(&self) -> LinkVariant {
        self.variant
    }

    /// Rewrite `url` if it is a recognized share link, or return it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use drivelink::LinkNormalizer;
    ///
    /// let normalizer = LinkNormalizer::direct();
    ///
    /// let url = normalizer.normalize("https://drive.google.com/file/d/1abc123/view");
    /// assert_eq!(url, "https://drive.google.com/uc?export=view&id=1abc123");
    ///
    /// assert_eq!(normalizer.normalize("not a url at all"), "not a url at all");
    /// ```
    pub fn normalize(&self, url: &str) -> String {
        self.resolve(url).url
    }

    /// Like [`normalize`](Self::normalize), but keep the input and the
    /// extracted identifier alongside the output URL.
    pub fn resolve(&self, url: &str) -> NormalizedLink {
        match extract_file_id(url) {
            Ok(file_id) => {
                let rewritten = self.render(&file_id);
                NormalizedLink {
                    input: url.to_string(),
                    file_id: Some(file_id),
                    url: rewritten,
                }
            }
            Err(_) => NormalizedLink {
                input: url.to_string(),
                file_id: None,
                url: url.to_string(),
            },
        }
    }

    fn render(&self, file_id: &str) -> String {
        let canonical = direct_url(file_id);
        match self.variant {
            LinkVariant::Direct => canonical,
            LinkVariant::Proxied => format!(
                "{}?url={}",
                self.proxy_path,
                utf8_percent_encode(&canonical, PROXY_QUERY_SET)
            ),
        }
    }
}

impl Default for LinkNormalizer {
    fn default() -> Self {
        Self::direct()
    }
}

/// Rewrite `url` into its canonical direct-content form, or return it
/// unchanged if it is not a recognized share link.
pub fn normalize(url: &str) -> String {
    LinkNormalizer::direct().normalize(url)
}
