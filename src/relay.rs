//! Fetching side of the image proxy: stream remote content to disk.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{LinkError, Result};

/// Client that fetches a target URL on behalf of the caller and streams the
/// bytes to local storage, the way the `/api/proxy-image` relay does for
/// browsers that get access-denied responses on direct hot-links.
pub struct RelayClient {
    http: Client,
}

/// What a completed fetch wrote and where.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    pub path: PathBuf,
    pub content_type: Option<String>,
    pub bytes: u64,
}

impl RelayClient {
    /// Create a new RelayClient.
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Fetch `target_url` and stream the response body to `destination`.
    ///
    /// Non-success upstream statuses are reported as errors with the response
    /// body as the message. When `destination` is a directory the file is
    /// named `<stem>.<ext>`, with the extension derived from the response
    /// content type.
    pub async fn fetch<P: AsRef<Path>>(
        &self,
        target_url: &str,
        destination: P,
        stem: &str,
    ) -> Result<FetchedFile> {
        let destination = destination.as_ref();

        debug!(url = target_url, "fetching remote content");

        let response = self.http.get(target_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LinkError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let final_path = if destination.is_dir() {
            destination.join(filename_for(stem, content_type.as_deref()))
        } else {
            destination.to_path_buf()
        };

        // Stream to file
        let mut file = File::create(&final_path).await?;
        let mut stream = response.bytes_stream();
        let mut bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            bytes += chunk.len() as u64;
            file.write_all(&chunk).await?;
        }

        file.flush().await?;

        debug!(bytes, path = %final_path.display(), "fetch complete");

        Ok(FetchedFile {
            path: final_path,
            content_type,
            bytes,
        })
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick a filename for `stem`, taking the extension from the content type
/// when one is known.
fn filename_for(stem: &str, content_type: Option<&str>) -> String {
    let extension = content_type
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim())
        .and_then(mime_guess::get_mime_extensions_str)
        .and_then(|exts| exts.first().copied());

    match extension {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    }
}
