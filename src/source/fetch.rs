//! HTTP and filesystem payload resolution.
//!
//! Dispatches on the shape of the local resource URI: absolute `http(s)`
//! URLs are fetched with a GET and buffered, `file` URLs and plain path
//! strings are read from the filesystem. Other schemes are rejected before
//! any I/O happens.

use std::path::Path;

use bytes::Bytes;
use reqwest::{Client, Url};
use tracing::debug;

use crate::errors::UploadError;
use crate::source::BlobSource;

#[derive(Clone, Debug)]
pub struct FetchSource {
    client: Client,
}

impl FetchSource {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Use a caller-supplied client (shared pools, custom timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_http(&self, url: Url) -> Result<Bytes, UploadError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UploadError::SourceRead(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(UploadError::SourceRead(format!(
                "source responded {status}"
            )));
        }
        let body = resp
            .bytes()
            .await
            .map_err(|e| UploadError::SourceRead(e.to_string()))?;
        debug!(status = %status, bytes = body.len(), "fetched source over http");
        Ok(body)
    }
}

impl Default for FetchSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BlobSource for FetchSource {
    type Error = UploadError;

    async fn resolve(&self, local_uri: &str) -> Result<Bytes, UploadError> {
        match Url::parse(local_uri) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.fetch_http(url).await,
            Ok(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|_| {
                    UploadError::InvalidArgument(format!("not a local file url: {local_uri}"))
                })?;
                read_file(&path).await
            }
            Ok(url) => Err(UploadError::InvalidArgument(format!(
                "unsupported scheme: {}",
                url.scheme()
            ))),
            // Not an absolute URL; treat the string as a filesystem path.
            Err(_) => read_file(Path::new(local_uri)).await,
        }
    }
}

async fn read_file(path: &Path) -> Result<Bytes, UploadError> {
    let buf = tokio::fs::read(path)
        .await
        .map_err(|e| UploadError::SourceRead(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), bytes = buf.len(), "read local file");
    Ok(Bytes::from(buf))
}
