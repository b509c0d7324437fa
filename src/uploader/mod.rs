//! Upload orchestration (hot path).
//!
//! Composes a [`BlobSource`] and a [`BlobSink`] into the single public
//! operation: resolve a local resource into memory, PUT the bytes to a
//! destination URL, map the response status class to a boolean. Static
//! dispatch over both seams; the default wiring shares one HTTP client
//! between the read and write halves.

use reqwest::Client;
use tracing::debug;

use crate::errors::UploadError;
use crate::sink::{http::HttpSink, BlobSink};
use crate::source::{fetch::FetchSource, BlobSource};

pub struct BlobUploader<R = FetchSource, W = HttpSink> {
    source: R,
    sink: W,
}

impl BlobUploader {
    /// Default uploader: HTTP/filesystem source reads, HTTP PUT writes.
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Build both halves on a caller-supplied client (custom timeouts,
    /// proxies, TLS settings).
    pub fn with_client(client: Client) -> Self {
        Self {
            source: FetchSource::with_client(client.clone()),
            sink: HttpSink::with_client(client),
        }
    }
}

impl Default for BlobUploader {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> BlobUploader<R, W>
where
    R: BlobSource<Error = UploadError> + Send + Sync,
    W: BlobSink<Error = UploadError> + Send + Sync,
{
    /// Compose a custom source/sink pair.
    pub fn with_parts(source: R, sink: W) -> Self {
        Self { source, sink }
    }

    /// Perform one upload: resolve `local_uri` into its full byte content,
    /// PUT those bytes to `destination_url`, and report whether the
    /// destination acknowledged with a success-class (2xx) status.
    ///
    /// Any other received status resolves `Ok(false)`; transport-level
    /// failures on either side surface as errors, and a failed read aborts
    /// the call before any write. Exactly one read and one write are
    /// performed per call; nothing is retried.
    // Pre-signed destination URLs embed credentials in the query string;
    // keep them out of spans and logs.
    #[tracing::instrument(skip(self, destination_url))]
    pub async fn upload_file(
        &self,
        destination_url: &str,
        local_uri: &str,
    ) -> Result<bool, UploadError> {
        if destination_url.trim().is_empty() {
            return Err(UploadError::InvalidArgument(
                "destination url is empty".into(),
            ));
        }
        if local_uri.trim().is_empty() {
            return Err(UploadError::InvalidArgument(
                "local resource uri is empty".into(),
            ));
        }

        let payload = self.source.resolve(local_uri).await?;
        let payload_len = payload.len();
        let status = self.sink.put_blob(destination_url, payload).await?;
        debug!(bytes = payload_len, status = %status, "upload finished");
        Ok(status.is_success())
    }
}
