//! Destination PUT over HTTP.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::errors::UploadError;
use crate::sink::BlobSink;

/// Writes payloads with a single HTTP PUT. The destination URL is handed to
/// the transport layer verbatim: no parsing, no validation, no extra headers.
/// Pre-authorized (pre-signed) URLs carry everything they need already.
#[derive(Clone, Debug)]
pub struct HttpSink {
    client: Client,
}

impl HttpSink {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Use a caller-supplied client (shared pools, custom timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BlobSink for HttpSink {
    type Error = UploadError;

    async fn put_blob(
        &self,
        destination_url: &str,
        payload: Bytes,
    ) -> Result<StatusCode, UploadError> {
        let len = payload.len();
        let resp = self
            .client
            .put(destination_url)
            .body(payload)
            .send()
            .await
            .map_err(|e| UploadError::DestinationWrite(e.to_string()))?;
        let status = resp.status();
        debug!(status = %status, bytes = len, "destination responded");
        Ok(status)
    }
}
