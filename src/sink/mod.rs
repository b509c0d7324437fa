//! Sink abstraction
//!
//! Overview
//! --------
//! Minimal trait representing the write side of an upload: delivering a
//! payload to a destination URL. Implementations report the HTTP status the
//! destination answered with; classifying that status into success/failure
//! is the caller's concern. Transport-level failures are errors.

use bytes::Bytes;
use reqwest::StatusCode;

pub mod http;

#[async_trait::async_trait]
pub trait BlobSink {
    type Error;

    /// Write `payload` to `destination_url` and return the response status.
    /// Any received response resolves `Ok`, whatever its status code.
    async fn put_blob(&self, destination_url: &str, payload: Bytes)
        -> Result<StatusCode, Self::Error>;
}
