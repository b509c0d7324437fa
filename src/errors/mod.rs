//! Error types for blob-uploader
//!
//! Overview
//! --------
//! Canonical error enumeration used across the source and sink layers. Keep
//! variants stable and descriptive; prefer mapping external libraries into
//! these variants at module boundaries.
//!
//! Usage
//! -----
//! - Convert low-level errors at the edge (e.g., reqwest/filesystem I/O).
//! - A non-success HTTP status on the destination PUT is NOT an error: it is
//!   the `Ok(false)` result of the upload call. Only transport-level failures
//!   and rejected inputs surface here.
//!
//! Concurrency / Logging
//! ---------------------
//! Errors are `Send + Sync` and implement Display via `thiserror`.
//! Use `tracing` for context at call sites (`error!(...);`).
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    /// Input identifier rejected before any network activity (empty string,
    /// unsupported scheme).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport-level failure while resolving the local resource into a
    /// payload (connect/DNS/timeout errors, unreadable files, non-success
    /// read statuses). The destination PUT is never attempted after this.
    #[error("Source read failed: {0}")]
    SourceRead(String),

    /// Transport-level failure while writing the payload to the destination.
    #[error("Destination write failed: {0}")]
    DestinationWrite(String),
}
