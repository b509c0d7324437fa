//! Source abstraction
//!
//! Overview
//! --------
//! Minimal trait representing the read side of an upload: resolving a local
//! resource identifier into a fully buffered binary payload. Concrete
//! implementations include HTTP and filesystem fetching.

use bytes::Bytes;

pub mod fetch;

#[async_trait::async_trait]
pub trait BlobSource {
    type Error;

    /// Resolve `local_uri` into the complete byte content of the resource.
    /// The body is buffered in memory before returning; callers receive
    /// exactly the bytes the resource held at call time.
    async fn resolve(&self, local_uri: &str) -> Result<Bytes, Self::Error>;
}
