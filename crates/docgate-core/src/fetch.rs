//! The fetch capability seam.

use std::future::Future;

use crate::error::FetchError;

/// Retrieves a document as text.
///
/// Implementations fail with [`FetchError`] on a non-success status or a
/// transport failure. Timeouts and retries are theirs to decide.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
