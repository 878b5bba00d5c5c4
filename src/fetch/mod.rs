//! Page fetching boundary
//!
//! The fetcher is an injectable capability: the engine is generic over
//! [`PageFetcher`], and the caller decides whether a run uses the live
//! HTTP implementation or the deterministic fixture implementation. That
//! substitution point is what makes the traversal testable without network
//! access.

mod fixture;
mod http;

pub use fixture::FixtureFetcher;
pub use http::HttpFetcher;

use crate::FetchResult;
use url::Url;

/// Capability to turn a URL into rendered HTML
///
/// Implementations must surface provider block/challenge pages as
/// [`FetchError::BlockDetected`](crate::FetchError::BlockDetected) rather
/// than returning the poisoned document body.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<String>;
}
