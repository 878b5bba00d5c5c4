//! Deterministic fixture fetcher
//!
//! Synthesizes pages from URL markers instead of touching the network:
//! URLs carrying the content marker become minimal article pages, URLs
//! carrying the listing marker become listing pages linking to three
//! synthetic children (two articles, one nested listing). Each child URL is
//! derived from its parent, so the synthetic tree is unbounded and only the
//! engine's depth ceiling terminates a crawl over it.
//!
//! The portal this crate targets is slow to render and quick to block, so
//! the original tooling relied on exactly this kind of mock mode to
//! exercise traversal, classification, and aggregation; the fixture pages
//! are shaped for the default selector profile.

use crate::fetch::PageFetcher;
use crate::{FetchError, FetchResult};
use url::Url;

/// Fixture fetcher keyed by URL substring markers
#[derive(Debug, Clone)]
pub struct FixtureFetcher {
    content_marker: String,
    listing_marker: String,
}

impl FixtureFetcher {
    /// Creates a fetcher with custom markers
    ///
    /// Markers match case-insensitively: URLs are lowercased before the
    /// substring check, so the markers are lowercased here.
    pub fn new(content_marker: &str, listing_marker: &str) -> Self {
        Self {
            content_marker: content_marker.to_ascii_lowercase(),
            listing_marker: listing_marker.to_ascii_lowercase(),
        }
    }

    fn is_content_url(&self, url: &Url) -> bool {
        let s = url.as_str().to_ascii_lowercase();
        s.contains(&self.content_marker) || s.contains("/article/")
    }

    fn is_listing_url(&self, url: &Url) -> bool {
        let s = url.as_str().to_ascii_lowercase();
        s.contains(&self.listing_marker) || s.contains("/topic/")
    }

    fn content_page(url: &Url) -> String {
        format!(
            r#"<html><head><title>Fixture article for {url}</title></head><body>
<div id="eg-ss-view">
<div id="eg-ss-article-content">
<div id="article-body">
<h1>Fixture Article</h1>
<p>Synthesized content for {url}.</p>
</div>
</div>
</div>
</body></html>"#
        )
    }

    fn listing_page(&self, url: &Url) -> String {
        let base = url.as_str().trim_end_matches('/');
        let child1 = format!("{}/{}-1", base, self.content_marker);
        let child2 = format!("{}/{}-2", base, self.listing_marker);
        let child3 = format!("{}/{}-3", base, self.content_marker);
        format!(
            r#"<html><head><title>Fixture listing for {url}</title></head><body>
<div id="eg-ss-view">
<h1>Listing: {url}</h1>
<ul id="sub-topics-list">
<li><a href="{child1}">Article child 1</a></li>
<li><a href="{child2}">Listing child 2</a></li>
<li><a href="{child3}">Article child 3</a></li>
</ul>
</div>
</body></html>"#
        )
    }
}

impl Default for FixtureFetcher {
    fn default() -> Self {
        Self::new("content-item", "topic-group")
    }
}

impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<String> {
        // Content check first: a derived child URL contains both its own
        // marker and every ancestor's.
        if self.is_content_url(url) {
            tracing::debug!("Serving fixture article for {}", url);
            return Ok(Self::content_page(url));
        }
        if self.is_listing_url(url) {
            tracing::debug!("Serving fixture listing for {}", url);
            return Ok(self.listing_page(url));
        }
        Err(FetchError::Other {
            url: url.to_string(),
            message: "no fixture matches this URL".to_string(),
        })
    }
}
