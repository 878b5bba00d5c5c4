//! Crawl engine
//!
//! The one stateful, recursive piece of the crate. The engine owns the
//! visited set and the ordered list of collected document parts for the
//! lifetime of a run and sequences fetch, classification, extraction, and
//! conversion for every URL it visits.

use crate::config::CrawlConfig;
use crate::convert::{to_document, DocumentPart};
use crate::fetch::PageFetcher;
use crate::page::{classify, extract_links, extract_nav_fragment, PageKind};
use crate::{HarvestError, Result};
use scraper::Html;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use url::Url;

/// The outcome of one crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// Converted content pages in traversal order (depth-first, pre-order)
    pub parts: Vec<DocumentPart>,
    /// Pages fetched and processed
    pub pages_visited: usize,
    /// Subtrees skipped after a non-root fetch failure
    pub pages_skipped: usize,
}

/// Depth-bounded recursive crawler
///
/// Generic over the fetch capability so a run can use the live HTTP
/// fetcher or a deterministic fixture fetcher without any change to the
/// traversal, classification, or extraction logic.
pub struct CrawlEngine<F> {
    fetcher: F,
    config: CrawlConfig,
    visited: HashSet<String>,
    parts: Vec<DocumentPart>,
    pages_visited: usize,
    pages_skipped: usize,
}

impl<F: PageFetcher> CrawlEngine<F> {
    /// Creates an engine for one crawl run
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            config,
            visited: HashSet::new(),
            parts: Vec::new(),
            pages_visited: 0,
            pages_skipped: 0,
        }
    }

    /// Runs the crawl from a start URL and consumes the engine
    ///
    /// Only a depth-0 fetch failure is fatal; every failure below the root
    /// is logged and absorbed as "this branch yields nothing".
    pub async fn run(mut self, start_url: &Url) -> Result<CrawlReport> {
        tracing::info!(
            "Starting crawl from {} with max depth {}",
            start_url,
            self.config.max_depth
        );

        self.visit(start_url.clone(), 0).await?;

        tracing::info!(
            "Crawl complete: {} page(s) visited, {} skipped, {} part(s) collected",
            self.pages_visited,
            self.pages_skipped,
            self.parts.len()
        );

        Ok(CrawlReport {
            parts: self.parts,
            pages_visited: self.pages_visited,
            pages_skipped: self.pages_skipped,
        })
    }

    /// Visits one URL at the given depth
    ///
    /// Both termination guards (depth ceiling, visited set) are enforced
    /// before any I/O for the candidate URL; the URL enters the visited set
    /// the instant it is claimed, not after its fetch completes, so
    /// re-discovery elsewhere in the link graph cannot duplicate work.
    fn visit(&mut self, url: Url, depth: u32) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
        Box::pin(async move {
            if depth > self.config.max_depth {
                tracing::debug!(depth, %url, "max depth exceeded, skipping");
                return Ok(());
            }
            if !self.visited.insert(url.to_string()) {
                tracing::debug!(depth, %url, "already visited, skipping");
                return Ok(());
            }

            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(source) if depth == 0 => {
                    return Err(HarvestError::RunAbort {
                        url: url.to_string(),
                        source,
                    });
                }
                Err(source) => {
                    tracing::warn!(depth, %url, "fetch failed, skipping subtree: {}", source);
                    self.pages_skipped += 1;
                    return Ok(());
                }
            };
            self.pages_visited += 1;

            // The parsed document stays local to this call; only the
            // extracted links outlive it.
            let children = {
                let document = Html::parse_document(&html);
                match classify(&document, &self.config.selectors) {
                    PageKind::Content => {
                        tracing::info!(depth, %url, "content page");
                        self.collect_content(&url, &document, depth);
                        Vec::new()
                    }
                    PageKind::Listing => {
                        tracing::info!(depth, %url, "listing page");
                        self.listing_children(&url, &document, depth)
                    }
                }
            };

            for child in children {
                self.visit(child, depth + 1).await?;
            }

            Ok(())
        })
    }

    /// Extracts and converts the article body of a content page
    ///
    /// An extraction miss or a conversion that yields nothing is a normal
    /// local outcome: the page contributes no part and traversal continues.
    fn collect_content(&mut self, url: &Url, document: &Html, depth: u32) {
        let fragment = match self
            .config
            .selectors
            .article_body
            .select_first_html(document)
        {
            Some(fragment) => fragment,
            None => {
                tracing::warn!(depth, %url, "content page has no extractable article body");
                return;
            }
        };

        match to_document(&fragment) {
            Some(markdown) => {
                tracing::debug!(depth, %url, "collected document part");
                self.parts.push(DocumentPart {
                    source_url: url.clone(),
                    markdown,
                });
            }
            None => {
                tracing::warn!(depth, %url, "article body conversion yielded nothing");
            }
        }
    }

    /// Extracts navigation links from a listing page, sorted for
    /// deterministic traversal (link extraction returns a set)
    fn listing_children(&self, url: &Url, document: &Html, depth: u32) -> Vec<Url> {
        let fragment = match extract_nav_fragment(document, &self.config.selectors) {
            Some(fragment) => fragment,
            None => {
                tracing::debug!(depth, %url, "listing page has no navigation block");
                return Vec::new();
            }
        };

        let mut links: Vec<Url> = extract_links(&fragment, url, &self.config.origins)
            .into_iter()
            .collect();
        links.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        tracing::debug!(depth, %url, "found {} navigation link(s)", links.len());
        links
    }
}
