//! Link extraction from navigation fragments
//!
//! Pulls anchors out of a navigation subtree, resolves them against the
//! page URL, and keeps only links the origin filter permits.

use crate::config::OriginConfig;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the deduplicated set of followable links from an HTML fragment
///
/// Anchors are kept when the href is non-empty, not a same-page fragment,
/// and not a `javascript:` pseudo-link; resolves to HTTP/HTTPS against
/// `base_url`; and passes the origin filter (allow-listed host or fixture
/// marker). Duplicate hrefs collapse to one entry.
///
/// The result is a set, so iteration order is not guaranteed; callers that
/// need deterministic traversal must sort.
pub fn extract_links(fragment_html: &str, base_url: &Url, origins: &OriginConfig) -> HashSet<Url> {
    let mut links = HashSet::new();
    if fragment_html.trim().is_empty() {
        return links;
    }

    let fragment = Html::parse_fragment(fragment_html);
    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for element in fragment.select(&anchor_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_href(href, base_url) {
                    if origins.permits(&resolved) {
                        links.insert(resolved);
                    }
                }
            }
        }
    }

    links
}

/// Resolves an href to an absolute HTTP/HTTPS URL
///
/// Returns None for hrefs that should never be followed: empty strings,
/// same-page fragments, `javascript:` pseudo-links, unresolvable hrefs, and
/// anything that resolves to a non-HTTP(S) scheme.
fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    if href.to_ascii_lowercase().starts_with("javascript:") {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
