//! Page analysis module
//!
//! Everything that operates on one parsed page: fallback selector chains,
//! the content/listing classifier, and navigation link extraction. All
//! functions here are pure over their inputs; the crawl engine owns every
//! piece of mutable state.

mod classify;
mod links;
mod selector;

pub use classify::{classify, has_article_content, has_related_articles, has_sub_topics, PageKind};
pub use links::extract_links;
pub use selector::SelectorChain;

use crate::config::SelectorProfile;
use scraper::{ElementRef, Html, Selector};

/// Extracts the navigation fragment of a listing page
///
/// Scopes the search to the view root when one resolves (falling back to
/// the whole document), then walks the combined navigation chain:
/// sub-topics list first, then the related-articles list. A matched block
/// that holds no list items is skipped in favor of later matches, so an
/// empty sub-topics list does not shadow a populated related-articles
/// list.
pub fn extract_nav_fragment(document: &Html, profile: &SelectorProfile) -> Option<String> {
    let navigation = profile.navigation();
    let block = match profile.view_root.select_first(document) {
        Some(view) => navigation.select_first_in_where(view, has_list_item),
        None => navigation.select_first_where(document, has_list_item),
    };
    block.map(|el| el.html())
}

fn has_list_item(element: &ElementRef<'_>) -> bool {
    match Selector::parse("li") {
        Ok(selector) => element.select(&selector).next().is_some(),
        Err(_) => false,
    }
}
