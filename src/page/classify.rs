//! Heuristic page classification
//!
//! Decides whether a fetched page is article content or a navigation
//! listing using structural signals only; the portal exposes no explicit
//! metadata for this. The decision is an ordered rule list evaluated
//! top-to-bottom with early exit, content-shape signals before
//! navigation-shape signals.

use crate::config::SelectorProfile;
use scraper::{ElementRef, Html, Selector};

/// The kind of a visited page, determined once and never reconsidered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// A page whose primary purpose is prose content to be extracted
    Content,
    /// A page whose primary purpose is to link to other pages
    Listing,
}

/// Classifies a parsed page as content or listing
///
/// Rules, in priority order:
/// 1. The article container resolves and its article body holds at least
///    one non-whitespace text node → `Content`
/// 2. Within the view root (whole document if absent), the sub-topics list
///    resolves with at least one list item → `Listing`
/// 3. The related-articles list resolves with at least one list item
///    containing an anchor → `Listing`
/// 4. Default → `Listing`
///
/// The default means a page with no recognized markers is treated as
/// navigation rather than as an error, so the crawl neither swallows pages
/// it cannot interpret nor attempts content extraction where there is none.
/// A malformed page therefore classifies as an empty listing; that is a
/// deliberate policy choice inherited from the original heuristics.
pub fn classify(document: &Html, profile: &SelectorProfile) -> PageKind {
    if has_article_content(document, profile) {
        return PageKind::Content;
    }
    if has_sub_topics(document, profile) {
        return PageKind::Listing;
    }
    if has_related_articles(document, profile) {
        return PageKind::Listing;
    }
    PageKind::Listing
}

/// Rule 1 predicate: a non-empty article body inside the article container
pub fn has_article_content(document: &Html, profile: &SelectorProfile) -> bool {
    let Some(container) = profile.article_container.select_first(document) else {
        return false;
    };
    match profile.article_body.select_first_in(container) {
        Some(body) => has_text(body),
        None => false,
    }
}

/// Rule 2 predicate: a sub-topics list with at least one item
pub fn has_sub_topics(document: &Html, profile: &SelectorProfile) -> bool {
    let list = match profile.view_root.select_first(document) {
        Some(view) => profile.sub_topics.select_first_in(view),
        None => profile.sub_topics.select_first(document),
    };
    list.is_some_and(|list| select_any(list, "li"))
}

/// Rule 3 predicate: a related-articles list with at least one linked item
pub fn has_related_articles(document: &Html, profile: &SelectorProfile) -> bool {
    let list = match profile.view_root.select_first(document) {
        Some(view) => profile.more_articles.select_first_in(view),
        None => profile.more_articles.select_first(document),
    };
    let Some(list) = list else {
        return false;
    };
    if let Ok(item_selector) = Selector::parse("li") {
        return list
            .select(&item_selector)
            .any(|item| select_any(item, "a"));
    }
    false
}

fn has_text(element: ElementRef<'_>) -> bool {
    element.text().any(|t| !t.trim().is_empty())
}

fn select_any(scope: ElementRef<'_>, selector: &str) -> bool {
    match Selector::parse(selector) {
        Ok(parsed) => scope.select(&parsed).next().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SelectorProfile {
        SelectorProfile::default()
    }

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    const ARTICLE_PAGE: &str = r#"
        <html><body><div id="eg-ss-view">
        <div id="eg-ss-article-content">
            <div id="article-body"><h1>Title</h1><p>Some prose.</p></div>
        </div>
        </div></body></html>
    "#;

    const LISTING_PAGE: &str = r#"
        <html><body><div id="eg-ss-view">
        <ul id="sub-topics-list">
            <li><a href="/topic/1">One</a></li>
            <li><a href="/topic/2">Two</a></li>
        </ul>
        </div></body></html>
    "#;

    #[test]
    fn test_article_body_with_text_is_content() {
        assert_eq!(classify(&doc(ARTICLE_PAGE), &profile()), PageKind::Content);
    }

    #[test]
    fn test_article_body_class_variant_is_content() {
        let html = r#"
            <div id="eg-ss-article-content">
                <div class="article-body"><p>Prose here.</p></div>
            </div>
        "#;
        assert_eq!(classify(&doc(html), &profile()), PageKind::Content);
    }

    #[test]
    fn test_content_wins_over_copresent_listing_markers() {
        let html = r#"
            <div id="eg-ss-view">
            <div id="eg-ss-article-content">
                <div id="article-body"><p>Prose.</p></div>
            </div>
            <ul id="sub-topics-list"><li><a href="/x">X</a></li></ul>
            </div>
        "#;
        assert_eq!(classify(&doc(html), &profile()), PageKind::Content);
    }

    #[test]
    fn test_whitespace_only_body_is_not_content() {
        let html = r#"
            <div id="eg-ss-article-content">
                <div id="article-body">
                </div>
            </div>
        "#;
        assert_eq!(classify(&doc(html), &profile()), PageKind::Listing);
    }

    #[test]
    fn test_container_without_body_is_not_content() {
        let html = r#"<div id="eg-ss-article-content"><p>stray text</p></div>"#;
        assert_eq!(classify(&doc(html), &profile()), PageKind::Listing);
    }

    #[test]
    fn test_sub_topics_list_is_listing() {
        assert_eq!(classify(&doc(LISTING_PAGE), &profile()), PageKind::Listing);
        assert!(has_sub_topics(&doc(LISTING_PAGE), &profile()));
    }

    #[test]
    fn test_empty_sub_topics_list_does_not_fire_rule_two() {
        let html = r#"<div id="eg-ss-view"><ul id="sub-topics-list"></ul></div>"#;
        assert!(!has_sub_topics(&doc(html), &profile()));
    }

    #[test]
    fn test_related_articles_with_anchor_is_listing() {
        let html = r#"
            <div id="eg-ss-view">
            <div id="eg-ss-topic-more-articles-list-custom">
                <ul class="list-group"><li><a href="/article/9">Nine</a></li></ul>
            </div>
            </div>
        "#;
        assert!(has_related_articles(&doc(html), &profile()));
        assert_eq!(classify(&doc(html), &profile()), PageKind::Listing);
    }

    #[test]
    fn test_related_articles_without_anchor_does_not_fire_rule_three() {
        let html = r#"
            <div id="eg-ss-topic-more-articles-list-custom">
                <ul class="list-group"><li>plain item</li></ul>
            </div>
        "#;
        assert!(!has_related_articles(&doc(html), &profile()));
    }

    #[test]
    fn test_unrecognized_page_defaults_to_listing() {
        let html = "<html><body><p>Nothing recognizable.</p></body></html>";
        assert_eq!(classify(&doc(html), &profile()), PageKind::Listing);
    }

    #[test]
    fn test_markers_outside_view_root_still_checked_when_root_absent() {
        let html = r#"<ul id="sub-topics-list"><li><a href="/x">X</a></li></ul>"#;
        assert!(has_sub_topics(&doc(html), &profile()));
    }
}
