//! Fallback selector chains
//!
//! A chain is an ordered list of CSS selectors tried in sequence; the first
//! selector that matches anything wins. Chains keep extraction resilient to
//! minor structural variation between pages of the same portal.

use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;

/// An ordered list of fallback CSS selectors
///
/// Selection never panics: selectors that fail to parse and documents with
/// no match are both treated as "no match".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SelectorChain(Vec<String>);

impl SelectorChain {
    /// Creates a chain from selector strings
    pub fn new(selectors: &[&str]) -> Self {
        Self(selectors.iter().map(|s| s.to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenates two chains, preserving order
    pub fn chain(&self, other: &SelectorChain) -> SelectorChain {
        let mut selectors = self.0.clone();
        selectors.extend(other.0.iter().cloned());
        SelectorChain(selectors)
    }

    /// Returns true if at least one entry parses as a CSS selector
    pub fn has_parseable_selector(&self) -> bool {
        self.0.iter().any(|s| Selector::parse(s).is_ok())
    }

    /// Returns the first element matching any selector in chain order
    ///
    /// Chain order takes priority over document order: a match for an
    /// earlier selector wins even if a later selector would match an
    /// earlier node.
    pub fn select_first<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        self.select_first_where(document, |_| true)
    }

    /// Like [`select_first`](Self::select_first), but a candidate only
    /// wins if the predicate accepts it; rejected candidates fall through
    /// to later matches and later selectors
    pub fn select_first_where<'a, P>(&self, document: &'a Html, predicate: P) -> Option<ElementRef<'a>>
    where
        P: Fn(&ElementRef<'a>) -> bool,
    {
        for selector in &self.0 {
            if let Ok(parsed) = Selector::parse(selector) {
                if let Some(element) = document.select(&parsed).find(|el| predicate(el)) {
                    return Some(element);
                }
            }
        }
        None
    }

    /// Like [`select_first`](Self::select_first), but scoped to the
    /// descendants of one element
    pub fn select_first_in<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.select_first_in_where(scope, |_| true)
    }

    /// Scoped variant of [`select_first_where`](Self::select_first_where)
    pub fn select_first_in_where<'a, P>(
        &self,
        scope: ElementRef<'a>,
        predicate: P,
    ) -> Option<ElementRef<'a>>
    where
        P: Fn(&ElementRef<'a>) -> bool,
    {
        for selector in &self.0 {
            if let Ok(parsed) = Selector::parse(selector) {
                if let Some(element) = scope.select(&parsed).find(|el| predicate(el)) {
                    return Some(element);
                }
            }
        }
        None
    }

    /// Returns the outer HTML of the first matching element
    pub fn select_first_html(&self, document: &Html) -> Option<String> {
        self.select_first(document).map(|element| element.html())
    }
}
