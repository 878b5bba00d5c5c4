//! Content conversion
//!
//! Renders an extracted article fragment to Markdown and pairs it with its
//! source URL. Conversion failure is local: the engine skips the part and
//! the traversal continues.

use url::Url;

/// One converted content page: the Markdown body plus where it came from
///
/// Ordering among parts follows traversal order (depth-first, link order
/// within a page), not completion time.
#[derive(Debug, Clone)]
pub struct DocumentPart {
    /// The URL the content was extracted from
    pub source_url: Url,
    /// The article body rendered as Markdown
    pub markdown: String,
}

impl DocumentPart {
    /// The provenance line naming this part's source
    pub fn provenance(&self) -> String {
        format!("# Source URL: {}", self.source_url)
    }

    /// The full part text: provenance header, blank line, body
    pub fn to_markdown(&self) -> String {
        format!("{}\n\n{}", self.provenance(), self.markdown)
    }
}

/// Converts an article fragment to Markdown
///
/// Returns None for empty fragments, fragments that render to nothing but
/// whitespace, and conversion failures. Conversion is deterministic: the
/// same fragment always yields byte-identical output.
pub fn to_document(fragment_html: &str) -> Option<String> {
    if fragment_html.trim().is_empty() {
        return None;
    }

    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style"])
        .build();

    match converter.convert(fragment_html) {
        Ok(markdown) => {
            let markdown = markdown.trim().to_string();
            if markdown.is_empty() {
                None
            } else {
                Some(markdown)
            }
        }
        Err(e) => {
            tracing::warn!("HTML to Markdown conversion failed: {}", e);
            None
        }
    }
}
