//! Configuration validation
//!
//! Catches configurations that would make a crawl silently useless, such as
//! selector chains that can never match.

use crate::config::types::CrawlConfig;
use crate::page::SelectorChain;
use crate::ConfigError;

/// Validates a loaded configuration
///
/// # Rules
///
/// - Every selector chain must contain at least one selector
/// - Every selector chain must contain at least one *parseable* CSS selector
///   (unparseable entries are tolerated at runtime but a fully unparseable
///   chain can never match anything)
/// - The fetch timeout must be non-zero
/// - Origin fixture markers must not be empty strings (an empty marker would
///   match every URL and defeat the origin filter)
pub fn validate_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_chain(&config.selectors.article_container, "article-container")?;
    validate_chain(&config.selectors.article_body, "article-body")?;
    validate_chain(&config.selectors.view_root, "view-root")?;
    validate_chain(&config.selectors.sub_topics, "sub-topics")?;
    validate_chain(&config.selectors.more_articles, "more-articles")?;

    if config.fetch.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.timeout-secs must be greater than zero".to_string(),
        ));
    }

    if config
        .origins
        .fixture_markers
        .iter()
        .any(|m| m.trim().is_empty())
    {
        return Err(ConfigError::Validation(
            "origins.fixture-markers must not contain empty strings".to_string(),
        ));
    }

    Ok(())
}

fn validate_chain(chain: &SelectorChain, name: &str) -> Result<(), ConfigError> {
    if chain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "selectors.{} must contain at least one selector",
            name
        )));
    }

    if !chain.has_parseable_selector() {
        return Err(ConfigError::Validation(format!(
            "selectors.{} contains no parseable CSS selector",
            name
        )));
    }

    Ok(())
}
