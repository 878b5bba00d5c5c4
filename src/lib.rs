//! kb-harvest: a depth-bounded knowledge-base article harvester
//!
//! This crate implements a recursive crawler that walks a knowledge-base
//! portal, classifies each page as article content or navigation listing,
//! converts article bodies to Markdown, and aggregates everything into a
//! single ordered document.

pub mod config;
pub mod convert;
pub mod engine;
pub mod fetch;
pub mod output;
pub mod page;

use thiserror::Error;

/// Main error type for kb-harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A depth-0 fetch failure. Without the root page there is nothing to
    /// crawl, so this is the only fetch failure that aborts a run.
    #[error("Run aborted: failed to fetch start page {url}: {source}")]
    RunAbort { url: String, source: FetchError },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch-level failures, classified so callers can react per kind.
///
/// `BlockDetected` is kept separate from generic HTTP failure because its
/// recommended handling differs: skip and continue, do not retry.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("Block/challenge page detected for {url}")]
    BlockDetected { url: String },

    #[error("Fetch failed for {url}: {message}")]
    Other { url: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for kb-harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::{CrawlConfig, SelectorChain, SelectorProfile};
pub use convert::DocumentPart;
pub use engine::{CrawlEngine, CrawlReport};
pub use fetch::{FixtureFetcher, HttpFetcher, PageFetcher};
pub use page::{classify, extract_links, PageKind};
