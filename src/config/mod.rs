//! Configuration module for kb-harvest
//!
//! Provides the crawl configuration types, TOML parsing, and validation.
//! A built-in default profile targets the knowledge-base portal the
//! harvester was written for; a config file can override any part of it.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{CrawlConfig, FetchConfig, OriginConfig, OutputConfig, SelectorProfile};
pub use validation::validate_config;

pub use crate::page::SelectorChain;
