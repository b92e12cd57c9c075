//! Configuration module for marketplace searches
//!
//! This module provides the `ScrapeConfig` struct and its type-safe builder
//! for configuring one search run: what to search for, how many entries to
//! inspect, how the browser is launched, and where results are written.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithQuery, validate_query};
pub use types::ScrapeConfig;
