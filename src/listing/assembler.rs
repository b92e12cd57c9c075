//! Final result assembly

use chrono::Utc;

use super::types::{RankedListing, SearchResult};

/// Wrap ranked listings with the query and a timestamp taken now
#[must_use]
pub fn assemble(query: &str, ranked: Vec<RankedListing>) -> SearchResult {
    SearchResult::new(query.to_string(), Utc::now(), ranked)
}
