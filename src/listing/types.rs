//! Data structures for extracted and ranked listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title used when no title locator matches
pub const DEFAULT_TITLE: &str = "Sin título";

/// A listing as collected from the page, before ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// 1-indexed position among kept entries, reassigned by ranking
    pub position: usize,

    pub title: String,

    /// Price text exactly as rendered (digits and separators, no currency)
    pub price: String,

    /// Absolute URL, or empty when the entry had no link
    pub link: String,
}

/// A listing after relevance ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedListing {
    /// Final 1-indexed position, contiguous within one result set
    pub position: usize,
    pub title: String,
    pub price: String,
    pub link: String,

    /// Whether the title contains every query token as a whole word
    pub exact_match: bool,
}

impl RankedListing {
    #[must_use]
    pub fn from_listing(listing: Listing, position: usize, exact_match: bool) -> Self {
        Self {
            position,
            title: listing.title,
            price: listing.price,
            link: listing.link,
            exact_match,
        }
    }
}

/// Ranked listings for one query, with run metadata.
///
/// Built once by the assembler and never mutated afterwards. Counts are
/// derived from `listings` at construction, including when loaded from JSON:
/// stored counts are ignored and recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredSearchResult")]
pub struct SearchResult {
    query: String,
    timestamp: DateTime<Utc>,
    total_count: usize,
    exact_count: usize,
    partial_count: usize,
    listings: Vec<RankedListing>,
}

/// On-disk shape of a [`SearchResult`], minus the derived counts
#[derive(Deserialize)]
struct StoredSearchResult {
    query: String,
    timestamp: DateTime<Utc>,
    listings: Vec<RankedListing>,
}

impl From<StoredSearchResult> for SearchResult {
    fn from(stored: StoredSearchResult) -> Self {
        Self::new(stored.query, stored.timestamp, stored.listings)
    }
}

impl SearchResult {
    pub(crate) fn new(
        query: String,
        timestamp: DateTime<Utc>,
        listings: Vec<RankedListing>,
    ) -> Self {
        let total_count = listings.len();
        let exact_count = listings.iter().filter(|l| l.exact_match).count();
        Self {
            query,
            timestamp,
            total_count,
            exact_count,
            partial_count: total_count - exact_count,
            listings,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.exact_count
    }

    #[must_use]
    pub fn partial_count(&self) -> usize {
        self.partial_count
    }

    #[must_use]
    pub fn listings(&self) -> &[RankedListing] {
        &self.listings
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_recomputes_counts() {
        let json = r#"{
            "query": "laptop",
            "timestamp": "2026-10-17T12:30:05Z",
            "total_count": 7,
            "exact_count": 9,
            "partial_count": 0,
            "listings": [
                {"position": 1, "title": "Laptop HP", "price": "12,999", "link": "", "exact_match": true},
                {"position": 2, "title": "Funda", "price": "299", "link": "", "exact_match": false}
            ]
        }"#;

        let result: SearchResult = serde_json::from_str(json).expect("valid json");
        assert_eq!(result.total_count(), 2);
        assert_eq!(result.exact_count(), 1);
        assert_eq!(result.partial_count(), 1);
    }

    #[test]
    fn test_deserialize_without_counts() {
        let json = r#"{"query": "x", "timestamp": "2026-10-17T12:30:05Z", "listings": []}"#;
        let result: SearchResult = serde_json::from_str(json).expect("valid json");
        assert_eq!(result.total_count(), 0);
        assert!(result.is_empty());
    }
}
