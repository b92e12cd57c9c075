//! Relevance ranking of collected listings against the query
//!
//! A listing is an exact match when every query token appears in its title as
//! a whole word. Ranking is a stable partition, exact matches first, so the
//! site's own order is kept inside each group.

use regex::Regex;
use tracing::{debug, warn};

use super::types::{Listing, RankedListing};

/// Lowercase `query` and split it on runs of whitespace
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whole-word matcher for a tokenized query
///
/// A token matches when it is neither preceded nor followed by a word
/// character, so `mesa` does not match inside `mesada`. Word characters are
/// Unicode-aware: accented letters count.
#[derive(Debug)]
pub struct QueryMatcher {
    patterns: Vec<(String, Option<Regex>)>,
}

impl QueryMatcher {
    #[must_use]
    pub fn new(query: &str) -> Self {
        let patterns = tokenize(query)
            .into_iter()
            .map(|token| {
                let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(&token));
                let compiled = match Regex::new(&pattern) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!("Could not compile matcher for token '{}': {}", token, e);
                        None
                    }
                };
                (token, compiled)
            })
            .collect();

        Self { patterns }
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.patterns.len()
    }

    /// Whether every token occurs in `title` as a whole word.
    ///
    /// With no tokens this is vacuously true.
    #[must_use]
    pub fn matches_all(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.patterns
            .iter()
            .all(|(_, re)| re.as_ref().is_some_and(|re| re.is_match(&title)))
    }
}

/// Rank `listings` by relevance to `query`.
///
/// Exact matches come first, then partial matches, each group in its original
/// order. Positions are renumbered from 1.
#[must_use]
pub fn classify(listings: Vec<Listing>, query: &str) -> Vec<RankedListing> {
    let matcher = QueryMatcher::new(query);

    let (exact, partial): (Vec<Listing>, Vec<Listing>) = listings
        .into_iter()
        .partition(|listing| matcher.matches_all(&listing.title));

    debug!(
        tokens = matcher.token_count(),
        exact = exact.len(),
        partial = partial.len(),
        "Classified listings"
    );

    let exact_len = exact.len();
    exact
        .into_iter()
        .chain(partial)
        .enumerate()
        .map(|(index, listing)| RankedListing::from_listing(listing, index + 1, index < exact_len))
        .collect()
}
