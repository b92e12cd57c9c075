//! Listing extraction and relevance ranking
//!
//! Turns a rendered marketplace results page into a ranked, immutable
//! [`SearchResult`]:
//!
//! 1. [`collector::collect`] picks the listing container and resolves each
//!    entry's price, title and link through ordered locator chains.
//! 2. [`relevance::classify`] moves titles containing every query word ahead of
//!    the rest, keeping page order inside each group.
//! 3. [`assembler::assemble`] stamps the run metadata.
//!
//! Everything here is synchronous and pure over a page snapshot. Browser
//! automation lives in [`crate::web_search`].

pub mod assembler;
pub mod collector;
pub mod errors;
pub mod layout;
pub mod locator;
pub mod page;
pub mod relevance;
pub mod types;

pub use errors::{ExtractionError, ExtractionResult};
pub use layout::SiteLayout;
pub use locator::{FieldKind, Locator, LocatorChain, LocatorTarget, resolve_field};
pub use page::{HtmlPage, ListingNode, RenderedPage};
pub use types::{DEFAULT_TITLE, Listing, RankedListing, SearchResult};

use tracing::info;

/// Run the full pipeline on an already rendered page with the Mercado Libre layout
///
/// # Errors
/// [`ExtractionError::NoContainerFound`] when the page has no listing container.
pub fn search<P: RenderedPage>(
    page: &P,
    query: &str,
    max_items: usize,
) -> ExtractionResult<SearchResult> {
    search_with_layout(page, SiteLayout::mercado_libre(), query, max_items)
}

/// Run the full pipeline with a custom site layout
///
/// # Errors
/// [`ExtractionError::NoContainerFound`] when none of `layout`'s containers match.
pub fn search_with_layout<P: RenderedPage>(
    page: &P,
    layout: &SiteLayout,
    query: &str,
    max_items: usize,
) -> ExtractionResult<SearchResult> {
    let listings = collector::collect(page, layout, max_items)?;
    let ranked = relevance::classify(listings, query);
    let result = assembler::assemble(query, ranked);

    info!(
        query = %result.query(),
        total = result.total_count(),
        exact = result.exact_count(),
        partial = result.partial_count(),
        "Ranked listings"
    );

    Ok(result)
}
