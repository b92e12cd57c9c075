//! Marketplace search using browser automation
//!
//! Launches Chrome, loads the results page for the configured query, waits for
//! the listing grid, and hands a DOM snapshot to [`crate::listing`] for
//! extraction and ranking. One browser per run, no retries.

mod browser;
mod page_helpers;
mod search;

pub use browser::{BrowserWrapper, create_blank_page, launch_browser};
pub use page_helpers::looks_blocked;
pub use search::{PageSnapshot, navigate_to_results, prepare_page, snapshot_page, wait_for_listings};

use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use tracing::{debug, info, warn};

use crate::config::{ScrapeConfig, validate_query};
use crate::listing::{self, ExtractionResult, HtmlPage, SearchResult, SiteLayout};

/// Search the marketplace for `config.query()` and return ranked listings
///
/// # Errors
/// - `ExtractionError::InvalidQuery` (wrapped) before any browser is launched
/// - `ExtractionError::NoContainerFound` (wrapped) when the page has no
///   listing grid, e.g. a verification page
/// - browser launch or navigation failures
///
/// A page whose listings all lack a price is a successful, empty result.
///
/// # Example
/// ```no_run
/// use pricescrape::config::ScrapeConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ScrapeConfig::builder().query("mesa de centro").build()?;
///     let result = pricescrape::web_search::search(&config).await?;
///     println!("{} listings, {} exact", result.total_count(), result.exact_count());
///     Ok(())
/// }
/// ```
pub async fn search(config: &ScrapeConfig) -> Result<SearchResult> {
    let query = validate_query(config.query())?;

    info!("Starting search for query: '{}'", query);

    let browser = launch_browser(config).await?;
    let outcome = run_search(&browser, config, &query).await;
    browser.shutdown().await;

    let result = outcome?;
    info!(
        "Search completed with {} listings ({} exact)",
        result.total_count(),
        result.exact_count()
    );
    Ok(result)
}

async fn run_search(
    browser: &BrowserWrapper,
    config: &ScrapeConfig,
    query: &str,
) -> Result<SearchResult> {
    let page = create_blank_page(browser).await?;
    let snapshot = load_results(&page, config, query).await;

    if let Err(e) = page.close().await {
        debug!("Failed to close page: {}", e);
    }

    let snapshot = snapshot?;
    extract_from_snapshot(&snapshot, query, config.max_items())
        .with_context(|| format!("Failed to extract listings from {}", snapshot.url))
}

async fn load_results(page: &Page, config: &ScrapeConfig, query: &str) -> Result<PageSnapshot> {
    prepare_page(page, config).await;
    navigate_to_results(page, config, query).await?;

    let layout = SiteLayout::mercado_libre();
    if wait_for_listings(page, layout, config.results_wait_timeout()).await {
        // Prices and titles render a moment after the grid itself
        tokio::time::sleep(config.settle_delay()).await;
    } else {
        warn!("Continuing without a confirmed listing container");
    }

    snapshot_page(page).await
}

/// Run the extraction pipeline on a captured page.
///
/// Kept synchronous: the parsed DOM must not live across an `.await`.
pub fn extract_from_snapshot(
    snapshot: &PageSnapshot,
    query: &str,
    max_items: usize,
) -> ExtractionResult<SearchResult> {
    let page = HtmlPage::parse(&snapshot.html, Some(&snapshot.url));
    listing::search(&page, query, max_items)
}
