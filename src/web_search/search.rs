//! Core search execution logic
//!
//! Handles navigating to the results page, waiting for a listing container to
//! render, and snapshotting the DOM for extraction.

use anyhow::{Context, Result, anyhow};
use chromiumoxide::page::Page;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

use super::page_helpers::{get_page_url_with_fallback, looks_blocked};
use crate::browser_setup::apply_stealth_measures;
use crate::config::ScrapeConfig;
use crate::listing::SiteLayout;
use crate::utils::{RESULTS_POLL_INTERVAL_MS, search_url};

/// Upper bound on stealth script registration
const STEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Register stealth scripts on a blank page.
///
/// Best effort: a failure or timeout is logged and the search continues.
pub async fn prepare_page(page: &Page, config: &ScrapeConfig) {
    if !config.stealth_mode() {
        debug!("Stealth mode disabled, skipping script injection");
        return;
    }

    match tokio::time::timeout(
        STEALTH_TIMEOUT,
        apply_stealth_measures(page, config.user_agent()),
    )
    .await
    {
        Ok(Ok(())) => info!("Stealth injection complete"),
        Ok(Err(e)) => warn!("Stealth injection failed: {}", e),
        Err(_) => warn!("Stealth injection timeout"),
    }
}

/// Navigate to the results page for `query`
///
/// # Errors
/// Fails when the URL cannot be built, navigation errors, or it exceeds
/// `config.page_load_timeout()`.
pub async fn navigate_to_results(page: &Page, config: &ScrapeConfig, query: &str) -> Result<Url> {
    let url = search_url(config.search_base_url(), query)?;

    info!("Navigating to results page: {}", url);

    match tokio::time::timeout(config.page_load_timeout(), page.goto(url.as_str())).await {
        Ok(Ok(_)) => Ok(url),
        Ok(Err(e)) => Err(e).with_context(|| format!("Failed to navigate to {url}")),
        Err(_) => Err(anyhow!(
            "Timed out after {}s navigating to {url}",
            config.page_load_timeout().as_secs()
        )),
    }
}

/// Poll until any of `layout`'s listing containers is in the DOM.
///
/// Returns `true` once a container shows up and `false` on timeout. A timeout
/// is not an error here: the snapshot is still taken and the collector reports
/// the missing container.
pub async fn wait_for_listings(page: &Page, layout: &SiteLayout, timeout: Duration) -> bool {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(RESULTS_POLL_INTERVAL_MS);

    info!("Waiting for listings to render...");

    loop {
        for (css, _) in layout.containers() {
            if page.find_element(css.as_str()).await.is_ok() {
                debug!(
                    "Container '{}' appeared after {:.2}s",
                    css,
                    start.elapsed().as_secs_f64()
                );
                return true;
            }
        }

        if start.elapsed() >= timeout {
            let url = get_page_url_with_fallback(page).await;
            if looks_blocked(&url) {
                warn!(
                    "Landed on what looks like a verification page ({}). \
                     Try again later, headed, or from a different network.",
                    url
                );
            } else {
                warn!(
                    "No listing container after {}s at {}",
                    timeout.as_secs(),
                    url
                );
            }
            return false;
        }

        tokio::time::sleep(poll_interval).await;
    }
}

/// Rendered HTML of the page plus the URL it ended up on
pub struct PageSnapshot {
    pub html: String,
    pub url: String,
}

/// Capture the current DOM
pub async fn snapshot_page(page: &Page) -> Result<PageSnapshot> {
    let html = page
        .content()
        .await
        .context("Failed to read rendered page content")?;
    let url = get_page_url_with_fallback(page).await;

    debug!("Captured {} bytes of HTML from {}", html.len(), url);

    Ok(PageSnapshot { html, url })
}
