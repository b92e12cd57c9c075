//! Shared configuration constants for pricescrape
//!
//! Default values used by the config builder and the browser runner, kept in
//! one place to avoid magic numbers.

/// Results page host for Mercado Libre México.
///
/// The query is appended as a single URL-encoded path segment.
pub const SEARCH_BASE_URL: &str = "https://listado.mercadolibre.com.mx";

/// Default cap on listing entries inspected per page: 15
///
/// Inspected, not kept. Entries without a price still count against the cap.
pub const DEFAULT_MAX_ITEMS: usize = 15;

/// Maximum accepted query length, in characters
pub const MAX_QUERY_LENGTH: usize = 200;

/// Timeout for `page.goto()`: 30 seconds
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 30;

/// How long to poll for a listing container after navigation: 15 seconds
pub const DEFAULT_RESULTS_WAIT_TIMEOUT_SECS: u64 = 15;

/// Extra wait after the container appears so lazily rendered prices land: 2 seconds
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 2_000;

/// Interval between container polls
pub const RESULTS_POLL_INTERVAL_MS: u64 = 200;

/// Default directory for saved result files
pub const DEFAULT_OUTPUT_DIR: &str = "resultados";

/// Chrome user agent string for stealth mode
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
