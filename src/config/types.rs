//! Core configuration types for a search run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one marketplace search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Product query, trimmed by the builder.
    pub(crate) query: String,

    /// Cap on listing entries inspected on the results page.
    ///
    /// Default: 15
    pub(crate) max_items: usize,

    /// Results host; the query is appended as one path segment.
    pub(crate) search_base_url: String,

    /// Run Chrome without a window.
    ///
    /// Default: true
    pub(crate) headless: bool,

    /// Inject in-page stealth scripts before navigation.
    ///
    /// Default: true
    pub(crate) stealth_mode: bool,

    /// User agent passed to Chrome on launch
    pub(crate) user_agent: String,

    /// Custom Chrome profile directory. `None` uses a per-process temp dir.
    pub(crate) chrome_data_dir: Option<PathBuf>,

    /// Timeout in seconds for `page.goto()`
    ///
    /// Default: 30 seconds
    pub(crate) page_load_timeout_secs: u64,

    /// How long to poll for a listing container after navigation
    ///
    /// Default: 15 seconds
    pub(crate) results_wait_timeout_secs: u64,

    /// Pause after the container appears, before the DOM is snapshotted
    ///
    /// Default: 2000 ms
    pub(crate) settle_delay_ms: u64,

    /// Directory where result JSON files are written
    ///
    /// Default: `resultados`
    pub(crate) output_dir: PathBuf,

    /// Write the result JSON after a successful search
    ///
    /// Default: true
    pub(crate) save_json: bool,
}
