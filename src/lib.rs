pub mod browser_setup;
pub mod config;
pub mod content_saver;
pub mod listing;
pub mod utils;
pub mod web_search;

pub use browser_setup::{apply_stealth_measures, download_managed_browser, find_browser_executable};
pub use config::ScrapeConfig;
pub use content_saver::{load_search_result, save_search_result};
pub use listing::{
    ExtractionError, HtmlPage, Listing, RankedListing, SearchResult, SiteLayout,
};
