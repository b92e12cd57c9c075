//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! The query is the only required field; `build()` is only available once it
//! has been set.

use crate::listing::{ExtractionError, ExtractionResult};
use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_MAX_ITEMS, DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
    DEFAULT_RESULTS_WAIT_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_MS, MAX_QUERY_LENGTH,
    SEARCH_BASE_URL,
};
use anyhow::Result;
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::ScrapeConfig;

/// Trim `query` and check it is usable as a search term.
///
/// # Errors
/// [`ExtractionError::InvalidQuery`] when the trimmed query is empty or longer
/// than `MAX_QUERY_LENGTH` characters.
pub fn validate_query(query: &str) -> ExtractionResult<String> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err(ExtractionError::InvalidQuery(
            "query cannot be empty or whitespace-only".to_string(),
        ));
    }

    let length = trimmed.chars().count();
    if length > MAX_QUERY_LENGTH {
        return Err(ExtractionError::InvalidQuery(format!(
            "query is too long ({length} characters, maximum {MAX_QUERY_LENGTH})"
        )));
    }

    Ok(trimmed.to_string())
}

// Type states for the builder
pub struct WithQuery;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) query: Option<String>,
    pub(crate) max_items: usize,
    pub(crate) search_base_url: String,
    pub(crate) headless: bool,
    pub(crate) stealth_mode: bool,
    pub(crate) user_agent: String,
    pub(crate) chrome_data_dir: Option<PathBuf>,
    pub(crate) page_load_timeout_secs: u64,
    pub(crate) results_wait_timeout_secs: u64,
    pub(crate) settle_delay_ms: u64,
    pub(crate) output_dir: PathBuf,
    pub(crate) save_json: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            query: None,
            max_items: DEFAULT_MAX_ITEMS,
            search_base_url: SEARCH_BASE_URL.to_string(),
            headless: true,
            stealth_mode: true,
            user_agent: CHROME_USER_AGENT.to_string(),
            chrome_data_dir: None,
            page_load_timeout_secs: DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
            results_wait_timeout_secs: DEFAULT_RESULTS_WAIT_TIMEOUT_SECS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            save_json: true,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn query(self, query: impl Into<String>) -> ScrapeConfigBuilder<WithQuery> {
        ScrapeConfigBuilder {
            query: Some(query.into()),
            max_items: self.max_items,
            search_base_url: self.search_base_url,
            headless: self.headless,
            stealth_mode: self.stealth_mode,
            user_agent: self.user_agent,
            chrome_data_dir: self.chrome_data_dir,
            page_load_timeout_secs: self.page_load_timeout_secs,
            results_wait_timeout_secs: self.results_wait_timeout_secs,
            settle_delay_ms: self.settle_delay_ms,
            output_dir: self.output_dir,
            save_json: self.save_json,
            _phantom: PhantomData,
        }
    }
}

// Build method only available once the query is set
impl ScrapeConfigBuilder<WithQuery> {
    pub fn build(self) -> Result<ScrapeConfig> {
        let query = validate_query(self.query.as_deref().unwrap_or_default())?;

        Ok(ScrapeConfig {
            query,
            max_items: self.max_items,
            search_base_url: self.search_base_url,
            headless: self.headless,
            stealth_mode: self.stealth_mode,
            user_agent: self.user_agent,
            chrome_data_dir: self.chrome_data_dir,
            page_load_timeout_secs: self.page_load_timeout_secs,
            results_wait_timeout_secs: self.results_wait_timeout_secs,
            settle_delay_ms: self.settle_delay_ms,
            output_dir: self.output_dir,
            save_json: self.save_json,
        })
    }
}

// Optional settings, available at any state
impl<State> ScrapeConfigBuilder<State> {
    /// Cap on listing entries inspected (default: 15)
    ///
    /// # Example
    /// ```rust
    /// # use pricescrape::config::ScrapeConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = ScrapeConfig::builder()
    ///     .query("laptop")
    ///     .max_items(10)
    ///     .build()?;
    /// assert_eq!(config.max_items(), 10);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    #[must_use]
    pub fn search_base_url(mut self, url: impl Into<String>) -> Self {
        self.search_base_url = url.into();
        self
    }

    /// Show the browser window when `false`. Useful to watch a run.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn stealth_mode(mut self, enabled: bool) -> Self {
        self.stealth_mode = enabled;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn chrome_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.chrome_data_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn page_load_timeout_secs(mut self, secs: u64) -> Self {
        self.page_load_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn results_wait_timeout_secs(mut self, secs: u64) -> Self {
        self.results_wait_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn settle_delay_ms(mut self, millis: u64) -> Self {
        self.settle_delay_ms = millis;
        self
    }

    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn save_json(mut self, enabled: bool) -> Self {
        self.save_json = enabled;
        self
    }
}
