//! Error types for listing extraction
//!
//! Only page-level failures are errors. A listing entry with a missing title or
//! link falls back to a default, and an entry with no price is skipped, so none
//! of those show up here.

use thiserror::Error;

/// Result type alias for extraction operations
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Error types for the extraction-and-ranking pipeline
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Neither listing container convention matched anything on the page.
    ///
    /// Usually an anti-bot interstitial or a change in the site's markup.
    #[error(
        "No listing container found on the page (tried {tried}). \
         The site may have blocked the request or changed its layout."
    )]
    NoContainerFound { tried: String },

    /// Query rejected before any browser resources were acquired
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// A user-supplied locator could not be parsed as a CSS selector
    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

impl ExtractionError {
    /// Whether the error points at the page itself rather than the caller's input
    #[must_use]
    pub fn is_page_failure(&self) -> bool {
        matches!(self, ExtractionError::NoContainerFound { .. })
    }
}
