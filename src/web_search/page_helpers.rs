//! Helper functions for consistent chromiumoxide Page error handling

use chromiumoxide::page::Page;
use tracing::trace;

/// Get page URL with diagnostic fallback
///
/// Returns `"about:blank"` when the browser cannot be reached or the page has
/// not navigated yet.
pub async fn get_page_url_with_fallback(page: &Page) -> String {
    match page.url().await {
        Ok(Some(url)) => url,
        Ok(None) => {
            trace!("Page URL is None (page not yet navigated)");
            "about:blank".to_string()
        }
        Err(e) => {
            trace!("Failed to get page URL (browser communication error): {}", e);
            "about:blank".to_string()
        }
    }
}

/// Whether `url` looks like an anti-bot interstitial rather than a results page
#[must_use]
pub fn looks_blocked(url: &str) -> bool {
    let url = url.to_lowercase();
    url.contains("captcha")
        || url.contains("/sorry/")
        || url.contains("account-verification")
        || url.contains("/gz/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_blocked() {
        assert!(looks_blocked("https://www.mercadolibre.com.mx/gz/account-verification?go=x"));
        assert!(looks_blocked("https://example.com/CAPTCHA"));
        assert!(!looks_blocked("https://listado.mercadolibre.com.mx/laptop"));
    }
}
