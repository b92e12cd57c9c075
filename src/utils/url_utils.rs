//! URL helpers for building results-page URLs and resolving listing links.

use anyhow::{Context, Result};
use url::Url;

/// Build the results-page URL for `query` under `base_url`.
///
/// The query becomes one percent-encoded path segment, e.g.
/// `https://listado.mercadolibre.com.mx/mesa%20de%20centro`.
pub fn search_url(base_url: &str, query: &str) -> Result<Url> {
    let base = base_url.trim_end_matches('/');
    let raw = format!("{base}/{}", urlencoding::encode(query));
    Url::parse(&raw).with_context(|| format!("Failed to build search URL from base '{base_url}'"))
}

/// Resolve a listing `href` against the page it was found on.
///
/// Mirrors what a DOM anchor's `href` property returns: relative links become
/// absolute. Without a base, or when resolution fails, the trimmed href is
/// returned unchanged.
#[must_use]
pub fn absolutize_href(base: Option<&Url>, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }

    match base.map(|b| b.join(href)) {
        Some(Ok(url)) => url.to_string(),
        Some(Err(e)) => {
            tracing::trace!("Could not resolve href '{}': {}", href, e);
            href.to_string()
        }
        None => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url("https://listado.mercadolibre.com.mx/", "mesa de centro")
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://listado.mercadolibre.com.mx/mesa%20de%20centro"
        );
    }

    #[test]
    fn test_search_url_rejects_bad_base() {
        assert!(search_url("not a base", "x").is_err());
    }

    #[test]
    fn test_absolutize_relative_and_absolute() {
        let base = Url::parse("https://listado.mercadolibre.com.mx/laptop").expect("base");
        assert_eq!(
            absolutize_href(Some(&base), "/MLM-1"),
            "https://listado.mercadolibre.com.mx/MLM-1"
        );
        assert_eq!(
            absolutize_href(Some(&base), " https://articulo.mercadolibre.com.mx/MLM-2 "),
            "https://articulo.mercadolibre.com.mx/MLM-2"
        );
        assert_eq!(absolutize_href(None, "/MLM-1"), "/MLM-1");
        assert_eq!(absolutize_href(Some(&base), "   "), "");
    }
}
