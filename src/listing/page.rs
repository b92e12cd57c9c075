//! Rendered page abstraction consumed by the extraction pipeline
//!
//! The pipeline only needs two things from a page: find every node matching a
//! container selector, and, inside one of those nodes, read the text or the
//! link target of the first descendant matching a selector. [`HtmlPage`]
//! provides both over a `scraper` snapshot of the rendered DOM.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::utils::url_utils::absolutize_href;

/// A fully rendered results page
pub trait RenderedPage {
    /// Handle to one listing entry's subtree
    type Node<'a>: ListingNode
    where
        Self: 'a;

    /// All nodes matching `selector`, in document order
    fn select_all(&self, selector: &Selector) -> Vec<Self::Node<'_>>;
}

/// Read access to one listing entry's subtree
pub trait ListingNode {
    /// Trimmed text content of the first descendant matching `selector`
    fn find_text(&self, selector: &Selector) -> Option<String>;

    /// Absolute link target of the first descendant matching `selector`.
    ///
    /// A matching node without an `href` yields an empty string, the same way a
    /// DOM anchor's `href` property does.
    fn find_href(&self, selector: &Selector) -> Option<String>;
}

/// DOM snapshot of a rendered page, plus the URL it was rendered from
pub struct HtmlPage {
    document: Html,
    base_url: Option<Url>,
}

impl HtmlPage {
    /// Parse a rendered HTML document.
    ///
    /// `page_url` is used to resolve relative links; an unparseable or absent
    /// URL leaves hrefs as they appear in the markup.
    #[must_use]
    pub fn parse(html: &str, page_url: Option<&str>) -> Self {
        let base_url = page_url.and_then(|u| match Url::parse(u) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Ignoring unparseable page URL '{}': {}", u, e);
                None
            }
        });

        Self {
            document: Html::parse_document(html),
            base_url,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }
}

impl RenderedPage for HtmlPage {
    type Node<'a> = HtmlEntry<'a>;

    fn select_all(&self, selector: &Selector) -> Vec<HtmlEntry<'_>> {
        self.document
            .select(selector)
            .map(|element| HtmlEntry {
                element,
                base_url: self.base_url(),
            })
            .collect()
    }
}

/// One listing entry inside an [`HtmlPage`]
#[derive(Clone, Copy)]
pub struct HtmlEntry<'a> {
    element: ElementRef<'a>,
    base_url: Option<&'a Url>,
}

impl ListingNode for HtmlEntry<'_> {
    fn find_text(&self, selector: &Selector) -> Option<String> {
        self.element
            .select(selector)
            .next()
            .map(|node| node.text().collect::<String>().trim().to_string())
    }

    fn find_href(&self, selector: &Selector) -> Option<String> {
        self.element.select(selector).next().map(|node| {
            node.value()
                .attr("href")
                .map(|href| absolutize_href(self.base_url, href))
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(css: &str) -> Selector {
        Selector::parse(css).expect("test selector")
    }

    #[test]
    fn test_find_text_trims_and_joins_descendants() {
        let page = HtmlPage::parse(
            r#"<ul><li class="item"><h2>  Laptop <b>HP</b> 15 </h2></li></ul>"#,
            None,
        );
        let entries = page.select_all(&selector("li.item"));
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].find_text(&selector("h2")),
            Some("Laptop HP 15".to_string())
        );
        assert_eq!(entries[0].find_text(&selector("h3")), None);
    }

    #[test]
    fn test_find_href_resolves_against_page_url() {
        let page = HtmlPage::parse(
            r#"<div class="item"><a href="/MLM-123-laptop">x</a></div>"#,
            Some("https://listado.mercadolibre.com.mx/laptop"),
        );
        let entries = page.select_all(&selector(".item"));
        assert_eq!(
            entries[0].find_href(&selector("a")),
            Some("https://listado.mercadolibre.com.mx/MLM-123-laptop".to_string())
        );
    }

    #[test]
    fn test_find_href_without_attribute_is_empty() {
        let page = HtmlPage::parse(r#"<div class="item"><a>no target</a></div>"#, None);
        let entries = page.select_all(&selector(".item"));
        assert_eq!(entries[0].find_href(&selector("a")), Some(String::new()));
    }

    #[test]
    fn test_unparseable_page_url_is_ignored() {
        let page = HtmlPage::parse("<p></p>", Some("not a url"));
        assert!(page.base_url().is_none());
    }
}
