//! Markup conventions of the target results page
//!
//! Mercado Libre renders its results grid in two known conventions: the
//! current `poly-component` layout and the older `ui-search-result` layout.
//! Both are described here as data so a new variant is a new locator, not a
//! new branch in the collector.

use scraper::Selector;
use std::sync::LazyLock;

use super::errors::{ExtractionError, ExtractionResult};
use super::locator::{FieldKind, LocatorChain, LocatorTarget};

/// Container convention of the current layout
pub const CONTAINER_CSS: &str = ".ui-search-layout__item";

/// Container convention of the legacy layout
pub const LEGACY_CONTAINER_CSS: &str = ".ui-search-result";

/// Title locators, most specific first
pub const TITLE_CSS: &[&str] = &[
    "h2.poly-box.poly-component__title a",
    "h2.poly-component__title a",
    ".poly-component__title",
    ".ui-search-item__title",
];

/// Price locators: current fraction class, then the legacy one
pub const PRICE_CSS: &[&str] = &[".andes-money-amount__fraction", ".price-tag-fraction"];

/// Link locators: the title anchor, then any anchor
pub const LINK_CSS: &[&str] = &["a.poly-component__title", "a"];

// Parsed once on first access. These are constants, so a parse failure is a bug.
static MERCADO_LIBRE: LazyLock<SiteLayout> = LazyLock::new(|| {
    SiteLayout::from_css(
        &[CONTAINER_CSS, LEGACY_CONTAINER_CSS],
        TITLE_CSS,
        PRICE_CSS,
        LINK_CSS,
    )
    .expect("BUG: hardcoded Mercado Libre selectors are invalid")
});

/// Container conventions and per-field locator chains for one site
#[derive(Debug, Clone)]
pub struct SiteLayout {
    containers: Vec<(String, Selector)>,
    title: LocatorChain,
    price: LocatorChain,
    link: LocatorChain,
}

impl SiteLayout {
    /// Layout of `listado.mercadolibre.com.mx`
    #[must_use]
    pub fn mercado_libre() -> &'static SiteLayout {
        &MERCADO_LIBRE
    }

    /// Build a layout from CSS strings.
    ///
    /// `containers` are tried in order; the first one with at least one match
    /// is used for the whole page.
    pub fn from_css(
        containers: &[&str],
        title: &[&str],
        price: &[&str],
        link: &[&str],
    ) -> ExtractionResult<Self> {
        let containers = containers
            .iter()
            .map(|css| {
                Selector::parse(css)
                    .map(|selector| ((*css).to_string(), selector))
                    .map_err(|e| ExtractionError::InvalidSelector {
                        selector: (*css).to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<ExtractionResult<Vec<_>>>()?;

        Ok(Self {
            containers,
            title: LocatorChain::from_css(FieldKind::Title, LocatorTarget::Text, title)?,
            price: LocatorChain::from_css(FieldKind::Price, LocatorTarget::Text, price)?,
            link: LocatorChain::from_css(FieldKind::Link, LocatorTarget::Href, link)?,
        })
    }

    /// Container conventions in precedence order, with their CSS source
    #[must_use]
    pub fn containers(&self) -> &[(String, Selector)] {
        &self.containers
    }

    #[must_use]
    pub fn chain(&self, field: FieldKind) -> &LocatorChain {
        match field {
            FieldKind::Title => &self.title,
            FieldKind::Price => &self.price,
            FieldKind::Link => &self.link,
        }
    }

    /// Comma-separated container CSS, for diagnostics
    #[must_use]
    pub fn describe_containers(&self) -> String {
        self.containers
            .iter()
            .map(|(css, _)| format!("'{css}'"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
