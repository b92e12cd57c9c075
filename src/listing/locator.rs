//! Ordered fallback locators for listing fields
//!
//! Each field of a listing (title, price, link) is found through a chain of
//! CSS locators tried strictly in order. The first locator that matches a node
//! with a non-empty value wins. There is no scoring and no fuzzy selection:
//! the order of the chain is the precedence.

use scraper::Selector;
use std::fmt;

use super::errors::{ExtractionError, ExtractionResult};
use super::page::ListingNode;

/// Which listing field a chain resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Title,
    Price,
    Link,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Title => write!(f, "title"),
            FieldKind::Price => write!(f, "price"),
            FieldKind::Link => write!(f, "link"),
        }
    }
}

/// What to read from a matched node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorTarget {
    /// Trimmed text content
    Text,
    /// Absolute `href`
    Href,
}

/// A single CSS locator with its read target
#[derive(Debug, Clone)]
pub struct Locator {
    css: String,
    selector: Selector,
    target: LocatorTarget,
}

impl Locator {
    /// Locator reading the text of the first match
    pub fn text(css: &str) -> ExtractionResult<Self> {
        Self::new(css, LocatorTarget::Text)
    }

    /// Locator reading the `href` of the first match
    pub fn href(css: &str) -> ExtractionResult<Self> {
        Self::new(css, LocatorTarget::Href)
    }

    pub fn new(css: &str, target: LocatorTarget) -> ExtractionResult<Self> {
        let selector = Selector::parse(css).map_err(|e| ExtractionError::InvalidSelector {
            selector: css.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            css: css.to_string(),
            selector,
            target,
        })
    }

    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }

    #[must_use]
    pub fn target(&self) -> LocatorTarget {
        self.target
    }

    fn read<N: ListingNode>(&self, node: &N) -> Option<String> {
        match self.target {
            LocatorTarget::Text => node.find_text(&self.selector),
            LocatorTarget::Href => node.find_href(&self.selector),
        }
    }
}

/// Ordered list of locators for one field
#[derive(Debug, Clone)]
pub struct LocatorChain {
    field: FieldKind,
    locators: Vec<Locator>,
}

impl LocatorChain {
    #[must_use]
    pub fn new(field: FieldKind, locators: Vec<Locator>) -> Self {
        Self { field, locators }
    }

    /// Build a chain from CSS strings, all read with the same target
    pub fn from_css(
        field: FieldKind,
        target: LocatorTarget,
        css: &[&str],
    ) -> ExtractionResult<Self> {
        let locators = css
            .iter()
            .map(|c| Locator::new(c, target))
            .collect::<ExtractionResult<Vec<_>>>()?;
        Ok(Self::new(field, locators))
    }

    #[must_use]
    pub fn field(&self) -> FieldKind {
        self.field
    }

    #[must_use]
    pub fn locators(&self) -> &[Locator] {
        &self.locators
    }
}

/// Resolve one field of a listing entry.
///
/// Returns the value of the first locator in `chain` that matches a node with
/// a non-empty value, or `None` when every locator misses.
pub fn resolve_field<N: ListingNode>(entry: &N, chain: &LocatorChain) -> Option<String> {
    chain.locators.iter().enumerate().find_map(|(index, locator)| {
        let value = locator.read(entry).filter(|v| !v.is_empty())?;
        if index > 0 {
            tracing::trace!(
                field = %chain.field,
                locator = locator.css(),
                "Resolved via fallback locator #{}",
                index + 1
            );
        }
        Some(value)
    })
}
