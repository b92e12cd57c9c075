//! Listing collection from a rendered results page
//!
//! Picks the first container convention present on the page, walks its
//! entries in document order up to a cap, and resolves each entry's fields.
//! Entries without a price are dropped; missing titles and links fall back to
//! defaults.

use tracing::{debug, info, warn};

use super::errors::{ExtractionError, ExtractionResult};
use super::layout::SiteLayout;
use super::locator::{FieldKind, resolve_field};
use super::page::RenderedPage;
use super::types::{DEFAULT_TITLE, Listing};

/// Collect up to `max_items` priced listings from `page`.
///
/// # Errors
/// [`ExtractionError::NoContainerFound`] when no container convention of
/// `layout` matches any node. A container whose entries all lack a price is
/// not an error: it yields an empty vector.
pub fn collect<P: RenderedPage>(
    page: &P,
    layout: &SiteLayout,
    max_items: usize,
) -> ExtractionResult<Vec<Listing>> {
    let Some((container_css, entries)) = layout
        .containers()
        .iter()
        .map(|(css, selector)| (css.as_str(), page.select_all(selector)))
        .find(|(_, entries)| !entries.is_empty())
    else {
        warn!(
            "No listing container matched ({})",
            layout.describe_containers()
        );
        return Err(ExtractionError::NoContainerFound {
            tried: layout.describe_containers(),
        });
    };

    info!(
        "Found {} listing entries using container '{}'",
        entries.len(),
        container_css
    );

    let price_chain = layout.chain(FieldKind::Price);
    let title_chain = layout.chain(FieldKind::Title);
    let link_chain = layout.chain(FieldKind::Link);

    let mut listings = Vec::with_capacity(entries.len().min(max_items));

    for (index, entry) in entries.iter().enumerate().take(max_items) {
        let Some(price) = resolve_field(entry, price_chain) else {
            debug!("Entry {}: no price found, skipping", index + 1);
            continue;
        };

        let title = resolve_field(entry, title_chain).unwrap_or_else(|| {
            debug!("Entry {}: no title found, using default", index + 1);
            DEFAULT_TITLE.to_string()
        });
        let link = resolve_field(entry, link_chain).unwrap_or_default();

        listings.push(Listing {
            position: listings.len() + 1,
            title,
            price,
            link,
        });
    }

    debug!(
        "Kept {} of {} inspected entries",
        listings.len(),
        entries.len().min(max_items)
    );

    Ok(listings)
}
