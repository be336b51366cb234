//! Search orchestration for [`Admart`].
//!
//! The entrypoint validates the mandatory location facet, assembles the
//! predicate pipeline, applies the visibility gate, sorts by the requested
//! key (most-recent-first by default), and slices a fixed-size page.
//! Invariants: never returns an undiscoverable listing, never lets the
//! viewer's favorites influence filtering, and never mutates the store.

use std::cmp::Reverse;
use std::ops::Range;

use crate::constants::PAGE_SIZE;
use crate::error::{AdmartError, Result};
use crate::types::{Ad, AdPage, AdSearchRequest, SortKey, UserId};

mod filters;

use filters::{PIPELINE, Predicate};

use super::Admart;

impl Admart {
    /// Filtered, annotated, sorted, paginated view of discoverable listings.
    ///
    /// `viewer` is the identified caller, if any; it only drives the
    /// `favorited` annotation on each row.
    pub fn search(&self, request: &AdSearchRequest, viewer: Option<UserId>) -> Result<AdPage> {
        if request.city_id.is_none()
            && request.city.is_none()
            && request.region_id.is_none()
            && request.region.is_none()
        {
            return Err(AdmartError::MissingLocation);
        }

        let predicates: Vec<Predicate<'_>> = PIPELINE
            .iter()
            .filter_map(|build| build(request, &self.store))
            .collect();

        let mut hits: Vec<&Ad> = self
            .store
            .ads
            .values()
            .filter(|ad| ad.is_discoverable())
            .filter(|ad| predicates.iter().all(|keep| keep(ad)))
            .collect();

        order_hits(&mut hits, request.sort_by.unwrap_or_default());
        tracing::debug!(
            target: "admart::search",
            predicates = predicates.len(),
            hits = hits.len(),
            sort_by = request.sort_by.unwrap_or_default().as_str(),
            "search pipeline evaluated"
        );

        self.page_of(hits, request.page, viewer)
    }

    /// Slices pre-ordered hits into one page and shapes the rows.
    pub(crate) fn page_of(
        &self,
        hits: Vec<&Ad>,
        page: Option<u32>,
        viewer: Option<UserId>,
    ) -> Result<AdPage> {
        let count = hits.len();
        let (range, page, total_pages) = page_bounds(count, page)?;
        let items = hits[range]
            .iter()
            .map(|ad| self.store.summarize(ad, viewer))
            .collect();
        Ok(AdPage { items, page, total_pages, count })
    }
}

/// Applies the named comparator on top of the deterministic default order
/// (creation time descending, id descending), so equal keys keep newest-first
/// ordering under the stable sort. Listings without a recorded mileage sort
/// last under either mileage key.
pub(crate) fn order_hits(hits: &mut [&Ad], key: SortKey) {
    hits.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    match key {
        SortKey::DateRecentFirst => {}
        SortKey::DateOldestFirst => hits.reverse(),
        SortKey::PriceLowToHigh => hits.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHighToLow => hits.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::YearLatestFirst => hits.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::YearOldestFirst => hits.sort_by(|a, b| a.year.cmp(&b.year)),
        SortKey::MileageLowToHigh => {
            hits.sort_by_key(|ad| (ad.mileage.is_none(), ad.mileage));
        }
        SortKey::MileageHighToLow => {
            hits.sort_by_key(|ad| (ad.mileage.is_none(), Reverse(ad.mileage)));
        }
    }
}

/// Resolves a page request against the total count.
///
/// `total_pages` is at least 1 so that page 1 of an empty result is a valid,
/// empty page; anything else outside `1..=total_pages` is rejected.
pub(crate) fn page_bounds(count: usize, page: Option<u32>) -> Result<(Range<usize>, u32, u32)> {
    let total_pages = count.div_ceil(PAGE_SIZE).max(1) as u32;
    let page = page.unwrap_or(1);
    if page == 0 || page > total_pages {
        return Err(AdmartError::InvalidPage);
    }
    let start = (page as usize - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(count);
    Ok((start..end, page, total_pages))
}
