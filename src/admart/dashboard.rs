//! Per-user dashboard queries: own listings, favorited listings, and view
//! history. These bypass the visibility gate (owners see their pending and
//! rejected ads) but reuse the search layer's ordering and pagination.

use crate::error::Result;
use crate::types::{Ad, AdId, AdPage, DailyAdViews, SortKey, UserId};

use super::Admart;
use super::search::order_hits;

impl Admart {
    /// All listings owned by `user_id`, newest first.
    pub fn user_ads(&self, user_id: UserId, page: Option<u32>) -> Result<AdPage> {
        let mut hits: Vec<&Ad> = self
            .store
            .ads
            .values()
            .filter(|ad| ad.owner == Some(user_id))
            .collect();
        order_hits(&mut hits, SortKey::DateRecentFirst);
        self.page_of(hits, page, Some(user_id))
    }

    /// All listings `user_id` has favorited, newest first.
    pub fn favorited_ads(&self, user_id: UserId, page: Option<u32>) -> Result<AdPage> {
        let mut hits: Vec<&Ad> = self
            .store
            .ads
            .values()
            .filter(|ad| self.store.is_favorited(ad.id, user_id))
            .collect();
        order_hits(&mut hits, SortKey::DateRecentFirst);
        self.page_of(hits, page, Some(user_id))
    }

    /// Daily view counters recorded for a listing, oldest date first.
    pub fn view_history(&self, ad_id: AdId) -> Vec<DailyAdViews> {
        let mut rows: Vec<DailyAdViews> = self
            .store
            .daily_views
            .iter()
            .filter(|row| row.ad_id == ad_id)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.date);
        rows
    }
}
