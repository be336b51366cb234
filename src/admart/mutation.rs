//! Listing mutations: submission, moderation, detail fetch with view
//! counting, and favoriting.

use chrono::{NaiveDate, Utc};

use crate::error::Result;
use crate::types::{AdDetails, AdDraft, AdId, AdStatus, FeatureId, UserId};

use super::Admart;

impl Admart {
    /// Submit a new listing with its selected features. The listing starts
    /// pending and invisible to search until moderation approves it.
    pub fn post_ad(&mut self, draft: AdDraft, feature_ids: &[FeatureId]) -> Result<AdId> {
        self.store.require_city(draft.city_id)?;
        if let Some(city) = draft.registration_city_id {
            self.store.require_city(city)?;
        }
        if let Some(model) = draft.model_id {
            self.store.require_model(model)?;
        }
        if let Some(variant) = draft.variant_id {
            self.store.require_variant(variant)?;
        }
        for &feature in feature_ids {
            self.store.require_feature(feature)?;
        }

        let id = self.store.insert_ad(draft, feature_ids);
        self.dirty = true;
        tracing::info!(
            target: "admart::mutation",
            ad_id = id,
            features = feature_ids.len(),
            "ad submitted for moderation"
        );
        Ok(id)
    }

    /// Moderation approval: flips the status and both visibility flags, which
    /// makes the listing discoverable.
    pub fn approve_ad(&mut self, ad_id: AdId) -> Result<()> {
        let ad = self.store.ad_mut(ad_id)?;
        ad.status = AdStatus::Approved;
        ad.is_active = true;
        ad.is_verified = true;
        ad.updated_at = Utc::now();
        self.dirty = true;
        tracing::info!(target: "admart::mutation", ad_id, "ad approved");
        Ok(())
    }

    /// Moderation rejection: the listing stays stored but never discoverable.
    pub fn reject_ad(&mut self, ad_id: AdId) -> Result<()> {
        let ad = self.store.ad_mut(ad_id)?;
        ad.status = AdStatus::Rejected;
        ad.is_active = false;
        ad.updated_at = Utc::now();
        self.dirty = true;
        tracing::info!(target: "admart::mutation", ad_id, "ad rejected");
        Ok(())
    }

    /// Marks or unmarks a listing for featured placement.
    pub fn feature_ad(&mut self, ad_id: AdId, featured: bool) -> Result<()> {
        let ad = self.store.ad_mut(ad_id)?;
        ad.is_featured = featured;
        ad.updated_at = Utc::now();
        self.dirty = true;
        Ok(())
    }

    /// Detail fetch with side-effecting view counting against today's date.
    pub fn view_ad(&mut self, ad_id: AdId) -> Result<AdDetails> {
        self.view_ad_on(ad_id, Utc::now().date_naive())
    }

    /// Clock-injected variant of [`view_ad`](Admart::view_ad): counts the
    /// view against an explicit calendar date.
    pub fn view_ad_on(&mut self, ad_id: AdId, date: NaiveDate) -> Result<AdDetails> {
        // Shape the details before bumping counters so a failed fetch leaves
        // view counts untouched.
        let mut details = {
            let ad = self.store.ad(ad_id)?;
            self.store.details(ad)?
        };
        details.views = self.store.record_view(ad_id, date)?;
        self.dirty = true;
        tracing::debug!(
            target: "admart::mutation",
            ad_id,
            views = details.views,
            "detail view recorded"
        );
        Ok(details)
    }

    /// Idempotent favorite: repeat calls for the same pair are a no-op
    /// success. Unknown listings are rejected.
    pub fn favorite_ad(&mut self, ad_id: AdId, user_id: UserId) -> Result<()> {
        self.store.ad(ad_id)?;
        if self.store.favorite(ad_id, user_id) {
            self.dirty = true;
            tracing::debug!(target: "admart::mutation", ad_id, user_id, "ad favorited");
        }
        Ok(())
    }

    /// Removes a favorite mark if present; absent pairs are a no-op success.
    pub fn unfavorite_ad(&mut self, ad_id: AdId, user_id: UserId) -> Result<()> {
        self.store.ad(ad_id)?;
        if self.store.unfavorite(ad_id, user_id) {
            self.dirty = true;
            tracing::debug!(target: "admart::mutation", ad_id, user_id, "ad unfavorited");
        }
        Ok(())
    }
}
