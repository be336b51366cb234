//! Relational-style record tables backing an [`Admart`](crate::Admart) handle.
//!
//! The store owns every row; the query and autocomplete layers hold no state
//! and re-read current data on each operation. Mutations go through `&mut`
//! methods, so counter updates are serialized and the classic read-modify-
//! write race on view counters cannot occur.
//!
//! [`Store`] also handles snapshot (de)serialization: the whole table set is
//! written as one versioned JSON document.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SNAPSHOT_VERSION;
use crate::error::{AdmartError, Result};
use crate::types::{
    Ad, AdDetails, AdDraft, AdId, AdStatus, AdSummary, City, CityId, DailyAdViews, FavoritedAd,
    Feature, FeatureId, Make, MakeId, Model, ModelId, Region, RegionId, UserId, Variant,
    VariantId, VehicleCategory,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Store {
    pub(crate) regions: BTreeMap<RegionId, Region>,
    pub(crate) cities: BTreeMap<CityId, City>,
    pub(crate) makes: BTreeMap<MakeId, Make>,
    pub(crate) models: BTreeMap<ModelId, Model>,
    pub(crate) variants: BTreeMap<VariantId, Variant>,
    pub(crate) features: BTreeMap<FeatureId, Feature>,
    pub(crate) ads: BTreeMap<AdId, Ad>,
    pub(crate) favorites: Vec<FavoritedAd>,
    pub(crate) daily_views: Vec<DailyAdViews>,
    next_region_id: RegionId,
    next_city_id: CityId,
    next_make_id: MakeId,
    next_model_id: ModelId,
    next_variant_id: VariantId,
    next_feature_id: FeatureId,
    next_ad_id: AdId,
}

/// On-disk wrapper so incompatible layouts are detected before table decode.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    store: Store,
}

// -- Catalog inserts --------------------------------------------------------

impl Store {
    pub(crate) fn insert_region(&mut self, name: &str) -> RegionId {
        self.next_region_id += 1;
        let id = self.next_region_id;
        self.regions.insert(id, Region { id, name: name.to_string() });
        id
    }

    pub(crate) fn insert_city(&mut self, name: &str, region_id: RegionId) -> Result<CityId> {
        self.require_region(region_id)?;
        self.next_city_id += 1;
        let id = self.next_city_id;
        self.cities.insert(id, City { id, name: name.to_string(), region_id });
        Ok(id)
    }

    pub(crate) fn insert_make(
        &mut self,
        name: &str,
        category: VehicleCategory,
        region_id: RegionId,
        is_popular: bool,
    ) -> Result<MakeId> {
        self.require_region(region_id)?;
        self.next_make_id += 1;
        let id = self.next_make_id;
        self.makes.insert(
            id,
            Make { id, name: name.to_string(), category, region_id, is_popular },
        );
        Ok(id)
    }

    pub(crate) fn insert_model(
        &mut self,
        name: &str,
        make_id: MakeId,
        is_popular: bool,
    ) -> Result<ModelId> {
        self.require_make(make_id)?;
        self.next_model_id += 1;
        let id = self.next_model_id;
        self.models.insert(id, Model { id, name: name.to_string(), make_id, is_popular });
        Ok(id)
    }

    pub(crate) fn insert_variant(&mut self, name: &str, model_id: ModelId) -> Result<VariantId> {
        self.require_model(model_id)?;
        self.next_variant_id += 1;
        let id = self.next_variant_id;
        self.variants.insert(id, Variant { id, name: name.to_string(), model_id });
        Ok(id)
    }

    pub(crate) fn insert_feature(
        &mut self,
        name: &str,
        description: Option<&str>,
        category: VehicleCategory,
        code: &str,
    ) -> FeatureId {
        self.next_feature_id += 1;
        let id = self.next_feature_id;
        self.features.insert(
            id,
            Feature {
                id,
                name: name.to_string(),
                description: description.map(str::to_string),
                category,
                code: code.to_string(),
            },
        );
        id
    }
}

// -- Reference resolution ---------------------------------------------------

impl Store {
    pub(crate) fn require_region(&self, id: RegionId) -> Result<&Region> {
        self.regions.get(&id).ok_or(AdmartError::UnknownEntity { entity: "region", id })
    }

    pub(crate) fn require_city(&self, id: CityId) -> Result<&City> {
        self.cities.get(&id).ok_or(AdmartError::UnknownEntity { entity: "city", id })
    }

    pub(crate) fn require_make(&self, id: MakeId) -> Result<&Make> {
        self.makes.get(&id).ok_or(AdmartError::UnknownEntity { entity: "make", id })
    }

    pub(crate) fn require_model(&self, id: ModelId) -> Result<&Model> {
        self.models.get(&id).ok_or(AdmartError::UnknownEntity { entity: "model", id })
    }

    pub(crate) fn require_variant(&self, id: VariantId) -> Result<&Variant> {
        self.variants.get(&id).ok_or(AdmartError::UnknownEntity { entity: "variant", id })
    }

    pub(crate) fn require_feature(&self, id: FeatureId) -> Result<&Feature> {
        self.features.get(&id).ok_or(AdmartError::UnknownEntity { entity: "feature", id })
    }

    pub(crate) fn ad(&self, id: AdId) -> Result<&Ad> {
        self.ads.get(&id).ok_or(AdmartError::AdNotFound(id))
    }

    pub(crate) fn ad_mut(&mut self, id: AdId) -> Result<&mut Ad> {
        self.ads.get_mut(&id).ok_or(AdmartError::AdNotFound(id))
    }

    /// Region of the listing's city, when the city still resolves.
    pub(crate) fn region_id_of(&self, ad: &Ad) -> Option<RegionId> {
        Some(self.cities.get(&ad.city_id)?.region_id)
    }

    /// Make of the listing's model, when the model still resolves.
    pub(crate) fn make_id_of(&self, ad: &Ad) -> Option<MakeId> {
        Some(self.models.get(&ad.model_id?)?.make_id)
    }
}

// -- Listing rows -----------------------------------------------------------

impl Store {
    /// Inserts a new pending listing. Feature ids are de-duplicated but kept
    /// in submission order.
    pub(crate) fn insert_ad(&mut self, draft: AdDraft, feature_ids: &[FeatureId]) -> AdId {
        self.next_ad_id += 1;
        let id = self.next_ad_id;
        let now = Utc::now();

        let mut features: Vec<FeatureId> = Vec::with_capacity(feature_ids.len());
        for &feature in feature_ids {
            if !features.contains(&feature) {
                features.push(feature);
            }
        }

        self.ads.insert(
            id,
            Ad {
                id,
                owner: draft.owner,
                variant_id: draft.variant_id,
                model_id: draft.model_id,
                year: draft.year,
                color: draft.color,
                mileage: draft.mileage,
                address: draft.address,
                city_id: draft.city_id,
                registration_city_id: draft.registration_city_id,
                price: draft.price,
                contact: draft.contact,
                contact_person: draft.contact_person,
                comments: draft.comments,
                body_type: draft.body_type,
                transmission_type: draft.transmission_type,
                modification_type: draft.modification_type,
                fuel_type: draft.fuel_type,
                assembly_type: draft.assembly_type,
                gas_equipment: draft.gas_equipment,
                feature_ids: features,
                photos: draft.photos,
                views: 0,
                status: AdStatus::Pending,
                is_active: false,
                is_verified: false,
                is_featured: false,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Bumps the lifetime counter and the daily row for `date`, creating the
    /// daily row lazily. Returns the new lifetime count.
    pub(crate) fn record_view(&mut self, ad_id: AdId, date: NaiveDate) -> Result<u64> {
        let ad = self.ad_mut(ad_id)?;
        ad.views = ad.views.saturating_add(1);
        let views = ad.views;

        match self
            .daily_views
            .iter_mut()
            .find(|row| row.ad_id == ad_id && row.date == date)
        {
            Some(row) => row.views = row.views.saturating_add(1),
            None => self.daily_views.push(DailyAdViews { ad_id, date, views: 1 }),
        }
        Ok(views)
    }

    pub(crate) fn is_favorited(&self, ad_id: AdId, user_id: UserId) -> bool {
        self.favorites
            .iter()
            .any(|row| row.ad_id == ad_id && row.user_id == user_id)
    }

    /// Create-if-absent favorite mark. Returns whether a row was inserted.
    pub(crate) fn favorite(&mut self, ad_id: AdId, user_id: UserId) -> bool {
        if self.is_favorited(ad_id, user_id) {
            return false;
        }
        self.favorites.push(FavoritedAd { ad_id, user_id, created_at: Utc::now() });
        true
    }

    /// Removes the favorite mark if present. Returns whether a row was removed.
    pub(crate) fn unfavorite(&mut self, ad_id: AdId, user_id: UserId) -> bool {
        let before = self.favorites.len();
        self.favorites
            .retain(|row| !(row.ad_id == ad_id && row.user_id == user_id));
        self.favorites.len() != before
    }
}

// -- Result shaping ---------------------------------------------------------

impl Store {
    /// Display title for a listing: `"{make} {model} {year}"` when the model
    /// reference resolves, else `"{color} {year}"`.
    pub(crate) fn ad_title(&self, ad: &Ad) -> String {
        let resolved = ad
            .model_id
            .and_then(|id| self.models.get(&id))
            .and_then(|model| self.makes.get(&model.make_id).map(|make| (make, model)));
        match resolved {
            Some((make, model)) => format!("{} {} {}", make.name, model.name, ad.year),
            None => format!("{} {}", ad.color, ad.year),
        }
    }

    pub(crate) fn summarize(&self, ad: &Ad, viewer: Option<UserId>) -> AdSummary {
        AdSummary {
            id: ad.id,
            title: self.ad_title(ad),
            price: ad.price,
            year: ad.year,
            mileage: ad.mileage,
            city: self
                .cities
                .get(&ad.city_id)
                .map(|city| city.name.clone())
                .unwrap_or_default(),
            photos: ad.photos.clone(),
            favorited: viewer.is_some_and(|user| self.is_favorited(ad.id, user)),
            is_featured: ad.is_featured,
            created_at: ad.created_at,
        }
    }

    pub(crate) fn details(&self, ad: &Ad) -> Result<AdDetails> {
        let city = self.require_city(ad.city_id)?.clone();
        let registration_city = ad
            .registration_city_id
            .and_then(|id| self.cities.get(&id))
            .cloned();
        let features = ad
            .feature_ids
            .iter()
            .filter_map(|id| self.features.get(id))
            .cloned()
            .collect();

        Ok(AdDetails {
            id: ad.id,
            title: self.ad_title(ad),
            owner: ad.owner,
            model_id: ad.model_id,
            variant_id: ad.variant_id,
            year: ad.year,
            color: ad.color.clone(),
            mileage: ad.mileage,
            address: ad.address.clone(),
            city,
            registration_city,
            price: ad.price,
            contact: ad.contact.clone(),
            contact_person: ad.contact_person.clone(),
            comments: ad.comments.clone(),
            body_type: ad.body_type,
            transmission_type: ad.transmission_type,
            modification_type: ad.modification_type,
            fuel_type: ad.fuel_type,
            assembly_type: ad.assembly_type,
            gas_equipment: ad.gas_equipment,
            features,
            photos: ad.photos.clone(),
            views: ad.views,
            is_featured: ad.is_featured,
            created_at: ad.created_at,
            updated_at: ad.updated_at,
        })
    }
}

// -- Snapshot codec ---------------------------------------------------------

impl Store {
    pub(crate) fn to_snapshot_json(&self) -> Result<String> {
        let snapshot = Snapshot { version: SNAPSHOT_VERSION, store: self.clone() };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    pub(crate) fn from_snapshot_json(raw: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(AdmartError::SnapshotVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_is_idempotent() {
        let mut store = Store::default();
        let region = store.insert_region("Punjab");
        let city = store.insert_city("Lahore", region).unwrap();
        let ad = store.insert_ad(
            AdDraft { city_id: city, ..AdDraft::default() },
            &[],
        );

        assert!(store.favorite(ad, 3));
        assert!(!store.favorite(ad, 3));
        assert_eq!(store.favorites.len(), 1);
        assert!(store.unfavorite(ad, 3));
        assert!(!store.unfavorite(ad, 3));
    }

    #[test]
    fn record_view_creates_one_daily_row_per_date() {
        let mut store = Store::default();
        let region = store.insert_region("Punjab");
        let city = store.insert_city("Lahore", region).unwrap();
        let ad = store.insert_ad(AdDraft { city_id: city, ..AdDraft::default() }, &[]);
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        assert_eq!(store.record_view(ad, day).unwrap(), 1);
        assert_eq!(store.record_view(ad, day).unwrap(), 2);

        assert_eq!(store.daily_views.len(), 1);
        assert_eq!(store.daily_views[0].views, 2);
        assert_eq!(store.ads[&ad].views, 2);
    }

    #[test]
    fn snapshot_round_trips_tables_and_counters() {
        let mut store = Store::default();
        let region = store.insert_region("Sindh");
        let city = store.insert_city("Karachi", region).unwrap();
        let make = store
            .insert_make("Toyota", VehicleCategory::Car, region, true)
            .unwrap();
        store.insert_model("Corolla", make, true).unwrap();
        let ad = store.insert_ad(AdDraft { city_id: city, ..AdDraft::default() }, &[]);
        store.favorite(ad, 9);

        let json = store.to_snapshot_json().unwrap();
        let mut restored = Store::from_snapshot_json(&json).unwrap();

        assert_eq!(restored.ads.len(), 1);
        assert!(restored.is_favorited(ad, 9));
        // Counters must continue past restored rows, not restart from 1.
        let next = restored.insert_ad(AdDraft { city_id: city, ..AdDraft::default() }, &[]);
        assert_eq!(next, ad + 1);
    }

    #[test]
    fn snapshot_rejects_unknown_version() {
        let store = Store::default();
        let json = store
            .to_snapshot_json()
            .unwrap()
            .replacen("\"version\": 1", "\"version\": 99", 1);
        let err = Store::from_snapshot_json(&json).unwrap_err();
        assert!(matches!(err, AdmartError::SnapshotVersion { found: 99, .. }));
    }
}
