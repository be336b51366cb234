//! Listing records: the `Ad` entity, its fixed enumerations, and the rows
//! attached to it (favorites and daily view counters).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{AdId, CityId, FeatureId, ModelId, UserId, VariantId};

/// Moderation lifecycle of a listing. Only moderation mutates this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Expired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    #[default]
    Sedan,
    Hatchback,
    Suv,
    Coupe,
    Pickup,
    Van,
    Wagon,
    Convertible,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionType {
    #[default]
    Manual,
    Automatic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationType {
    #[default]
    Stock,
    Modified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Cng,
    Electric,
    Hybrid,
}

/// Where the vehicle was assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyType {
    #[default]
    Local,
    Imported,
}

/// A single vehicle-for-sale record.
///
/// `owner` is nullable because a listing may outlive its owner account, and
/// `model_id`/`variant_id` are nullable because catalog entries may be removed
/// without deleting the listing. Photos are object-storage identifiers,
/// ordered only by creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    pub id: AdId,
    pub owner: Option<UserId>,
    pub variant_id: Option<VariantId>,
    pub model_id: Option<ModelId>,
    pub year: i32,
    pub color: String,
    pub mileage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub city_id: CityId,
    pub registration_city_id: Option<CityId>,
    pub price: f64,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub body_type: BodyType,
    pub transmission_type: TransmissionType,
    pub modification_type: ModificationType,
    pub fuel_type: FuelType,
    pub assembly_type: AssemblyType,
    pub gas_equipment: bool,
    pub feature_ids: Vec<FeatureId>,
    pub photos: Vec<String>,
    pub views: u64,
    pub status: AdStatus,
    pub is_active: bool,
    pub is_verified: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ad {
    /// Visibility gate: a listing appears in public search results iff it has
    /// been approved and both moderation flags are set.
    pub fn is_discoverable(&self) -> bool {
        self.status == AdStatus::Approved && self.is_active && self.is_verified
    }
}

/// Caller-supplied fields for a new listing. The store assigns the id,
/// creation stamps, and the initial moderation state (pending, invisible).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdDraft {
    pub owner: Option<UserId>,
    pub variant_id: Option<VariantId>,
    pub model_id: Option<ModelId>,
    pub year: i32,
    pub color: String,
    pub mileage: Option<u32>,
    pub address: Option<String>,
    pub city_id: CityId,
    pub registration_city_id: Option<CityId>,
    pub price: f64,
    pub contact: String,
    pub contact_person: Option<String>,
    pub comments: Option<String>,
    pub body_type: BodyType,
    pub transmission_type: TransmissionType,
    pub modification_type: ModificationType,
    pub fuel_type: FuelType,
    pub assembly_type: AssemblyType,
    pub gas_equipment: bool,
    pub photos: Vec<String>,
}

/// Favorite mark for a (listing, user) pair; at most one row per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritedAd {
    pub ad_id: AdId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Per-day view counter for a listing, created lazily on the first detail
/// fetch of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAdViews {
    pub ad_id: AdId,
    pub date: NaiveDate,
    pub views: u64,
}
