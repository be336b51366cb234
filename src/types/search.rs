//! Public search request/response types for listing queries.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AdmartError;

use super::catalog::{City, Feature};
use super::common::{AdId, CityId, MakeId, ModelId, RegionId, UserId, VariantId};
use super::listing::{
    AssemblyType, BodyType, FuelType, ModificationType, TransmissionType,
};

/// Filter parameters for a listing search. Everything is optional except that
/// at least one of `city_id`, `city`, `region_id`, `region` must be present.
///
/// Within the location and vehicle groups the finer-grained parameter wins:
/// `city_id` over `city` over `region_id` over `region`, and `model_id` over
/// `model` over `make_id` over `make`. All supplied filters are AND-conjoined.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdSearchRequest {
    pub city_id: Option<CityId>,
    pub city: Option<String>,
    pub region_id: Option<RegionId>,
    pub region: Option<String>,
    pub model_id: Option<ModelId>,
    pub model: Option<String>,
    pub make_id: Option<MakeId>,
    pub make: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub price_from: Option<f64>,
    pub price_to: Option<f64>,
    pub registration_city: Option<CityId>,
    pub color: Option<String>,
    pub mileage_from: Option<u32>,
    pub mileage_to: Option<u32>,
    pub transmission: Option<TransmissionType>,
    pub assembly: Option<AssemblyType>,
    pub sort_by: Option<SortKey>,
    pub page: Option<u32>,
}

/// Fixed sort-key enumeration for listing queries. Absent keys fall back to
/// most-recent-first; unrecognized strings are rejected at parse time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    PriceLowToHigh,
    PriceHighToLow,
    #[default]
    DateRecentFirst,
    DateOldestFirst,
    YearLatestFirst,
    YearOldestFirst,
    MileageLowToHigh,
    MileageHighToLow,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "PRICE_LOW_TO_HIGH",
            Self::PriceHighToLow => "PRICE_HIGH_TO_LOW",
            Self::DateRecentFirst => "DATE_RECENT_FIRST",
            Self::DateOldestFirst => "DATE_OLDEST_FIRST",
            Self::YearLatestFirst => "YEAR_LATEST_FIRST",
            Self::YearOldestFirst => "YEAR_OLDEST_FIRST",
            Self::MileageLowToHigh => "MILEAGE_LOW_TO_HIGH",
            Self::MileageHighToLow => "MILEAGE_HIGH_TO_LOW",
        }
    }
}

impl FromStr for SortKey {
    type Err = AdmartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PRICE_LOW_TO_HIGH" => Ok(Self::PriceLowToHigh),
            "PRICE_HIGH_TO_LOW" => Ok(Self::PriceHighToLow),
            "DATE_RECENT_FIRST" => Ok(Self::DateRecentFirst),
            "DATE_OLDEST_FIRST" => Ok(Self::DateOldestFirst),
            "YEAR_LATEST_FIRST" => Ok(Self::YearLatestFirst),
            "YEAR_OLDEST_FIRST" => Ok(Self::YearOldestFirst),
            "MILEAGE_LOW_TO_HIGH" => Ok(Self::MileageLowToHigh),
            "MILEAGE_HIGH_TO_LOW" => Ok(Self::MileageHighToLow),
            other => Err(AdmartError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Row shape for listing pages: enough to render a result card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSummary {
    pub id: AdId,
    /// `"{make} {model} {year}"` when the catalog entry resolves, else
    /// `"{color} {year}"`.
    pub title: String,
    pub price: f64,
    pub year: i32,
    pub mileage: Option<u32>,
    pub city: String,
    pub photos: Vec<String>,
    /// Whether the identified viewer has favorited this listing. Always
    /// `false` for anonymous queries; never affects filtering.
    pub favorited: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// One page of listing results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdPage {
    pub items: Vec<AdSummary>,
    pub page: u32,
    pub total_pages: u32,
    /// Total matching listings across all pages.
    pub count: usize,
}

/// Full listing details returned by a detail fetch, with catalog references
/// expanded into their records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdDetails {
    pub id: AdId,
    pub title: String,
    pub owner: Option<UserId>,
    pub model_id: Option<ModelId>,
    pub variant_id: Option<VariantId>,
    pub year: i32,
    pub color: String,
    pub mileage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub city: City,
    pub registration_city: Option<City>,
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
    pub features: Vec<Feature>,
    pub photos: Vec<String>,
    pub views: u64,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
