//! Reference catalog records: regions, cities, and the Make → Model → Variant
//! vehicle taxonomy plus attachable features.
//!
//! Catalog rows are created by administration, read-mostly afterwards. Every
//! Model belongs to exactly one Make and every Variant to exactly one Model.

use serde::{Deserialize, Serialize};

use super::common::{CityId, FeatureId, MakeId, ModelId, RegionId, VariantId};

/// Vehicle category a make or feature applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    #[default]
    Car,
    Bike,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub region_id: RegionId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Make {
    pub id: MakeId,
    pub name: String,
    pub category: VehicleCategory,
    pub region_id: RegionId,
    pub is_popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: ModelId,
    pub name: String,
    pub make_id: MakeId,
    pub is_popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub name: String,
    pub model_id: ModelId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: VehicleCategory,
    /// Stable machine-readable code, e.g. `"abs"` or `"sunroof"`.
    pub code: String,
}

/// Response shape for a full make listing: all matches plus a capped block of
/// popular makes for the "popular brands" rail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeCatalog {
    pub items: Vec<Make>,
    pub popular: Vec<Make>,
}
