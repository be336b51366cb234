//! Identifier aliases shared across record types.
//!
//! Ids are store-assigned, dense, and start at 1; 0 never refers to a row.

pub type RegionId = u64;
pub type CityId = u64;
pub type MakeId = u64;
pub type ModelId = u64;
pub type VariantId = u64;
pub type FeatureId = u64;
pub type AdId = u64;
pub type UserId = u64;
