//! Public types exposed by the `admart-core` crate.

pub mod autocomplete;
pub mod catalog;
pub mod common;
pub mod listing;
pub mod search;

pub use autocomplete::{AutocompleteRequest, MakeRef, Suggestion};
pub use catalog::{City, Feature, Make, MakeCatalog, Model, Region, VehicleCategory, Variant};
pub use common::{AdId, CityId, FeatureId, MakeId, ModelId, RegionId, UserId, VariantId};
pub use listing::{
    Ad, AdDraft, AdStatus, AssemblyType, BodyType, DailyAdViews, FavoritedAd, FuelType,
    ModificationType, TransmissionType,
};
pub use search::{AdDetails, AdPage, AdSearchRequest, AdSummary, SortKey};
