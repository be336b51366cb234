#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
//
// Documentation lints: internal/self-documenting functions don't need
// extensive docs; public APIs should still have proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Page math casts are bounded by real-world page counts.
#![allow(clippy::cast_possible_truncation)]
//
// Listing records naturally carry several independent moderation flags.
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]

/// The admart-core crate version (matches `Cargo.toml`).
pub const ADMART_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod admart;
pub mod constants;
pub mod error;
mod store;
pub mod types;

pub use admart::Admart;
pub use error::{AdmartError, Result};
pub use types::{
    Ad, AdDetails, AdDraft, AdId, AdPage, AdSearchRequest, AdStatus, AdSummary, AssemblyType,
    AutocompleteRequest, BodyType, City, CityId, DailyAdViews, FavoritedAd, Feature, FeatureId,
    FuelType, Make, MakeCatalog, MakeId, MakeRef, Model, ModelId, ModificationType, Region,
    RegionId, SortKey, Suggestion, TransmissionType, UserId, VariantId, Variant, VehicleCategory,
};
