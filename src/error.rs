//! Error taxonomy for `admart-core`.
//!
//! Client-input failures (missing mandatory facets, bad page numbers, unknown
//! ids) get dedicated variants so callers can map them to 4xx responses;
//! snapshot I/O failures wrap the underlying error and surface as 5xx.

use thiserror::Error;

use crate::types::AdId;

#[derive(Debug, Error)]
pub enum AdmartError {
    /// A listing search supplied none of `city_id`, `city`, `region_id`, `region`.
    #[error("region and city missing")]
    MissingLocation,

    /// Autocomplete called without a search term or without a region.
    #[error("search term or region missing")]
    MissingAutocompleteInput,

    /// Page parameter was zero or beyond the last page.
    #[error("Invalid page number.")]
    InvalidPage,

    /// No listing exists for the given id.
    #[error("ad {0} not found")]
    AdNotFound(AdId),

    /// A catalog reference (city, region, make, model, variant, feature)
    /// does not resolve.
    #[error("{entity} {id} not found")]
    UnknownEntity { entity: &'static str, id: u64 },

    /// A `sort_by` value outside the fixed sort-key enumeration.
    #[error("unrecognized sort key: {0}")]
    InvalidSortKey(String),

    /// Snapshot file written by an incompatible crate version.
    #[error("snapshot version {found} unsupported (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Snapshot encode/decode failure.
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdmartError>;
