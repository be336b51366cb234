//! Autocomplete request/response types.

use serde::{Deserialize, Serialize};

use super::common::{MakeId, ModelId, RegionId};

/// Autocomplete input. `term` and `region_id` are both mandatory; the request
/// is rejected when either is missing or the term is blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteRequest {
    pub term: String,
    pub region_id: Option<RegionId>,
}

/// Compact make reference embedded in model suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeRef {
    pub id: MakeId,
    pub name: String,
}

/// One ranked suggestion, tagged with its catalog kind. A response is the
/// concatenation of all make hits followed by all model hits, never
/// interleaved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    Make {
        id: MakeId,
        /// The make name.
        text: String,
    },
    Model {
        id: ModelId,
        /// `"{make name} {model name}"`.
        text: String,
        make: MakeRef,
    },
}
