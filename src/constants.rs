//! Crate-wide limits and format constants.

/// Fixed page size for every paginated listing query.
pub const PAGE_SIZE: usize = 10;

/// Per-kind cap on autocomplete suggestions (makes and models independently).
pub const AUTOCOMPLETE_LIMIT: usize = 10;

/// Cap on the popular-makes block returned alongside a full make listing.
pub const POPULAR_MAKES_LIMIT: usize = 7;

/// Version stamp written into snapshot files; bumped on incompatible layout changes.
pub(crate) const SNAPSHOT_VERSION: u32 = 1;
