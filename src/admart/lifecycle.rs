//! Lifecycle management for marketplace handles.
//!
//! Responsibilities:
//! - Construct in-memory handles and snapshot-backed handles.
//! - Persist the table set as one versioned JSON document on commit, writing
//!   to a sibling file and renaming so a crashed commit never truncates the
//!   previous snapshot.
//! - Seed the reference catalog (regions, cities, makes, models, variants,
//!   features) with store-assigned ids.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::Store;
use crate::types::{
    CityId, FeatureId, MakeId, ModelId, RegionId, VariantId, VehicleCategory,
};

/// Primary handle for interacting with a marketplace record store.
///
/// Owns every table; queries borrow `&self`, mutations take `&mut self` and
/// mark the handle dirty until the next [`commit`](Admart::commit).
#[derive(Debug)]
pub struct Admart {
    pub(crate) store: Store,
    pub(crate) path: Option<PathBuf>,
    pub(crate) dirty: bool,
}

impl Admart {
    /// In-memory handle with empty tables and no backing file.
    pub fn new() -> Self {
        Self { store: Store::default(), path: None, dirty: false }
    }

    /// Create a new snapshot file at `path` with empty tables. Truncates any
    /// existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut admart = Self {
            store: Store::default(),
            path: Some(path.as_ref().to_path_buf()),
            dirty: true,
        };
        admart.commit()?;
        tracing::info!(
            target: "admart::lifecycle",
            path = %path.as_ref().display(),
            "snapshot created"
        );
        Ok(admart)
    }

    /// Open an existing snapshot file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs_err::read_to_string(path.as_ref())?;
        let store = Store::from_snapshot_json(&raw)?;
        tracing::info!(
            target: "admart::lifecycle",
            path = %path.as_ref().display(),
            ads = store.ads.len(),
            cities = store.cities.len(),
            "snapshot opened"
        );
        Ok(Self { store, path: Some(path.as_ref().to_path_buf()), dirty: false })
    }

    /// Persist pending mutations. A clean or purely in-memory handle is a
    /// no-op success.
    pub fn commit(&mut self) -> Result<()> {
        let Some(path) = &self.path else { return Ok(()) };
        if !self.dirty {
            return Ok(());
        }
        let json = self.store.to_snapshot_json()?;
        // Staging name appends to the full file name; `with_extension` would
        // collide for sibling snapshots sharing a stem.
        let mut staging = path.as_os_str().to_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);
        fs_err::write(&staging, json)?;
        fs_err::rename(&staging, path)?;
        self.dirty = false;
        tracing::info!(
            target: "admart::lifecycle",
            path = %path.display(),
            ads = self.store.ads.len(),
            "snapshot committed"
        );
        Ok(())
    }
}

impl Default for Admart {
    fn default() -> Self {
        Self::new()
    }
}

// -- Catalog seeding --------------------------------------------------------

impl Admart {
    pub fn add_region(&mut self, name: &str) -> RegionId {
        self.dirty = true;
        self.store.insert_region(name)
    }

    pub fn add_city(&mut self, name: &str, region_id: RegionId) -> Result<CityId> {
        let id = self.store.insert_city(name, region_id)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn add_make(
        &mut self,
        name: &str,
        category: VehicleCategory,
        region_id: RegionId,
        is_popular: bool,
    ) -> Result<MakeId> {
        let id = self.store.insert_make(name, category, region_id, is_popular)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn add_model(&mut self, name: &str, make_id: MakeId, is_popular: bool) -> Result<ModelId> {
        let id = self.store.insert_model(name, make_id, is_popular)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn add_variant(&mut self, name: &str, model_id: ModelId) -> Result<VariantId> {
        let id = self.store.insert_variant(name, model_id)?;
        self.dirty = true;
        Ok(id)
    }

    pub fn add_feature(
        &mut self,
        name: &str,
        description: Option<&str>,
        category: VehicleCategory,
        code: &str,
    ) -> FeatureId {
        self.dirty = true;
        self.store.insert_feature(name, description, category, code)
    }
}
