//! Reference catalog reads backing the browse and post-ad forms.

use crate::constants::POPULAR_MAKES_LIMIT;
use crate::types::{
    City, Feature, Make, MakeCatalog, MakeId, Model, RegionId, VehicleCategory,
};

use super::Admart;

impl Admart {
    /// Cities of a region, name-ordered.
    pub fn cities_in_region(&self, region_id: RegionId) -> Vec<City> {
        let mut cities: Vec<City> = self
            .store
            .cities
            .values()
            .filter(|city| city.region_id == region_id)
            .cloned()
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        cities
    }

    /// Makes of a region whose name starts with `term` (case-insensitive,
    /// empty term matches all), name-ordered, plus the capped popular block.
    pub fn makes_in_region(&self, region_id: RegionId, term: &str) -> MakeCatalog {
        let term = term.to_lowercase();
        let mut items: Vec<Make> = self
            .store
            .makes
            .values()
            .filter(|make| {
                make.region_id == region_id && make.name.to_lowercase().starts_with(&term)
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));

        let mut popular: Vec<Make> =
            items.iter().filter(|make| make.is_popular).cloned().collect();
        popular.truncate(POPULAR_MAKES_LIMIT);

        MakeCatalog { items, popular }
    }

    /// Models of a make whose name starts with `term`, name-ordered.
    pub fn models_of_make(&self, make_id: MakeId, term: &str) -> Vec<Model> {
        let term = term.to_lowercase();
        let mut models: Vec<Model> = self
            .store
            .models
            .values()
            .filter(|model| {
                model.make_id == make_id && model.name.to_lowercase().starts_with(&term)
            })
            .cloned()
            .collect();
        models.sort_by(|a, b| a.name.cmp(&b.name));
        models
    }

    /// Features for a vehicle category, or all features, name-ordered.
    pub fn features_for(&self, category: Option<VehicleCategory>) -> Vec<Feature> {
        let mut features: Vec<Feature> = self
            .store
            .features
            .values()
            .filter(|feature| category.is_none_or(|c| feature.category == c))
            .cloned()
            .collect();
        features.sort_by(|a, b| a.name.cmp(&b.name));
        features
    }
}
