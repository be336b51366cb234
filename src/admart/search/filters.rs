//! Ordered predicate-builder pipeline for listing searches.
//!
//! Each builder inspects the request and returns either no predicate or a
//! boxed condition over one listing. Builders are independent and the final
//! set is their conjunction, so pipeline order never changes the result set;
//! precedence *within* the location and vehicle groups (id over name, finer
//! over coarser) is resolved inside the respective builder.

use crate::store::Store;
use crate::types::{Ad, AdSearchRequest, CityId, MakeId, ModelId, RegionId};

pub(crate) type Predicate<'a> = Box<dyn Fn(&Ad) -> bool + 'a>;

type Builder = for<'a> fn(&AdSearchRequest, &'a Store) -> Option<Predicate<'a>>;

pub(crate) const PIPELINE: &[Builder] = &[
    location,
    vehicle,
    year_bounds,
    price_bounds,
    registration_city,
    color,
    mileage_bounds,
    transmission,
    assembly,
];

/// Location facet: `city_id` > `city` name > `region_id` > `region` name.
/// The first parameter present determines the predicate; the rest are ignored.
fn location<'a>(request: &AdSearchRequest, store: &'a Store) -> Option<Predicate<'a>> {
    if let Some(city_id) = request.city_id {
        return Some(Box::new(move |ad| ad.city_id == city_id));
    }
    if let Some(name) = &request.city {
        let ids: Vec<CityId> = store
            .cities
            .values()
            .filter(|city| city.name == *name)
            .map(|city| city.id)
            .collect();
        return Some(Box::new(move |ad| ids.contains(&ad.city_id)));
    }
    if let Some(region_id) = request.region_id {
        return Some(Box::new(move |ad| store.region_id_of(ad) == Some(region_id)));
    }
    if let Some(name) = &request.region {
        let ids: Vec<RegionId> = store
            .regions
            .values()
            .filter(|region| region.name == *name)
            .map(|region| region.id)
            .collect();
        return Some(Box::new(move |ad| {
            store.region_id_of(ad).is_some_and(|region| ids.contains(&region))
        }));
    }
    None
}

/// Vehicle facet: `model_id` > `model` name > `make_id` > `make` name.
fn vehicle<'a>(request: &AdSearchRequest, store: &'a Store) -> Option<Predicate<'a>> {
    if let Some(model_id) = request.model_id {
        return Some(Box::new(move |ad| ad.model_id == Some(model_id)));
    }
    if let Some(name) = &request.model {
        let ids: Vec<ModelId> = store
            .models
            .values()
            .filter(|model| model.name == *name)
            .map(|model| model.id)
            .collect();
        return Some(Box::new(move |ad| {
            ad.model_id.is_some_and(|model| ids.contains(&model))
        }));
    }
    if let Some(make_id) = request.make_id {
        return Some(Box::new(move |ad| store.make_id_of(ad) == Some(make_id)));
    }
    if let Some(name) = &request.make {
        let ids: Vec<MakeId> = store
            .makes
            .values()
            .filter(|make| make.name == *name)
            .map(|make| make.id)
            .collect();
        return Some(Box::new(move |ad| {
            store.make_id_of(ad).is_some_and(|make| ids.contains(&make))
        }));
    }
    None
}

fn year_bounds<'a>(request: &AdSearchRequest, _store: &'a Store) -> Option<Predicate<'a>> {
    let (from, to) = (request.year_from, request.year_to);
    if from.is_none() && to.is_none() {
        return None;
    }
    Some(Box::new(move |ad| {
        from.is_none_or(|f| ad.year >= f) && to.is_none_or(|t| ad.year <= t)
    }))
}

fn price_bounds<'a>(request: &AdSearchRequest, _store: &'a Store) -> Option<Predicate<'a>> {
    let (from, to) = (request.price_from, request.price_to);
    if from.is_none() && to.is_none() {
        return None;
    }
    Some(Box::new(move |ad| {
        from.is_none_or(|f| ad.price >= f) && to.is_none_or(|t| ad.price <= t)
    }))
}

fn registration_city<'a>(request: &AdSearchRequest, _store: &'a Store) -> Option<Predicate<'a>> {
    let want = request.registration_city?;
    Some(Box::new(move |ad| ad.registration_city_id == Some(want)))
}

fn color<'a>(request: &AdSearchRequest, _store: &'a Store) -> Option<Predicate<'a>> {
    let want = request.color.clone()?;
    Some(Box::new(move |ad| ad.color == want))
}

/// Listings without a recorded mileage never satisfy a mileage bound.
fn mileage_bounds<'a>(request: &AdSearchRequest, _store: &'a Store) -> Option<Predicate<'a>> {
    let (from, to) = (request.mileage_from, request.mileage_to);
    if from.is_none() && to.is_none() {
        return None;
    }
    Some(Box::new(move |ad| {
        ad.mileage.is_some_and(|mileage| {
            from.is_none_or(|f| mileage >= f) && to.is_none_or(|t| mileage <= t)
        })
    }))
}

fn transmission<'a>(request: &AdSearchRequest, _store: &'a Store) -> Option<Predicate<'a>> {
    let want = request.transmission?;
    Some(Box::new(move |ad| ad.transmission_type == want))
}

fn assembly<'a>(request: &AdSearchRequest, _store: &'a Store) -> Option<Predicate<'a>> {
    let want = request.assembly?;
    Some(Box::new(move |ad| ad.assembly_type == want))
}
