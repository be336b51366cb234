//! Integration tests for snapshot lifecycle: create, commit, reopen.

use admart_core::types::{AdDraft, AdSearchRequest, VehicleCategory};
use admart_core::{Admart, AdmartError};
use tempfile::TempDir;

fn seeded(path: &std::path::Path) -> (Admart, u64, u64) {
    let mut market = Admart::create(path).unwrap();
    let punjab = market.add_region("Punjab");
    let lahore = market.add_city("Lahore", punjab).unwrap();
    let ad = market
        .post_ad(
            AdDraft {
                owner: Some(1),
                year: 2020,
                color: "white".to_string(),
                city_id: lahore,
                price: 2_500_000.0,
                contact: "0300-0000000".to_string(),
                ..AdDraft::default()
            },
            &[],
        )
        .unwrap();
    market.approve_ad(ad).unwrap();
    market.favorite_ad(ad, 5).unwrap();
    (market, lahore, ad)
}

#[test]
fn snapshot_round_trips_the_marketplace() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("market.admart");

    let (mut market, lahore, ad) = seeded(&path);
    market.commit().unwrap();
    drop(market);

    let reopened = Admart::open(&path).unwrap();
    let request = AdSearchRequest { city_id: Some(lahore), ..AdSearchRequest::default() };
    let page = reopened.search(&request, Some(5)).unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].id, ad);
    assert!(page.items[0].favorited);
}

#[test]
fn commits_after_reopen_extend_the_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("market.admart");

    let (mut market, _lahore, _ad) = seeded(&path);
    market.commit().unwrap();
    drop(market);

    let mut market = Admart::open(&path).unwrap();
    let region = market.add_region("Sindh");
    let karachi = market.add_city("Karachi", region).unwrap();
    market
        .add_make("Suzuki", VehicleCategory::Car, region, true)
        .unwrap();
    market.commit().unwrap();
    drop(market);

    let market = Admart::open(&path).unwrap();
    let cities = market.cities_in_region(region);
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].id, karachi);
    assert_eq!(market.makes_in_region(region, "").items.len(), 1);
}

#[test]
fn view_counters_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("market.admart");

    let (mut market, _lahore, ad) = seeded(&path);
    let day = chrono::NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    market.view_ad_on(ad, day).unwrap();
    market.view_ad_on(ad, day).unwrap();
    market.commit().unwrap();
    drop(market);

    let market = Admart::open(&path).unwrap();
    let history = market.view_history(ad);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].views, 2);
}

#[test]
fn commit_staging_never_clobbers_sibling_files() {
    let dir = TempDir::new().unwrap();
    // A neighbor whose name matches what a stem-based staging file would use.
    let sibling = dir.path().join("market.tmp");
    std::fs::write(&sibling, "keep me").unwrap();

    let (mut market, _lahore, _ad) = seeded(&dir.path().join("market.admart"));
    market.commit().unwrap();

    assert_eq!(std::fs::read_to_string(&sibling).unwrap(), "keep me");
}

#[test]
fn corrupt_snapshots_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("market.admart");
    std::fs::write(&path, "not a snapshot").unwrap();

    let err = Admart::open(&path).unwrap_err();
    assert!(matches!(err, AdmartError::Snapshot(_)));
}

#[test]
fn opening_a_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Admart::open(dir.path().join("absent.admart")).unwrap_err();
    assert!(matches!(err, AdmartError::Io(_)));
}
