//! End-to-end behaviour of the directory over a small, hand-written index.

use golfdb_core::prelude::*;
use golfdb_core::{geo, index, search};

const TWO_CLUBS: &str = r#"{"clubs": [
    {"name": "Alpha GC", "town": "Leeds", "postcode": "LS1 2AB",
     "latitude": 53.8, "longitude": -1.5, "region": "north"},
    {"name": "Beta GC", "town": "Bristol", "postcode": "BS1 3CD",
     "latitude": 51.45, "longitude": -2.6, "region": "south"}
]}"#;

fn here(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).unwrap()
}

#[test]
fn two_club_walkthrough() {
    let db = ClubDb::from_json_str(TWO_CLUBS).unwrap();

    // Index contents, alphabetically.
    let values: Vec<_> = db.suggestions().iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, ["Bristol", "BS1", "BS1 3CD", "Leeds", "LS1", "LS1 2AB"]);
    let leeds = db.index().lookup("Leeds").unwrap();
    assert_eq!(leeds.kind, LocationKind::Town);
    let ls1 = db.index().lookup("LS1").unwrap();
    assert_eq!(ls1.kind, LocationKind::Postcode);

    // Nearest club to Alpha's own position.
    let hits = search::find_nearby(here(53.8, -1.5), db.clubs(), RegionFilter::All, 1);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].club.name, "Alpha GC");
    assert!(hits[0].distance < 1e-9);

    // Text search.
    let beta: Vec<_> = search::text_search("beta", db.clubs(), RegionFilter::All, 20)
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(beta, ["Beta GC"]);
    let gc: Vec<_> = search::text_search("gc", db.clubs(), RegionFilter::All, 20)
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(gc, ["Alpha GC", "Beta GC"]);

    // Resolve is exact.
    assert_eq!(search::resolve("leeds", db.suggestions()), Some(here(53.8, -1.5)));
    assert_eq!(search::resolve("lee", db.suggestions()), None);
}

#[test]
fn unknown_region_tags_only_match_all() {
    // "north"/"south" are not federation regions.
    let db = ClubDb::from_json_str(TWO_CLUBS).unwrap();
    assert_eq!(db.stats().unassigned, 2);
    assert!(db.find_nearby(here(53.8, -1.5), Region::England.into()).is_empty());
    assert_eq!(db.find_nearby(here(53.8, -1.5), RegionFilter::All).len(), 2);
}

/// Deterministic pseudo-random clubs spread over Great Britain.
fn synthetic(n: usize, seed: u64) -> Vec<ClubRecord> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let regions = [Region::England, Region::Scotland, Region::Wales];
    (0..n)
        .map(|i| {
            let located = next() > 0.1;
            let lat = 50.0 + next() * 8.5;
            let lng = -6.0 + next() * 7.5;
            ClubRecord {
                name: format!("Club {i}"),
                town: Some(format!("Town {}", i % 97)),
                county: Some(format!("County {}", i % 13)),
                postcode: Some(format!("AB{} {}XY", i % 40, i % 9)),
                region: Some(regions[i % 3]),
                latitude: located.then_some(lat),
                longitude: located.then_some(lng),
                ..Default::default()
            }
        })
        .collect()
}

#[test]
fn nearby_results_are_bounded_sorted_and_filtered() {
    let clubs = synthetic(500, 42);
    let origins = [here(51.5, -0.1), here(55.9, -3.2), here(52.4, -4.0)];
    let filters = [
        RegionFilter::All,
        Region::England.into(),
        Region::Scotland.into(),
        Region::Wales.into(),
    ];
    for origin in origins {
        for region in filters {
            for limit in [0, 1, 7, 20, 1000] {
                let hits = search::find_nearby(origin, &clubs, region, limit);
                assert!(hits.len() <= limit);
                assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
                assert!(hits.iter().all(|h| region.matches(h.club.region)));
                assert!(hits.iter().all(|h| h.club.is_geolocated()));
                for h in &hits {
                    let d = geo::distance(origin, h.club.coordinate().unwrap());
                    assert_eq!(d, h.distance);
                }
            }
        }
    }
}

#[test]
fn index_has_one_entry_per_lowercase_key_and_is_stable() {
    let clubs = synthetic(300, 7);
    let a = LocationIndex::build(&clubs);
    let b = LocationIndex::build(&clubs);
    assert_eq!(a, b);

    let mut keys: Vec<String> = a.entries().iter().map(|s| s.value.to_lowercase()).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn suggestions_respect_prefix_and_minimum_length() {
    let clubs = synthetic(300, 9);
    let idx = LocationIndex::build(&clubs);
    assert!(index::suggest("", idx.entries(), 10).is_empty());
    assert!(index::suggest("a", idx.entries(), 10).is_empty());
    for q in ["to", "TOWN 1", "co", "ab1", "Ab3 "] {
        let hits = index::suggest(q, idx.entries(), 10);
        assert!(hits.len() <= 10);
        let lq = q.to_lowercase();
        assert!(hits.iter().all(|s| s.value.to_lowercase().starts_with(&lq)));
    }
    // "Ab3 " only reaches full postcodes, never the bare "AB3" area.
    let spaced = index::suggest("Ab3 ", idx.entries(), 10);
    assert!(!spaced.is_empty());
    assert!(spaced.iter().all(|s| s.value.starts_with("AB3 ")));
}

#[test]
fn distance_properties_hold() {
    let clubs = synthetic(60, 3);
    let points: Vec<Coordinate> = clubs.iter().filter_map(ClubRecord::coordinate).collect();
    for a in &points {
        assert_eq!(geo::distance(*a, *a), 0.0);
        for b in &points {
            let ab = geo::distance(*a, *b);
            let ba = geo::distance(*b, *a);
            assert!(ab >= 0.0);
            assert!((ab - ba).abs() < 1e-9);
        }
    }
}

#[test]
fn three_error_states_stay_distinct() {
    // (a) load failure
    let load = ClubDb::load_json("/no/such/clubs_index.json").unwrap_err();
    assert!(load.is_load_failure());

    // (b) location unavailable
    let db = ClubDb::from_json_str(TWO_CLUBS).unwrap();
    let denied = db
        .search_near(Err(GeolocationError::Unsupported), RegionFilter::All)
        .unwrap_err();
    assert!(matches!(denied, ClubDbError::LocationUnavailable(_)));
    assert!(!denied.is_load_failure());

    // (c) empty result
    let empty = db.search("nowhere-in-particular", RegionFilter::All);
    assert!(empty.is_empty());
}
