// JS values only exist on the wasm target.
#![cfg(target_arch = "wasm32")]

use golfdb_wasm::{distance, ClubFinder};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const INDEX: &str = r#"{"total": 2, "clubs": [
    {"name": "Alpha GC", "town": "Leeds", "postcode": "LS1 2AB",
     "latitude": 53.8, "longitude": -1.5, "region": "england"},
    {"name": "Beta GC", "town": "Bristol", "postcode": "BS1 3CD",
     "latitude": 51.45, "longitude": -2.6, "region": "england"}
]}"#;

fn clubs_len(outcome: &JsValue) -> u32 {
    let clubs = js_sys::Reflect::get(outcome, &"clubs".into()).unwrap();
    js_sys::Array::from(&clubs).length()
}

#[wasm_bindgen_test]
fn loads_index() {
    let finder = ClubFinder::new(INDEX).unwrap();
    assert_eq!(finder.club_count(), 2);
}

#[wasm_bindgen_test]
fn search_resolves_town() {
    let finder = ClubFinder::new(INDEX).unwrap();
    let outcome = finder.search("leeds", None).unwrap();
    let kind = js_sys::Reflect::get(&outcome, &"kind".into()).unwrap();
    assert_eq!(kind.as_string().as_deref(), Some("nearby"));
    assert_eq!(clubs_len(&outcome), 2);
}

#[wasm_bindgen_test]
fn denied_location_is_an_error() {
    let finder = ClubFinder::new(INDEX).unwrap();
    assert!(finder.search_near(None, None, Some(1), None).is_err());
    assert!(finder.search_near(Some(53.8), Some(-1.5), None, None).is_ok());
}

#[wasm_bindgen_test]
fn bad_region_is_an_error() {
    let finder = ClubFinder::new(INDEX).unwrap();
    assert!(finder.text_search("gc", Some("ulster".into())).is_err());
}

#[wasm_bindgen_test]
fn distance_to_self_is_zero() {
    assert_eq!(distance(53.8, -1.5, 53.8, -1.5).unwrap(), 0.0);
}

#[wasm_bindgen_test]
fn radius_defaults_to_ten_miles() {
    let finder = ClubFinder::new(INDEX).unwrap();
    let near = finder.find_within_radius(53.8, -1.5, None, None).unwrap();
    assert_eq!(js_sys::Array::from(&near).length(), 1);
    let wide = finder.find_within_radius(53.8, -1.5, Some(500.0), None).unwrap();
    assert_eq!(js_sys::Array::from(&wide).length(), 2);
}
