//! golfdb-wasm: WebAssembly bindings for golfdb-core
//!
//! Exposes a [`ClubFinder`] class to JavaScript. The page fetches
//! `clubs_index.json` itself and hands the text (or the parsed object) to
//! the constructor; every query afterwards is synchronous and returns plain
//! JSON-compatible values.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { ClubFinder, distance } from 'golfdb-wasm';
//!
//! async function main() {
//!   await init();
//!   const text = await (await fetch('/data/clubs_index.json')).text();
//!   const finder = new ClubFinder(text);
//!
//!   console.log(finder.suggest('lee'));          // [{type, value, latitude, longitude}]
//!   const outcome = finder.search('Leeds', 'england');
//!   // outcome.kind is "nearby" (with distances) or "text"
//!   console.log(outcome.clubs);
//!
//!   navigator.geolocation.getCurrentPosition(
//!     (pos) => finder.searchNear(pos.coords.latitude, pos.coords.longitude, null, 'all'),
//!     (err) => finder.searchNear(null, null, err.code, 'all'), // throws "location unavailable"
//!   );
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Regions are `"all"` (or `null`), `"england"`, `"scotland"` and `"wales"`.
//! - Failures surface as thrown JS `Error`s; an empty result is an empty
//!   `clubs` array, never an error.
use golfdb_core::{ClubDb, ClubSearch, Coordinate, GeolocationError, RegionFilter};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_message: &str) {}

fn js_err(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

// json_compatible: flattened structs must come out as plain objects, not Maps.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(js_err)
}

fn parse_region(region: Option<String>) -> Result<RegionFilter, JsError> {
    match region {
        Some(r) => r.parse().map_err(js_err),
        None => Ok(RegionFilter::All),
    }
}

fn point(latitude: f64, longitude: f64) -> Result<Coordinate, JsError> {
    Coordinate::new(latitude, longitude).map_err(js_err)
}

/// A loaded club directory.
#[wasm_bindgen]
pub struct ClubFinder {
    db: ClubDb,
}

#[wasm_bindgen]
impl ClubFinder {
    /// Builds the directory from the text of `clubs_index.json`.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<ClubFinder, JsError> {
        let db = ClubDb::from_json_str(json).map_err(js_err)?;
        let stats = db.stats();
        log(&format!(
            "golfdb: loaded {} clubs ({} geolocated, {} places)",
            stats.clubs, stats.geolocated, stats.suggestions
        ));
        Ok(ClubFinder { db })
    }

    /// Same as the constructor, for an already parsed JSON object.
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(value: &JsValue) -> Result<ClubFinder, JsError> {
        let text: String = js_sys::JSON::stringify(value)
            .map_err(|_| JsError::new("club index is not JSON-serializable"))?
            .into();
        Self::new(&text)
    }

    #[wasm_bindgen(getter, js_name = clubCount)]
    pub fn club_count(&self) -> usize {
        self.db.club_count()
    }

    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js(&self.db.stats())
    }

    /// Up to ten places starting with `query` (two characters minimum).
    pub fn suggest(&self, query: &str) -> Result<JsValue, JsError> {
        to_js(&self.db.suggest(query))
    }

    /// `{latitude, longitude}` of an exactly named place, or `null`.
    pub fn resolve(&self, input: &str) -> Result<JsValue, JsError> {
        to_js(&self.db.resolve(input))
    }

    /// Search box submit. Returns `{kind: "nearby" | "text", clubs, origin?}`.
    pub fn search(&self, input: &str, region: Option<String>) -> Result<JsValue, JsError> {
        let region = parse_region(region)?;
        to_js(&self.db.search(input, region))
    }

    /// Autocomplete click on a suggestion's display value.
    #[wasm_bindgen(js_name = selectSuggestion)]
    pub fn select_suggestion(&self, value: &str, region: Option<String>) -> Result<JsValue, JsError> {
        let region = parse_region(region)?;
        to_js(&self.db.select_suggestion(value, region))
    }

    /// "Near me": pass the device position, or `null`s plus the
    /// `GeolocationPositionError.code` when the browser could not provide one.
    /// Missing both position and code means geolocation is unsupported.
    #[wasm_bindgen(js_name = searchNear)]
    pub fn search_near(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
        error_code: Option<u16>,
        region: Option<String>,
    ) -> Result<JsValue, JsError> {
        let region = parse_region(region)?;
        let origin = match (latitude, longitude, error_code) {
            (Some(lat), Some(lng), _) => Ok(point(lat, lng)?),
            (_, _, Some(code)) => Err(GeolocationError::from_code(code)),
            _ => Err(GeolocationError::Unsupported),
        };
        let outcome = self.db.search_near(origin, region).map_err(js_err)?;
        to_js(&outcome)
    }

    /// Nearest clubs with a `distance` field in miles, closest first.
    #[wasm_bindgen(js_name = findNearby)]
    pub fn find_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        region: Option<String>,
    ) -> Result<JsValue, JsError> {
        let region = parse_region(region)?;
        to_js(&self.db.find_nearby(point(latitude, longitude)?, region))
    }

    /// Nearest clubs within `radius` miles, 10 when `radius` is `null`.
    #[wasm_bindgen(js_name = findWithinRadius)]
    pub fn find_within_radius(
        &self,
        latitude: f64,
        longitude: f64,
        radius: Option<f64>,
        region: Option<String>,
    ) -> Result<JsValue, JsError> {
        let region = parse_region(region)?;
        let origin = point(latitude, longitude)?;
        let hits = match radius {
            Some(miles) => self.db.find_within_radius(origin, miles, region),
            None => self.db.find_within_default_radius(origin, region),
        };
        to_js(&hits)
    }

    #[wasm_bindgen(js_name = textSearch)]
    pub fn text_search(&self, query: &str, region: Option<String>) -> Result<JsValue, JsError> {
        let region = parse_region(region)?;
        to_js(&self.db.text_search(query, region))
    }

    /// All geolocated clubs of a region, for drawing map markers.
    #[wasm_bindgen(js_name = clubsInRegion)]
    pub fn clubs_in_region(&self, region: Option<String>) -> Result<JsValue, JsError> {
        let region = parse_region(region)?;
        to_js(&self.db.clubs_in_region(region))
    }
}

/// Great-circle distance in miles between two points.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64, JsError> {
    Ok(golfdb_core::geo::distance(point(lat1, lng1)?, point(lat2, lng2)?))
}
