// crates/golfdb-core/src/query.rs

//! # Search dispatch
//!
//! The three user flows of the directory page, expressed over an explicit
//! [`ClubDb`]:
//!
//! - submitting typed text ([`ClubDb::search`]),
//! - picking an autocomplete entry ([`ClubDb::select_suggestion`]),
//! - "near me" with a device position ([`ClubDb::search_near`]).
//!
//! Load failures, an unavailable location and an empty result stay
//! distinguishable: the first two are [`ClubDbError`] variants, the last is
//! an `Ok` outcome for which [`SearchOutcome::is_empty`] is true.

use crate::common::Coordinate;
use crate::error::{ClubDbError, GeolocationError, Result};
use crate::model::{ClubDb, ClubRecord, RankedClub, RegionFilter};
use crate::traits::ClubSearch;
use serde::Serialize;

/// Results of a dispatched search.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchOutcome<'a> {
    /// The input resolved to a coordinate; clubs ranked by distance.
    Nearby {
        origin: Coordinate,
        clubs: Vec<RankedClub<'a>>,
    },
    /// No coordinate known; clubs matching the text, in source order.
    Text { clubs: Vec<&'a ClubRecord> },
}

impl SearchOutcome<'_> {
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Nearby { clubs, .. } => clubs.len(),
            SearchOutcome::Text { clubs } => clubs.len(),
        }
    }

    /// The "no clubs found" state. Not an error.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when results carry distances.
    pub fn is_ranked(&self) -> bool {
        matches!(self, SearchOutcome::Nearby { .. })
    }

    /// The clubs in display order, without distances.
    pub fn clubs(&self) -> Vec<&ClubRecord> {
        match self {
            SearchOutcome::Nearby { clubs, .. } => clubs.iter().map(|r| r.club).collect(),
            SearchOutcome::Text { clubs } => clubs.clone(),
        }
    }
}

impl ClubDb {
    /// Submit of the search box.
    ///
    /// Blank input yields an empty text outcome. Input naming a known town,
    /// county or postcode exactly (case-insensitive) is ranked by distance
    /// from that place; anything else falls back to text search.
    pub fn search(&self, input: &str, region: RegionFilter) -> SearchOutcome<'_> {
        let input = input.trim();
        if input.is_empty() {
            return SearchOutcome::Text { clubs: Vec::new() };
        }
        match self.resolve(input) {
            Some(origin) => {
                tracing::debug!(input, ?origin, "resolved search input to a location");
                self.nearby_outcome(origin, region)
            }
            None => SearchOutcome::Text {
                clubs: self.text_search(input, region),
            },
        }
    }

    /// A click on an autocomplete entry: exact display value first, then the
    /// same fallback as [`ClubDb::search`].
    pub fn select_suggestion(&self, value: &str, region: RegionFilter) -> SearchOutcome<'_> {
        match self.index.find_value(value) {
            Some(place) => self.nearby_outcome(place.coordinate, region),
            None => self.search(value, region),
        }
    }

    /// "Clubs near me". `origin` is whatever the platform geolocation
    /// produced; a failure is reported as
    /// [`ClubDbError::LocationUnavailable`] and no search is run.
    pub fn search_near(
        &self,
        origin: std::result::Result<Coordinate, GeolocationError>,
        region: RegionFilter,
    ) -> Result<SearchOutcome<'_>> {
        let origin = origin.map_err(|e| {
            tracing::info!(reason = %e, "device location unavailable");
            ClubDbError::LocationUnavailable(e)
        })?;
        Ok(self.nearby_outcome(origin, region))
    }

    fn nearby_outcome(&self, origin: Coordinate, region: RegionFilter) -> SearchOutcome<'_> {
        SearchOutcome::Nearby {
            origin,
            clubs: self.find_nearby(origin, region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn db() -> ClubDb {
        ClubDb::new(vec![
            ClubRecord {
                name: "Alpha GC".into(),
                town: Some("Leeds".into()),
                postcode: Some("LS1 2AB".into()),
                latitude: Some(53.8),
                longitude: Some(-1.5),
                region: Some(Region::England),
                ..Default::default()
            },
            ClubRecord {
                name: "Beta GC".into(),
                town: Some("Bristol".into()),
                postcode: Some("BS1 3CD".into()),
                latitude: Some(51.45),
                longitude: Some(-2.6),
                region: Some(Region::England),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn known_place_dispatches_to_nearby() {
        let db = db();
        let out = db.search("  leeds ", RegionFilter::All);
        assert!(out.is_ranked());
        let names: Vec<_> = out.clubs().into_iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alpha GC", "Beta GC"]);
    }

    #[test]
    fn partial_place_falls_back_to_text() {
        let db = db();
        let out = db.search("lee", RegionFilter::All);
        assert!(!out.is_ranked());
        // "lee" is a substring of Alpha's town.
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn blank_input_is_an_empty_outcome() {
        let db = db();
        let out = db.search("   ", RegionFilter::All);
        assert!(out.is_empty());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let db = db();
        let out = db.search("zzz", RegionFilter::All);
        assert!(out.is_empty());
        let out = db.search("leeds", Region::Scotland.into());
        assert!(out.is_ranked());
        assert!(out.is_empty());
    }

    #[test]
    fn selecting_a_suggestion_uses_its_coordinate() {
        let db = db();
        match db.select_suggestion("BS1", RegionFilter::All) {
            SearchOutcome::Nearby { origin, clubs } => {
                assert_eq!(origin.latitude, 51.45);
                assert_eq!(clubs[0].club.name, "Beta GC");
            }
            other => panic!("expected nearby outcome, got {other:?}"),
        }
    }

    #[test]
    fn near_me_failure_is_location_unavailable() {
        let db = db();
        let err = db
            .search_near(Err(GeolocationError::Denied), RegionFilter::All)
            .unwrap_err();
        assert!(matches!(
            err,
            ClubDbError::LocationUnavailable(GeolocationError::Denied)
        ));
        assert!(!err.is_load_failure());

        let ok = db
            .search_near(Coordinate::new(51.45, -2.6).map_err(|_| GeolocationError::Unavailable), RegionFilter::All)
            .unwrap();
        assert_eq!(ok.clubs()[0].name, "Beta GC");
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let db = db();
        let v = serde_json::to_value(db.search("leeds", RegionFilter::All)).unwrap();
        assert_eq!(v["kind"], "nearby");
        assert_eq!(v["clubs"][0]["name"], "Alpha GC");
        let v = serde_json::to_value(db.search("beta", RegionFilter::All)).unwrap();
        assert_eq!(v["kind"], "text");
    }
}
