// crates/golfdb-core/src/index.rs

//! # Location Index
//!
//! Town, county and postcode lookup entries derived from the club list. The
//! index drives the autocomplete dropdown ([`LocationIndex::suggest`]) and
//! turns a submitted place name into a coordinate
//! ([`LocationIndex::resolve`]).

use crate::common::Coordinate;
use crate::model::ClubRecord;
use crate::text::{lower, CollationKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What kind of place a suggestion names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Town,
    County,
    Postcode,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Town => "town",
            LocationKind::County => "county",
            LocationKind::Postcode => "postcode",
        }
    }
}

/// A deduplicated, named, coordinate-bearing place.
///
/// The coordinate is the one of the first club (in input order) that
/// mentioned this place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub value: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// Sorted, deduplicated suggestions. Immutable once built; rebuild from the
/// full record set when the data changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationIndex {
    entries: Vec<LocationSuggestion>,
}

impl LocationIndex {
    /// Builds the index from `records`, in input order.
    ///
    /// Only geolocated clubs contribute. For each one the town, the county,
    /// the full postcode and the postcode's outward code (text before the
    /// first space) are inserted unless their lowercase form is already
    /// present. The result is sorted by display value in locale order.
    ///
    /// # Examples
    /// ```rust
    /// use golfdb_core::{ClubRecord, LocationIndex};
    ///
    /// let club = ClubRecord {
    ///     name: "Alpha GC".into(),
    ///     town: Some("Leeds".into()),
    ///     postcode: Some("LS1 2AB".into()),
    ///     latitude: Some(53.8),
    ///     longitude: Some(-1.5),
    ///     ..Default::default()
    /// };
    /// let index = LocationIndex::build(&[club]);
    /// let values: Vec<_> = index.entries().iter().map(|s| s.value.as_str()).collect();
    /// assert_eq!(values, ["Leeds", "LS1", "LS1 2AB"]);
    /// ```
    pub fn build(records: &[ClubRecord]) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();

        let mut insert = |kind: LocationKind, value: &str, coordinate: Coordinate| {
            if value.is_empty() {
                return;
            }
            if seen.insert(lower(value)) {
                entries.push(LocationSuggestion {
                    kind,
                    value: value.to_owned(),
                    coordinate,
                });
            }
        };

        for club in records {
            let Some(coordinate) = club.coordinate() else {
                continue;
            };

            if let Some(town) = club.town.as_deref() {
                insert(LocationKind::Town, town, coordinate);
            }
            if let Some(county) = club.county.as_deref() {
                insert(LocationKind::County, county, coordinate);
            }
            if let Some(postcode) = club.postcode.as_deref() {
                insert(LocationKind::Postcode, postcode, coordinate);
                let area = postcode.split(' ').next().unwrap_or(postcode);
                insert(LocationKind::Postcode, area, coordinate);
            }
        }

        entries.sort_by_cached_key(|s| CollationKey::new(&s.value));
        tracing::debug!(count = entries.len(), "built location suggestions");
        LocationIndex { entries }
    }

    /// All suggestions in display order.
    pub fn entries(&self) -> &[LocationSuggestion] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Autocomplete: see [`suggest`].
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&LocationSuggestion> {
        suggest(query, &self.entries, limit)
    }

    /// Exact lookup: see [`lookup`].
    pub fn lookup(&self, input: &str) -> Option<&LocationSuggestion> {
        lookup(input, &self.entries)
    }

    /// Coordinate of the place exactly named by `input`, if any.
    pub fn resolve(&self, input: &str) -> Option<Coordinate> {
        self.lookup(input).map(|s| s.coordinate)
    }

    /// Case-sensitive display-value match, as produced by a dropdown click.
    pub fn find_value(&self, value: &str) -> Option<&LocationSuggestion> {
        self.entries.iter().find(|s| s.value == value)
    }
}

/// Minimum number of characters before suggestions are offered.
pub const MIN_SUGGEST_CHARS: usize = 2;

/// Case-insensitive prefix matches of `query` against `suggestions`,
/// preserving their order, at most `limit` of them.
///
/// Returns nothing for queries shorter than [`MIN_SUGGEST_CHARS`] after
/// trimming. The match itself uses the query as typed, so a trailing space
/// narrows `"ls1 "` to full postcodes of that area. There is no fuzzy or
/// substring matching here.
pub fn suggest<'a>(
    query: &str,
    suggestions: &'a [LocationSuggestion],
    limit: usize,
) -> Vec<&'a LocationSuggestion> {
    if query.trim().chars().count() < MIN_SUGGEST_CHARS {
        return Vec::new();
    }
    let q = lower(query);
    suggestions
        .iter()
        .filter(|s| lower(&s.value).starts_with(&q))
        .take(limit)
        .collect()
}

/// The suggestion whose display value equals `input` case-insensitively
/// (surrounding whitespace ignored). Prefixes never match.
pub fn lookup<'a>(input: &str, suggestions: &'a [LocationSuggestion]) -> Option<&'a LocationSuggestion> {
    let q = input.trim();
    if q.is_empty() {
        return None;
    }
    let q = lower(q);
    suggestions.iter().find(|s| lower(&s.value) == q)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(town: &str, county: &str, postcode: &str, lat: f64, lng: f64) -> ClubRecord {
        ClubRecord {
            name: format!("{town} GC"),
            town: (!town.is_empty()).then(|| town.to_owned()),
            county: (!county.is_empty()).then(|| county.to_owned()),
            postcode: (!postcode.is_empty()).then(|| postcode.to_owned()),
            latitude: Some(lat),
            longitude: Some(lng),
            ..Default::default()
        }
    }

    fn values(index: &LocationIndex) -> Vec<&str> {
        index.entries().iter().map(|s| s.value.as_str()).collect()
    }

    #[test]
    fn builds_town_county_postcode_and_area() {
        let index = LocationIndex::build(&[club("Leeds", "West Yorkshire", "LS1 2AB", 53.8, -1.5)]);
        assert_eq!(values(&index), ["Leeds", "LS1", "LS1 2AB", "West Yorkshire"]);
        assert_eq!(index.entries()[0].kind, LocationKind::Town);
        assert_eq!(index.entries()[1].kind, LocationKind::Postcode);
        assert_eq!(index.entries()[3].kind, LocationKind::County);
    }

    #[test]
    fn first_seen_coordinate_wins_case_insensitively() {
        let index = LocationIndex::build(&[
            club("Leeds", "", "", 53.8, -1.5),
            club("LEEDS", "", "", 10.0, 10.0),
        ]);
        assert_eq!(index.len(), 1);
        let leeds = &index.entries()[0];
        assert_eq!(leeds.value, "Leeds");
        assert_eq!(leeds.coordinate.latitude, 53.8);
    }

    #[test]
    fn skips_clubs_without_coordinates() {
        let mut c = club("Ayr", "Ayrshire", "KA7 4LB", 55.4, -4.6);
        c.longitude = None;
        assert!(LocationIndex::build(&[c]).is_empty());
    }

    #[test]
    fn postcode_without_space_is_its_own_area() {
        let index = LocationIndex::build(&[club("", "", "EH1", 55.95, -3.19)]);
        assert_eq!(values(&index), ["EH1"]);
    }

    #[test]
    fn build_is_deterministic() {
        let records = vec![
            club("Bath", "Somerset", "BA2 6JG", 51.37, -2.33),
            club("Ayr", "Ayrshire", "KA7 4LB", 55.45, -4.62),
            club("bath", "Avon", "BA1 2AA", 51.38, -2.36),
        ];
        assert_eq!(LocationIndex::build(&records), LocationIndex::build(&records));
    }

    #[test]
    fn suggest_requires_two_characters() {
        let index = LocationIndex::build(&[club("Leeds", "", "LS1 2AB", 53.8, -1.5)]);
        assert!(index.suggest("", 10).is_empty());
        assert!(index.suggest("l", 10).is_empty());
        assert!(index.suggest("  l  ", 10).is_empty());
        assert_eq!(index.suggest("le", 10).len(), 1);
    }

    #[test]
    fn suggest_is_prefix_only_and_ordered() {
        let index = LocationIndex::build(&[
            club("Leeds", "", "LS1 2AB", 53.8, -1.5),
            club("Leek", "Staffordshire", "ST13 5RE", 53.1, -2.0),
            club("Sleaford", "", "", 53.0, -0.4),
        ]);
        let got: Vec<_> = index.suggest("LE", 10).iter().map(|s| s.value.as_str()).collect();
        assert_eq!(got, ["Leeds", "Leek"]);

        let got: Vec<_> = index.suggest("ls", 10).iter().map(|s| s.value.as_str()).collect();
        assert_eq!(got, ["LS1", "LS1 2AB"]);

        assert_eq!(index.suggest("le", 1).len(), 1);
    }

    #[test]
    fn trailing_space_is_part_of_the_prefix() {
        let index = LocationIndex::build(&[
            club("", "", "LS1 2AB", 53.8, -1.5),
            club("", "", "LS10 1AA", 53.77, -1.53),
        ]);
        let got: Vec<_> = index.suggest("ls1 ", 10).iter().map(|s| s.value.as_str()).collect();
        assert_eq!(got, ["LS1 2AB"]);

        let got: Vec<_> = index.suggest("ls1", 10).iter().map(|s| s.value.as_str()).collect();
        assert_eq!(got, ["LS1", "LS1 2AB", "LS10", "LS10 1AA"]);

        // Leading whitespace still counts against the match.
        assert!(index.suggest(" ls1", 10).is_empty());
    }

    #[test]
    fn lookup_is_exact_not_prefix() {
        let index = LocationIndex::build(&[club("Leeds", "", "", 53.8, -1.5)]);
        assert_eq!(
            index.resolve("leeds"),
            Some(Coordinate {
                latitude: 53.8,
                longitude: -1.5
            })
        );
        assert!(index.resolve(" LEEDS ").is_some());
        assert_eq!(index.resolve("lee"), None);
        assert_eq!(index.resolve(""), None);
    }

    #[test]
    fn find_value_is_case_sensitive() {
        let index = LocationIndex::build(&[club("Leeds", "", "", 53.8, -1.5)]);
        assert!(index.find_value("Leeds").is_some());
        assert!(index.find_value("leeds").is_none());
    }

    #[test]
    fn suggestion_serializes_like_the_page_expects() {
        let index = LocationIndex::build(&[club("Leeds", "", "", 53.8, -1.5)]);
        let v = serde_json::to_value(&index.entries()[0]).unwrap();
        assert_eq!(v["type"], "town");
        assert_eq!(v["value"], "Leeds");
        assert_eq!(v["latitude"], 53.8);
        assert_eq!(v["longitude"], -1.5);
    }
}
