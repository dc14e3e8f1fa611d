// crates/golfdb-core/src/search.rs

//! # Proximity Search
//!
//! Pure functions over an already-loaded club slice. The single
//! implementation of distance ranking shared by the CLI and the browser
//! bindings.

use crate::common::Coordinate;
use crate::geo::{distance, BoundingBox};
use crate::index::{lookup, LocationSuggestion};
use crate::model::{ClubRecord, RankedClub, RegionFilter};
use crate::text::{contains_lower, lower};

/// Geolocated clubs passing `region`, with their distance from `origin`.
fn ranked<'a>(
    origin: Coordinate,
    records: &'a [ClubRecord],
    region: RegionFilter,
) -> impl Iterator<Item = RankedClub<'a>> + 'a {
    records.iter().filter_map(move |club| {
        let at = club.coordinate()?;
        region.matches(club.region).then(|| RankedClub {
            club,
            distance: distance(origin, at),
        })
    })
}

/// Stable ascending sort on distance, then truncate.
fn nearest_first(mut out: Vec<RankedClub<'_>>, limit: usize) -> Vec<RankedClub<'_>> {
    out.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    out.truncate(limit);
    out
}

/// The `limit` clubs closest to `origin`, nearest first.
///
/// Clubs without coordinates are skipped; `region` restricts by tag. Equal
/// distances keep their input order. Never returns more than `limit`
/// entries; an empty input gives an empty result.
pub fn find_nearby(
    origin: Coordinate,
    records: &[ClubRecord],
    region: RegionFilter,
    limit: usize,
) -> Vec<RankedClub<'_>> {
    if limit == 0 {
        return Vec::new();
    }
    nearest_first(ranked(origin, records, region).collect(), limit)
}

/// Like [`find_nearby`] but only clubs within `radius_miles` of `origin`.
///
/// A bounding box rejects far-away clubs before the exact distance check.
/// A negative or non-finite radius matches nothing.
pub fn find_within_radius(
    origin: Coordinate,
    radius_miles: f64,
    records: &[ClubRecord],
    region: RegionFilter,
    limit: usize,
) -> Vec<RankedClub<'_>> {
    if limit == 0 || !radius_miles.is_finite() || radius_miles < 0.0 {
        return Vec::new();
    }
    let bbox = BoundingBox::around(origin, radius_miles);
    let candidates = records.iter().filter_map(|club| {
        let at = club.coordinate()?;
        if !region.matches(club.region) || !bbox.contains(at) {
            return None;
        }
        let d = distance(origin, at);
        (d <= radius_miles).then_some(RankedClub { club, distance: d })
    });
    nearest_first(candidates.collect(), limit)
}

/// Free-text search over name, address, full address, town, postcode and
/// county (case-insensitive substring).
///
/// Unlike [`find_nearby`] this keeps input order and does not need
/// coordinates. A blank query returns the first `limit` clubs of the region.
pub fn text_search<'a>(
    query: &str,
    records: &'a [ClubRecord],
    region: RegionFilter,
    limit: usize,
) -> Vec<&'a ClubRecord> {
    let q = lower(query.trim());
    records
        .iter()
        .filter(|club| region.matches(club.region))
        .filter(|club| {
            q.is_empty()
                || club
                    .searchable_fields()
                    .into_iter()
                    .any(|field| contains_lower(field, &q))
        })
        .take(limit)
        .collect()
}

/// Coordinate of the suggestion exactly named by `input`
/// (case-insensitive). Used to decide between nearby and text search.
pub fn resolve(input: &str, suggestions: &[LocationSuggestion]) -> Option<Coordinate> {
    lookup(input, suggestions).map(|s| s.coordinate)
}

/// Every geolocated club of `region`, in input order (map view).
pub fn clubs_in_region(records: &[ClubRecord], region: RegionFilter) -> Vec<&ClubRecord> {
    records
        .iter()
        .filter(|club| club.is_geolocated() && region.matches(club.region))
        .collect()
}
