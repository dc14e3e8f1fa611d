// crates/golfdb-core/src/model/convert.rs
use super::club::{ClubRecord, Region};
use crate::common::Coordinate;
use crate::raw::ClubRaw;

/// **Standard Converter:** Raw -> ClubRecord.
///
/// Never fails. Records keep their input order; a coordinate pair that is
/// incomplete or out of range is dropped as a whole, and an unrecognised
/// region tag becomes `None`.
pub fn from_raw(raw_clubs: Vec<ClubRaw>) -> Vec<ClubRecord> {
    let mut unknown_regions = 0usize;
    let mut bad_coordinates = 0usize;

    let clubs: Vec<ClubRecord> = raw_clubs
        .into_iter()
        .map(|raw| {
            let region = raw.region.as_deref().and_then(|r| {
                let parsed = r.parse::<Region>().ok();
                if parsed.is_none() {
                    unknown_regions += 1;
                }
                parsed
            });

            let coordinate = match (raw.latitude, raw.longitude) {
                (Some(lat), Some(lng)) => {
                    let c = Coordinate::checked(lat, lng);
                    if c.is_none() {
                        bad_coordinates += 1;
                    }
                    c
                }
                _ => None,
            };

            ClubRecord {
                id: raw.id,
                name: raw.name.unwrap_or_default(),
                region,
                latitude: coordinate.map(|c| c.latitude),
                longitude: coordinate.map(|c| c.longitude),
                address: raw.address,
                full_address: raw.full_address,
                town: raw.town,
                county: raw.county,
                postcode: raw.postcode,
                phone: raw.phone,
                email: raw.email,
                website: raw.website,
                image: raw.image,
                holes: raw.holes,
            }
        })
        .collect();

    if unknown_regions > 0 {
        tracing::warn!(count = unknown_regions, "clubs with unrecognised region tag");
    }
    if bad_coordinates > 0 {
        tracing::warn!(count = bad_coordinates, "clubs with out-of-range coordinates");
    }
    clubs
}
