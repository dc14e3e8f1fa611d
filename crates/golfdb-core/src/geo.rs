// crates/golfdb-core/src/geo.rs
use crate::common::Coordinate;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Approximate miles per degree of latitude.
pub const MILES_PER_DEGREE: f64 = 69.0;

/// Great-circle distance in miles between two points (haversine, `atan2`
/// form).
///
/// Returns exactly `0.0` for identical points and is symmetric in its
/// arguments.
///
/// # Examples
/// ```rust
/// use golfdb_core::{geo::distance, Coordinate};
///
/// let london = Coordinate { latitude: 51.5074, longitude: -0.1278 };
/// let edinburgh = Coordinate { latitude: 55.9533, longitude: -3.1883 };
/// let d = distance(london, edinburgh);
/// assert!((d - 332.0).abs() < 5.0);
/// ```
#[inline]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Axis-aligned latitude/longitude box used as a cheap prefilter before the
/// exact haversine check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Box enclosing every point within `radius_miles` of `center`.
    ///
    /// Near the poles the longitude span degenerates; it is then widened to
    /// the whole globe.
    pub fn around(center: Coordinate, radius_miles: f64) -> Self {
        let lat_delta = radius_miles / MILES_PER_DEGREE;
        let cos_lat = center.latitude.to_radians().cos().abs();
        let lng_delta = if cos_lat < 1e-6 {
            180.0
        } else {
            (radius_miles / (MILES_PER_DEGREE * cos_lat)).min(180.0)
        };

        BoundingBox {
            min_lat: center.latitude - lat_delta,
            max_lat: center.latitude + lat_delta,
            min_lng: center.longitude - lng_delta,
            max_lng: center.longitude + lng_delta,
        }
    }

    /// Point-in-box test. Handles boxes that cross the antimeridian.
    #[inline]
    pub fn contains(&self, p: Coordinate) -> bool {
        if p.latitude < self.min_lat || p.latitude > self.max_lat {
            return false;
        }
        if self.max_lng - self.min_lng >= 360.0 {
            return true;
        }
        let lng = p.longitude;
        lng >= self.min_lng && lng <= self.max_lng
            || lng + 360.0 >= self.min_lng && lng + 360.0 <= self.max_lng
            || lng - 360.0 >= self.min_lng && lng - 360.0 <= self.max_lng
    }
}
