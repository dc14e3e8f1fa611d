// crates/golfdb-core/src/common.rs
use crate::error::{ClubDbError, Result};
use serde::{Deserialize, Serialize};

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate after checking it is finite and within range.
    ///
    /// # Examples
    /// ```rust
    /// use golfdb_core::Coordinate;
    ///
    /// assert!(Coordinate::new(51.5074, -0.1278).is_ok());
    /// assert!(Coordinate::new(91.0, 0.0).is_err());
    /// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::checked(latitude, longitude).ok_or(ClubDbError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }

    /// Like [`Coordinate::new`] but returns `None` instead of an error.
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Coordinate {
            latitude,
            longitude,
        })
    }
}

/// Simple aggregate statistics for the database.
///
/// Returned by [`ClubSearch::stats`](crate::traits::ClubSearch::stats). Counts
/// reflect the loaded, immutable record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub clubs: usize,
    /// Clubs carrying both coordinates (eligible for nearby search).
    pub geolocated: usize,
    pub suggestions: usize,
    pub england: usize,
    pub scotland: usize,
    pub wales: usize,
    /// Clubs whose region tag was missing or not recognised.
    pub unassigned: usize,
}
