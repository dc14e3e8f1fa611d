// crates/golfdb-core/src/error.rs
use std::fmt;
use thiserror::Error;

/// Why the platform could not supply a device coordinate.
///
/// Mirrors the failure codes of the browser geolocation API plus the case
/// where the capability is missing altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    /// The user (or a policy) refused access to the device position.
    Denied,
    /// The platform tried but could not determine a position.
    Unavailable,
    /// The platform gave up waiting for a position fix.
    Timeout,
    /// No geolocation capability exists on this platform.
    Unsupported,
}

impl GeolocationError {
    /// Maps a `GeolocationPositionError.code` (1, 2, 3) onto the enum.
    /// Any other code is treated as an unavailable position.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::Denied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Unavailable,
        }
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            GeolocationError::Denied => "permission denied",
            GeolocationError::Unavailable => "position unavailable",
            GeolocationError::Timeout => "timed out",
            GeolocationError::Unsupported => "not supported on this platform",
        };
        f.write_str(reason)
    }
}

/// Errors raised while loading the club dataset or validating caller input.
///
/// An empty search result is never an error; see
/// [`SearchOutcome::is_empty`](crate::query::SearchOutcome::is_empty).
#[derive(Debug, Error)]
pub enum ClubDbError {
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid club dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid binary cache: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "fetch")]
    #[error("failed to fetch club dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("unknown region '{0}' (expected all, england, scotland or wales)")]
    InvalidRegion(String),

    #[error("location unavailable ({0}); search by club name or postcode instead")]
    LocationUnavailable(GeolocationError),

    #[error("{0}")]
    Unsupported(String),
}

impl ClubDbError {
    /// True for failures of the upstream dataset (missing, unreadable or
    /// unparseable). Callers should offer a retry instead of searching.
    pub fn is_load_failure(&self) -> bool {
        match self {
            ClubDbError::NotFound(_)
            | ClubDbError::Io(_)
            | ClubDbError::Json(_)
            | ClubDbError::Bincode(_)
            | ClubDbError::Unsupported(_) => true,
            #[cfg(feature = "fetch")]
            ClubDbError::Fetch(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClubDbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_codes_map_to_variants() {
        assert_eq!(GeolocationError::from_code(1), GeolocationError::Denied);
        assert_eq!(GeolocationError::from_code(2), GeolocationError::Unavailable);
        assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
        assert_eq!(GeolocationError::from_code(42), GeolocationError::Unavailable);
    }

    #[test]
    fn load_failures_are_distinct_from_location_failures() {
        assert!(ClubDbError::NotFound("missing".into()).is_load_failure());
        assert!(!ClubDbError::LocationUnavailable(GeolocationError::Denied).is_load_failure());
        assert!(!ClubDbError::InvalidRegion("mars".into()).is_load_failure());
    }
}
