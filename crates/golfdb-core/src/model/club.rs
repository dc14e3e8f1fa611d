// crates/golfdb-core/src/model/club.rs
use crate::common::Coordinate;
use crate::error::{ClubDbError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The golf federations the directory is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    England,
    Scotland,
    Wales,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::England, Region::Scotland, Region::Wales];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::England => "england",
            Region::Scotland => "scotland",
            Region::Wales => "wales",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ClubDbError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ClubDbError::InvalidRegion(s.to_owned()))
    }
}

/// Region restriction supplied by the caller. `All` is the "no restriction"
/// sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    /// True when a record tagged `region` passes this filter. Untagged records
    /// only pass `All`.
    #[inline]
    pub fn matches(&self, region: Option<Region>) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(wanted) => region == Some(*wanted),
        }
    }
}

impl From<Region> for RegionFilter {
    fn from(region: Region) -> Self {
        RegionFilter::Only(region)
    }
}

impl FromStr for RegionFilter {
    type Err = ClubDbError;

    /// Parses `all` (or an empty string) and the region names,
    /// ASCII case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(RegionFilter::All)
        } else {
            s.parse().map(RegionFilter::Only)
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => f.write_str("all"),
            RegionFilter::Only(r) => r.fmt(f),
        }
    }
}

/// One golf club's static descriptive and geographic data.
///
/// `latitude`/`longitude` are either both present and valid, or both `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubRecord {
    pub id: Option<String>,
    pub name: String,
    pub region: Option<Region>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub full_address: Option<String>,
    pub town: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub image: Option<String>,
    pub holes: Option<u32>,
}

impl ClubRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The club position, if both coordinates are known.
    #[inline]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    pub fn is_geolocated(&self) -> bool {
        self.coordinate().is_some()
    }

    pub fn town(&self) -> &str {
        self.town.as_deref().unwrap_or("")
    }

    pub fn county(&self) -> &str {
        self.county.as_deref().unwrap_or("")
    }

    pub fn postcode(&self) -> &str {
        self.postcode.as_deref().unwrap_or("")
    }

    /// Fields consulted by free-text search, in a fixed order.
    pub(crate) fn searchable_fields(&self) -> [Option<&str>; 6] {
        [
            Some(self.name.as_str()),
            self.address.as_deref(),
            self.full_address.as_deref(),
            self.town.as_deref(),
            self.postcode.as_deref(),
            self.county.as_deref(),
        ]
    }
}

/// A [`ClubRecord`] with its distance in miles from a query point.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedClub<'a> {
    #[serde(flatten)]
    pub club: &'a ClubRecord,
    pub distance: f64,
}
