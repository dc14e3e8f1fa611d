// crates/golfdb-core/src/lib.rs

//! # golfdb-core
//!
//! Nearest-club search for a golf club directory.
//!
//! - [`LocationIndex`]: deduplicated town / county / postcode entries for
//!   autocomplete and for turning typed text into a coordinate.
//! - [`search`]: haversine ranking, radius search and free-text search.
//! - [`ClubDb`]: the loaded records plus their index, owned by the caller.
//!
//! ```rust
//! use golfdb_core::prelude::*;
//!
//! let db = ClubDb::from_json_str(r#"{"clubs": [
//!     {"name": "Alpha GC", "town": "Leeds", "postcode": "LS1 2AB",
//!      "latitude": 53.8, "longitude": -1.5, "region": "england"},
//!     {"name": "Beta GC", "town": "Bristol", "postcode": "BS1 3CD",
//!      "latitude": 51.45, "longitude": -2.6, "region": "england"}
//! ]}"#)?;
//!
//! let leeds = db.resolve("leeds").expect("known town");
//! let nearest = db.find_nearby(leeds, RegionFilter::All);
//! assert_eq!(nearest[0].club.name(), "Alpha GC");
//! # Ok::<(), golfdb_core::ClubDbError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod geo;
pub mod index;
pub mod loader;
pub mod model;
pub mod query;
pub mod search;
pub mod text;
pub mod traits;
#[doc(hidden)]
pub mod raw;

pub use crate::common::{Coordinate, DbStats};
pub use crate::config::SearchConfig;
pub use crate::error::{ClubDbError, GeolocationError, Result};
pub use crate::index::{LocationIndex, LocationKind, LocationSuggestion};
pub use crate::model::{ClubDb, ClubRecord, RankedClub, Region, RegionFilter};
pub use crate::query::SearchOutcome;
pub use crate::traits::ClubSearch;

/// Common types and traits for examples and downstream crates.
pub mod prelude {
    pub use crate::common::{Coordinate, DbStats};
    pub use crate::config::SearchConfig;
    pub use crate::error::{ClubDbError, GeolocationError, Result};
    pub use crate::geo::distance;
    pub use crate::index::{LocationIndex, LocationKind, LocationSuggestion};
    pub use crate::model::{ClubDb, ClubRecord, RankedClub, Region, RegionFilter};
    pub use crate::query::SearchOutcome;
    pub use crate::traits::ClubSearch;
}
