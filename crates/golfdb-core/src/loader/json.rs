// crates/golfdb-core/src/loader/json.rs
use super::common_io;
use crate::error::Result;
use crate::model::{convert, ClubDb};
use crate::raw::ClubsFileRaw;
use std::io::Read;
use std::path::Path;

impl ClubDb {
    /// Parses a club index (`{ "clubs": [...] }` or a bare array) and builds
    /// the database.
    ///
    /// The document is parsed completely before anything is built: a
    /// structurally broken file is an error, never a partial database.
    /// Individual bad field values only degrade the affected record.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: ClubsFileRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: ClubsFileRaw = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let raw: ClubsFileRaw = serde_json::from_slice(bytes)?;
        Ok(Self::from_raw(raw))
    }

    /// Loads `clubs_index.json` (or `.json.gz` with the `compact` feature).
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let db = Self::from_json_reader(reader)?;
        tracing::info!(clubs = db.club_count(), path = %path.display(), "loaded club index");
        Ok(db)
    }

    fn from_raw(raw: ClubsFileRaw) -> Self {
        ClubDb::new(convert::from_raw(raw.into_clubs()))
    }
}
