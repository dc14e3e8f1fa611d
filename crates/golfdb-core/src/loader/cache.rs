// crates/golfdb-core/src/loader/cache.rs

//! Binary cache of the parsed club list (bincode, gzip with `compact`).
//!
//! Only the records are stored; the location index is rebuilt on load.

use super::common_io;
use crate::error::{ClubDbError, Result};
use crate::model::{ClubDb, ClubRecord};
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".comp.bin";

/// Bumped whenever [`ClubRecord`] changes shape.
const CACHE_VERSION: u32 = 1;

/// Refuse to decode anything larger than this (data bombs).
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Serialize)]
struct CacheFileRef<'a> {
    version: u32,
    clubs: &'a [ClubRecord],
}

#[derive(Deserialize)]
struct CacheFile {
    version: u32,
    clubs: Vec<ClubRecord>,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(CACHE_LIMIT)
        .allow_trailing_bytes()
}

impl ClubDb {
    /// Serializes the records into the cache format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let payload = options().serialize(&CacheFileRef {
            version: CACHE_VERSION,
            clubs: &self.clubs,
        })?;

        #[cfg(feature = "compact")]
        {
            use flate2::{write::GzEncoder, Compression};
            use std::io::Write;

            let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
            encoder.write_all(&payload)?;
            Ok(encoder.finish()?)
        }

        #[cfg(not(feature = "compact"))]
        {
            Ok(payload)
        }
    }

    /// Reconstructs the database from [`ClubDb::to_bytes`] output.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        #[cfg(feature = "compact")]
        let decoded = {
            use flate2::read::GzDecoder;
            use std::io::Read;

            let mut out = Vec::new();
            GzDecoder::new(data)
                .take(CACHE_LIMIT)
                .read_to_end(&mut out)?;
            out
        };
        #[cfg(not(feature = "compact"))]
        let decoded = data.to_vec();

        let file: CacheFile = options().deserialize(&decoded)?;
        if file.version != CACHE_VERSION {
            return Err(ClubDbError::Unsupported(format!(
                "binary cache version {} (expected {CACHE_VERSION})",
                file.version
            )));
        }
        Ok(ClubDb::new(file.clubs))
    }

    /// Writes the binary cache to `path`.
    pub fn write_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_bytes()?)?;
        tracing::debug!(path = %path.display(), clubs = self.club_count(), "wrote binary cache");
        Ok(())
    }

    /// Loads a cache written by [`ClubDb::write_binary`].
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            ClubDbError::NotFound(format!("Binary cache not found at {}: {}", path.display(), e))
        })?;
        Self::from_bytes(&data)
    }

    /// Where [`ClubDb::load_cached`] keeps the cache for `json_path`.
    pub fn cache_path_for(json_path: impl AsRef<Path>) -> PathBuf {
        common_io::get_cache_path(json_path.as_ref(), CACHE_SUFFIX)
    }

    /// Loads `json_path`, going through a sibling binary cache.
    ///
    /// 1. A cache at least as new as the JSON is used when it decodes.
    /// 2. Otherwise the JSON is parsed and the cache rewritten.
    ///    Failing to write the cache is logged, not returned.
    pub fn load_cached(json_path: impl AsRef<Path>) -> Result<Self> {
        let json_path = json_path.as_ref();
        let bin_path = Self::cache_path_for(json_path);

        if cache_is_fresh(json_path, &bin_path) {
            match Self::load_binary(&bin_path) {
                Ok(db) => {
                    tracing::debug!(path = %bin_path.display(), "using binary cache");
                    return Ok(db);
                }
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable binary cache"),
            }
        }

        let db = Self::load_json(json_path)?;
        if let Err(e) = db.write_binary(&bin_path) {
            tracing::warn!(error = %e, path = %bin_path.display(), "could not write binary cache");
        }
        Ok(db)
    }
}

fn cache_is_fresh(json_path: &Path, bin_path: &Path) -> bool {
    let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(bin_path), modified(json_path)) {
        (Some(bin), Some(json)) => bin >= json,
        // Cache without its source is still usable.
        (Some(_), None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn db() -> ClubDb {
        ClubDb::new(vec![ClubRecord {
            id: Some("7".into()),
            name: "Alpha GC".into(),
            region: Some(Region::England),
            town: Some("Leeds".into()),
            latitude: Some(53.8),
            longitude: Some(-1.5),
            holes: Some(18),
            ..Default::default()
        }])
    }

    #[test]
    fn bytes_round_trip_rebuilds_index() {
        let original = db();
        let restored = ClubDb::from_bytes(&original.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.clubs(), original.clubs());
        assert_eq!(restored.index(), original.index());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = ClubDb::from_bytes(b"definitely not a cache").unwrap_err();
        assert!(err.is_load_failure());
    }
}
