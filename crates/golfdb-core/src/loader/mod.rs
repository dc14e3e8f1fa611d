// crates/golfdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary cache vs JSON).

use crate::error::Result;
use crate::model::ClubDb;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub mod cache;
pub mod common_io;
mod json;
#[cfg(feature = "fetch")]
mod remote;

pub use cache::CACHE_SUFFIX;

/// Environment variable overriding the default dataset path.
pub const DATA_ENV_VAR: &str = "GOLFDB_DATA";

// Read-only, loaded at most once per process.
static CLUB_DB_CACHE: OnceCell<ClubDb> = OnceCell::new();

impl ClubDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "clubs_index.json"
    }

    /// `$GOLFDB_DATA` if set, else `data/clubs_index.json` in this crate.
    pub fn default_dataset_path() -> PathBuf {
        match std::env::var_os(DATA_ENV_VAR) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => Self::default_data_dir().join(Self::default_dataset_filename()),
        }
    }

    /// The default dataset, parsed on first use and shared afterwards.
    ///
    /// A failed load is returned to the caller and retried on the next call.
    pub fn load() -> Result<&'static ClubDb> {
        CLUB_DB_CACHE.get_or_try_init(|| Self::load_cached(Self::default_dataset_path()))
    }

    /// Loads a dataset, choosing the parser from the file name:
    /// `*.bin` is a binary cache, anything else is (possibly gzipped) JSON.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_binary = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("bin"));
        if is_binary {
            Self::load_binary(path)
        } else {
            Self::load_json(path)
        }
    }
}
