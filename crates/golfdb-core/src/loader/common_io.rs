// crates/golfdb-core/src/loader/common_io.rs
use crate::error::{ClubDbError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// True for `*.gz` paths.
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`. A missing file maps to [`ClubDbError::NotFound`].
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        ClubDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(ClubDbError::Unsupported(format!(
            "{} is gzip-compressed; enable the `compact` feature",
            path.display()
        )))
    }
}

/// `clubs_index.json` -> `clubs_index.json.bin` (or `.comp.bin`).
pub fn get_cache_path(json_path: &Path, suffix: &str) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "clubs".to_owned());
    json_path.with_file_name(format!("{filename}{suffix}"))
}
