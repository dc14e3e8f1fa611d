// crates/golfdb-core/src/loader/remote.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'fetch' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "fetch")]

use crate::error::Result;
use crate::model::ClubDb;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

impl ClubDb {
    /// Downloads a club index (same JSON shape as on disk) and builds the
    /// database. HTTP failures and non-2xx statuses are load errors.
    pub fn load_from_url(url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        let bytes = client.get(url).send()?.error_for_status()?.bytes()?;
        let db = Self::from_json_slice(&bytes)?;
        tracing::info!(clubs = db.club_count(), url, "loaded club index from remote source");
        Ok(db)
    }
}
