// crates/golfdb-core/src/model/db.rs
use super::club::ClubRecord;
use crate::config::SearchConfig;
use crate::index::{LocationIndex, LocationSuggestion};

/// The loaded directory: club records plus the location index derived from
/// them.
///
/// Both are built once and never mutated. Callers own the value and pass it
/// (or borrow it) wherever searches happen; there is no hidden shared state,
/// so independent sessions can hold independent databases.
#[derive(Clone, Debug, Default)]
pub struct ClubDb {
    pub(crate) clubs: Vec<ClubRecord>,
    pub(crate) index: LocationIndex,
    pub(crate) config: SearchConfig,
}

impl ClubDb {
    /// Takes ownership of `clubs` and builds the location index.
    pub fn new(clubs: Vec<ClubRecord>) -> Self {
        let index = LocationIndex::build(&clubs);
        ClubDb {
            clubs,
            index,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the result limits used by the convenience search methods.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// All club records, in source order.
    pub fn clubs(&self) -> &[ClubRecord] {
        &self.clubs
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    /// Sorted location suggestions.
    pub fn suggestions(&self) -> &[LocationSuggestion] {
        self.index.entries()
    }

    pub fn club_count(&self) -> usize {
        self.clubs.len()
    }

    /// Looks a club up by its federation id.
    pub fn find_club_by_id(&self, id: &str) -> Option<&ClubRecord> {
        let id = id.trim();
        self.clubs.iter().find(|c| c.id.as_deref() == Some(id))
    }
}

impl From<Vec<ClubRecord>> for ClubDb {
    fn from(clubs: Vec<ClubRecord>) -> Self {
        ClubDb::new(clubs)
    }
}
