// crates/golfdb-core/src/traits.rs
use crate::common::{Coordinate, DbStats};
use crate::index::LocationSuggestion;
use crate::model::{ClubRecord, RankedClub, RegionFilter};

/// The search operations available on a loaded directory.
///
/// Implemented by [`ClubDb`](crate::ClubDb), using the limits of its
/// [`SearchConfig`](crate::SearchConfig). The free functions in
/// [`search`](crate::search) and [`index`](crate::index) offer the same
/// operations over plain slices with explicit limits.
pub trait ClubSearch {
    fn stats(&self) -> DbStats;

    /// Nearest clubs to `origin`, closest first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use golfdb_core::{ClubDb, ClubSearch, Coordinate, RegionFilter};
    ///
    /// let db = ClubDb::load().unwrap();
    /// let here = Coordinate::new(53.8, -1.5).unwrap();
    /// for hit in db.find_nearby(here, RegionFilter::All) {
    ///     println!("{:>5.1} mi  {}", hit.distance, hit.club.name());
    /// }
    /// ```
    fn find_nearby(&self, origin: Coordinate, region: RegionFilter) -> Vec<RankedClub<'_>>;

    /// Nearest clubs no further than `radius_miles` from `origin`.
    fn find_within_radius(
        &self,
        origin: Coordinate,
        radius_miles: f64,
        region: RegionFilter,
    ) -> Vec<RankedClub<'_>>;

    /// [`find_within_radius`](ClubSearch::find_within_radius) using the
    /// configured default radius (10 miles unless overridden).
    fn find_within_default_radius(
        &self,
        origin: Coordinate,
        region: RegionFilter,
    ) -> Vec<RankedClub<'_>>;

    /// Case-insensitive substring search, source order.
    fn text_search(&self, query: &str, region: RegionFilter) -> Vec<&ClubRecord>;

    /// Autocomplete entries starting with `query`.
    fn suggest(&self, query: &str) -> Vec<&LocationSuggestion>;

    /// Coordinate of the place exactly named by `input`.
    fn resolve(&self, input: &str) -> Option<Coordinate>;

    /// Every geolocated club of the region (map view).
    fn clubs_in_region(&self, region: RegionFilter) -> Vec<&ClubRecord>;
}
