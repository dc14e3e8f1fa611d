// crates/golfdb-core/src/model/search.rs
use super::club::{ClubRecord, RankedClub, Region, RegionFilter};
use super::db::ClubDb;
use crate::common::{Coordinate, DbStats};
use crate::index::LocationSuggestion;
use crate::search;
use crate::traits::ClubSearch;

impl ClubSearch for ClubDb {
    fn stats(&self) -> DbStats {
        let mut stats = DbStats {
            clubs: self.clubs.len(),
            suggestions: self.index.len(),
            ..DbStats::default()
        };
        for club in &self.clubs {
            if club.is_geolocated() {
                stats.geolocated += 1;
            }
            match club.region {
                Some(Region::England) => stats.england += 1,
                Some(Region::Scotland) => stats.scotland += 1,
                Some(Region::Wales) => stats.wales += 1,
                None => stats.unassigned += 1,
            }
        }
        stats
    }

    fn find_nearby(&self, origin: Coordinate, region: RegionFilter) -> Vec<RankedClub<'_>> {
        search::find_nearby(origin, &self.clubs, region, self.config.nearby_limit)
    }

    fn find_within_radius(
        &self,
        origin: Coordinate,
        radius_miles: f64,
        region: RegionFilter,
    ) -> Vec<RankedClub<'_>> {
        search::find_within_radius(
            origin,
            radius_miles,
            &self.clubs,
            region,
            self.config.nearby_limit,
        )
    }

    fn find_within_default_radius(
        &self,
        origin: Coordinate,
        region: RegionFilter,
    ) -> Vec<RankedClub<'_>> {
        self.find_within_radius(origin, self.config.default_radius_miles, region)
    }

    fn text_search(&self, query: &str, region: RegionFilter) -> Vec<&ClubRecord> {
        search::text_search(query, &self.clubs, region, self.config.text_limit)
    }

    fn suggest(&self, query: &str) -> Vec<&LocationSuggestion> {
        self.index.suggest(query, self.config.suggestion_limit)
    }

    fn resolve(&self, input: &str) -> Option<Coordinate> {
        self.index.resolve(input)
    }

    fn clubs_in_region(&self, region: RegionFilter) -> Vec<&ClubRecord> {
        search::clubs_in_region(&self.clubs, region)
    }
}
