// crates/golfdb-core/src/model/mod.rs
pub mod club;
pub mod convert;
pub mod db;
pub mod search;

pub use club::{ClubRecord, RankedClub, Region, RegionFilter};
pub use db::ClubDb;
