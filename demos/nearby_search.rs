//! Nearby search example for golfdb-rs
//!
//! Ranks clubs around a few fixed points, with and without a region filter
//! and a radius, and tunes the result limits through `SearchConfig`.

use golfdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== golfdb-rs Nearby Search Example ===\n");

    let config = SearchConfig::builder().limit(5).build();
    let db = ClubDb::load_cached(ClubDb::default_dataset_path())?.with_config(config);

    let edinburgh = Coordinate::new(55.9533, -3.1883)?;
    let cardiff = Coordinate::new(51.4816, -3.1791)?;

    println!("--- Closest to Edinburgh, any region ---");
    for hit in db.find_nearby(edinburgh, RegionFilter::All) {
        println!("{:>6.1} mi  {}", hit.distance, hit.club.name());
    }
    println!();

    println!("--- Closest to Cardiff, Wales only ---");
    for hit in db.find_nearby(cardiff, Region::Wales.into()) {
        println!("{:>6.1} mi  {}", hit.distance, hit.club.name());
    }
    println!();

    println!("--- Within 50 miles of Edinburgh ---");
    let close = db.find_within_radius(edinburgh, 50.0, RegionFilter::All);
    if close.is_empty() {
        println!("Nothing that close.");
    }
    for hit in close {
        println!("{:>6.1} mi  {}", hit.distance, hit.club.name());
    }
    println!();

    println!("--- Distances between two points ---");
    println!("Edinburgh to Cardiff: {:.0} mi", distance(edinburgh, cardiff));

    Ok(())
}
