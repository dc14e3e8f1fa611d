//! Error handling example for golfdb-rs
//!
//! A failed load, an unavailable device location and an empty result are
//! three different situations; this shows how each one surfaces.

use golfdb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== golfdb-rs Error Handling Example ===\n");

    println!("--- Example 1: Loading a missing dataset ---");
    match ClubDb::load_from_path("/definitely/missing/clubs_index.json") {
        Ok(_) => println!("unexpectedly loaded"),
        Err(e) if e.is_load_failure() => println!("✗ load failed, offer a retry: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    let db = ClubDb::load()?;

    println!("--- Example 2: Device location unavailable ---");
    for reason in [
        GeolocationError::Denied,
        GeolocationError::Timeout,
        GeolocationError::Unsupported,
    ] {
        match db.search_near(Err(reason), RegionFilter::All) {
            Ok(outcome) => println!("found {} clubs", outcome.len()),
            Err(ClubDbError::LocationUnavailable(why)) => {
                println!("✗ Unable to get your location ({why})")
            }
            Err(e) => return Err(e),
        }
    }
    println!();

    println!("--- Example 3: Empty results are not errors ---");
    let outcome = db.search("zzzz-no-such-club", RegionFilter::All);
    if outcome.is_empty() {
        println!("No clubs found. Try a different search.");
    }
    println!();

    println!("--- Example 4: Invalid input ---");
    if let Err(e) = Coordinate::new(123.0, 0.0) {
        println!("✗ {e}");
    }
    if let Err(e) = "ulster".parse::<RegionFilter>() {
        println!("✗ {e}");
    }

    Ok(())
}
