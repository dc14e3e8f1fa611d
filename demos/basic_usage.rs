//! Basic usage example for golfdb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled club directory (with its binary cache)
//! - Autocomplete and resolve a place name
//! - Run the search box flow and read the outcome

use golfdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== golfdb-rs Basic Usage Example ===\n");

    println!("Loading club directory...");
    let db = ClubDb::load()?;
    let stats = db.stats();
    println!(
        "✓ {} clubs loaded ({} with coordinates, {} places indexed)\n",
        stats.clubs, stats.geolocated, stats.suggestions
    );

    println!("--- Example 1: Autocomplete ---");
    for query in ["le", "st", "ll3", "s"] {
        let hits = db.suggest(query);
        println!("{query:?}: {} suggestion(s)", hits.len());
        for s in hits {
            println!("  {:<8} {}", s.kind.as_str(), s.value);
        }
    }
    println!();

    println!("--- Example 2: Resolve a place ---");
    match db.resolve("  st andrews ") {
        Some(c) => println!("St Andrews is at {:.4}, {:.4}", c.latitude, c.longitude),
        None => println!("St Andrews is not in the index"),
    }
    println!();

    println!("--- Example 3: Search box ---");
    for input in ["Leeds", "royal", "Conwy", "nowhere"] {
        let outcome = db.search(input, RegionFilter::All);
        let kind = if outcome.is_ranked() { "by distance" } else { "text match" };
        println!("{input:?}: {} club(s), {kind}", outcome.len());
        if let SearchOutcome::Nearby { clubs, .. } = &outcome {
            for hit in clubs.iter().take(3) {
                println!("  {:>6.1} mi  {}", hit.distance, hit.club.name());
            }
        } else {
            for club in outcome.clubs().into_iter().take(3) {
                println!("  {}", club.name());
            }
        }
    }

    Ok(())
}
