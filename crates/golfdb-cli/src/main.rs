//! golfdb: command-line front end for golfdb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ golfdb stats
//!
//! - Autocomplete a place
//!   $ golfdb suggest lee
//!
//! - Clubs near a coordinate, optionally within a radius
//!   $ golfdb nearby --lat 53.8 --lng -1.5
//!   $ golfdb --region scotland nearby --lat 56.3 --lng -2.8 --radius 25
//!   $ golfdb nearby --lat 53.8 --lng -1.5 --radius   # default 10 miles
//!
//! - Search box behaviour (place name or free text)
//!   $ golfdb search Leeds
//!   $ golfdb --json search "royal"
//!
//! - Pre-build the binary cache
//!   $ golfdb build data/clubs_index.comp.bin
//!
//! Data source
//! -----------
//!
//! Without `--input` the bundled `clubs_index.json` is used and a binary
//! cache is written next to it for faster later runs. `GOLFDB_DATA` sets
//! the input path from the environment. Set `RUST_LOG=golfdb_core=debug`
//! for loader and index diagnostics on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use golfdb_core::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    let db = open_db(&args)?.with_config(search_config(args.limit));
    let region = args.region;
    tracing::debug!(clubs = db.club_count(), ?region, "club directory ready");

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                return print_json(&stats);
            }
            println!("Database statistics:");
            println!("  Clubs: {}", stats.clubs);
            println!("  Geolocated: {}", stats.geolocated);
            println!("  Suggestions: {}", stats.suggestions);
            println!("  England: {}", stats.england);
            println!("  Scotland: {}", stats.scotland);
            println!("  Wales: {}", stats.wales);
            if stats.unassigned > 0 {
                println!("  No region: {}", stats.unassigned);
            }
        }

        Commands::Suggest { prefix } => {
            let hits = db.suggest(&prefix);
            if args.json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("No places start with: {prefix}");
            }
            for s in hits {
                println!("{:<8} {}", s.kind.as_str(), s.value);
            }
        }

        Commands::Resolve { place } => match db.resolve(&place) {
            Some(c) if args.json => return print_json(&c),
            Some(c) => println!("{place}: {:.5}, {:.5}", c.latitude, c.longitude),
            None => eprintln!("Unknown place: {place}"),
        },

        Commands::Nearby { lat, lng, radius } => {
            let origin = Coordinate::new(lat, lng)?;
            let hits = match radius {
                Some(Some(miles)) => db.find_within_radius(origin, miles, region),
                Some(None) => db.find_within_default_radius(origin, region),
                None => db.find_nearby(origin, region),
            };
            if args.json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("No clubs found near {lat}, {lng}");
            }
            print_ranked(&hits);
        }

        Commands::Search { query } => {
            let outcome = db.search(&query, region);
            if args.json {
                return print_json(&outcome);
            }
            if outcome.is_empty() {
                println!("No clubs found. Try a different search.");
            }
            match &outcome {
                SearchOutcome::Nearby { clubs, .. } => print_ranked(clubs),
                SearchOutcome::Text { clubs } => print_clubs(clubs),
            }
        }

        Commands::Text { query } => {
            let hits = db.text_search(&query, region);
            if args.json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("No clubs match: {query}");
            }
            print_clubs(&hits);
        }

        Commands::Build { out } => {
            db.write_binary(&out)
                .with_context(|| format!("writing cache to {}", out.display()))?;
            println!("Wrote {} clubs to {}", db.club_count(), out.display());
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_db(args: &CliArgs) -> anyhow::Result<ClubDb> {
    #[cfg(feature = "fetch")]
    if let Some(url) = &args.url {
        return ClubDb::load_from_url(url).with_context(|| format!("fetching {url}"));
    }

    match &args.input {
        Some(path) => ClubDb::load_from_path(path)
            .with_context(|| format!("loading {}", path.display())),
        None => {
            let path = ClubDb::default_dataset_path();
            ClubDb::load_cached(&path).with_context(|| format!("loading {}", path.display()))
        }
    }
}

fn search_config(limit: Option<usize>) -> SearchConfig {
    match limit {
        Some(n) => SearchConfig::builder().limit(n).suggestion_limit(n).build(),
        None => SearchConfig::default(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_ranked(hits: &[RankedClub<'_>]) {
    for hit in hits {
        println!("{:>6.1} mi  {}", hit.distance, describe(hit.club));
    }
}

fn print_clubs(clubs: &[&ClubRecord]) {
    for club in clubs {
        println!("{}", describe(club));
    }
}

fn describe(club: &ClubRecord) -> String {
    let place = [club.town(), club.postcode()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let region = club.region.map(|r| r.as_str()).unwrap_or("-");
    if place.is_empty() {
        format!("{} [{region}]", club.name())
    } else {
        format!("{} ({place}) [{region}]", club.name())
    }
}
