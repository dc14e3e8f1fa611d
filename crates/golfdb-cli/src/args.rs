use clap::{Parser, Subcommand};
use golfdb_core::RegionFilter;
use std::path::PathBuf;

/// CLI arguments for golfdb
#[derive(Debug, Parser)]
#[command(
    name = "golfdb",
    version,
    about = "Find golf clubs near a town, county or postcode"
)]
pub struct CliArgs {
    /// Club index to load: JSON, JSON.gz or a binary cache (*.bin)
    #[arg(short = 'i', long = "input", global = true, env = "GOLFDB_DATA")]
    pub input: Option<PathBuf>,

    /// Download the club index from a URL instead of reading a file
    #[cfg(feature = "fetch")]
    #[arg(long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// Restrict results to one region: england, scotland or wales
    #[arg(short = 'r', long = "region", global = true, default_value = "all")]
    pub region: RegionFilter,

    /// Maximum number of clubs (or suggestions) to print
    #[arg(short = 'n', long = "limit", global = true)]
    pub limit: Option<usize>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded clubs
    Stats,

    /// Autocomplete a town, county or postcode prefix
    Suggest {
        /// At least two characters
        prefix: String,
    },

    /// Print the coordinate of a known town, county or postcode
    Resolve {
        /// Exact place name (case-insensitive)
        place: String,
    },

    /// Clubs closest to a coordinate
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Only clubs within this many miles (10 when given without a value)
        #[arg(long, num_args = 0..=1, value_name = "MILES")]
        radius: Option<Option<f64>>,
    },

    /// Search box behaviour: a known place ranks by distance, anything else
    /// is a text search
    Search {
        query: String,
    },

    /// Substring search over name, town, county, postcode and address
    Text {
        query: String,
    },

    /// Write the loaded clubs to a binary cache file
    Build {
        /// Output path, e.g. clubs_index.comp.bin
        out: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use golfdb_core::Region;

    #[test]
    fn definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "golfdb", "nearby", "--lat", "53.8", "--lng", "-1.5", "--region", "wales", "-n", "5",
        ])
        .unwrap();
        assert_eq!(args.region, RegionFilter::Only(Region::Wales));
        assert_eq!(args.limit, Some(5));
        match args.command {
            Commands::Nearby { lat, lng, radius } => {
                assert_eq!((lat, lng, radius), (53.8, -1.5, None));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn radius_value_is_optional() {
        let parse = |extra: &[&str]| {
            let mut argv = vec!["golfdb", "nearby", "--lat", "53.8", "--lng", "-1.5"];
            argv.extend_from_slice(extra);
            match CliArgs::try_parse_from(argv).unwrap().command {
                Commands::Nearby { radius, .. } => radius,
                other => panic!("unexpected command {other:?}"),
            }
        };
        assert_eq!(parse(&[]), None);
        assert_eq!(parse(&["--radius"]), Some(None));
        assert_eq!(parse(&["--radius", "25"]), Some(Some(25.0)));
    }

    #[test]
    fn unknown_region_is_rejected() {
        assert!(CliArgs::try_parse_from(["golfdb", "--region", "ulster", "stats"]).is_err());
    }
}
