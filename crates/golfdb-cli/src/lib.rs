//! golfdb-cli
//! ==========
//!
//! Command-line interface for the `golfdb-core` club directory.
//!
//! The binary (`golfdb`) is the deliverable; this library target only
//! carries the crate overview for rendered documentation.
//!
//! Basic usage:
//!
//! ```text
//! golfdb --help
//! golfdb stats
//! golfdb suggest lee
//! golfdb search Leeds
//! golfdb --region wales nearby --lat 51.5 --lng -3.2 --radius 30
//! golfdb --json text royal
//! ```
//!
//! For programmatic access use [`golfdb-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
