//! golfdb-rs
//!
//! Umbrella crate for the workspace; re-exports [`golfdb_core`] so the demos
//! under `demos/` can be run from the repository root.
pub use golfdb_core::*;
