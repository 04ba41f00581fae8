//! Code generation helpers for team_engine.
//!
//! This crate parses the JSON data files under `data/` and generates the
//! static tables (type chart, tier lists, suggestion pool, gym leaders)
//! compiled into the engine.

mod gyms;
mod helpers;
mod models;
mod pool;
mod tiers;
mod types;

use std::path::Path;
use std::println;

/// Generate all code from the data directory into the output directory.
///
/// This is the main entry point called from team_engine's build.rs.
pub fn generate_all(out_dir: &Path, data_dir: &Path) {
    // Rerun if any data file changes
    for file in &[
        "typechart.json",
        "tiers.json",
        "suggestion_pool.json",
        "manual_locations.json",
        "gyms.json",
    ] {
        println!("cargo:rerun-if-changed={}", data_dir.join(file).display());
    }

    let type_names = types::generate(out_dir, data_dir);
    tiers::generate(out_dir, data_dir);
    pool::generate(out_dir, data_dir, &type_names);
    gyms::generate(out_dir, data_dir, &type_names);
}
