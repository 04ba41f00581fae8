//! Generates the type chart, tier lists, suggestion pool, manual locations
//! and gym leaders from `data/*.json` into `OUT_DIR`.

use std::env;
use std::path::Path;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir).join("../../data");

    println!("cargo:rerun-if-changed=build.rs");

    team_engine_codegen::generate_all(Path::new(&out_dir), &data_dir);
}
