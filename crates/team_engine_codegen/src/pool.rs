//! Suggestion pool and manual location table generation.

use crate::helpers::{opt_cow, profile_expr};
use crate::models::PoolEntry;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::writeln;

/// Generate `SUGGESTION_POOL`, its name lookup and `MANUAL_LOCATIONS`.
pub fn generate(out_dir: &Path, data_dir: &Path, type_names: &[String]) {
    let json =
        fs::read_to_string(data_dir.join("suggestion_pool.json")).expect("suggestion_pool.json");
    let pool: Vec<PoolEntry> = serde_json::from_str(&json).expect("parse suggestion pool");

    let locations_json =
        fs::read_to_string(data_dir.join("manual_locations.json")).expect("manual_locations.json");
    let locations: BTreeMap<String, String> =
        serde_json::from_str(&locations_json).expect("parse manual locations");

    let count = pool.len();

    let entries: Vec<TokenStream> = pool
        .iter()
        .map(|entry| {
            let name = &entry.name;
            let types = profile_expr(name, &entry.types, type_names);
            let min_badge = match entry.min_badge {
                Some(b) => quote! { Some(#b) },
                None => quote! { None },
            };
            let location = opt_cow(&entry.location);
            let note = opt_cow(&entry.note);
            quote! {
                Candidate {
                    name: ::std::borrow::Cow::Borrowed(#name),
                    types: #types,
                    min_badge: #min_badge,
                    location: #location,
                    note: #note,
                }
            }
        })
        .collect();

    // Lower-case name -> index into SUGGESTION_POOL
    let pool_keys: Vec<String> = pool.iter().map(|e| e.name.to_lowercase()).collect();
    let mut seen = HashSet::new();
    let mut lookup = phf_codegen::Map::new();
    for (idx, key) in pool_keys.iter().enumerate() {
        if !seen.insert(key.as_str()) {
            panic!("suggestion pool: duplicate entry `{}`", key);
        }
        lookup.entry(key.as_str(), &format!("{}usize", idx));
    }
    let lookup_str = lookup.build().to_string();

    let location_keys: Vec<(String, &String)> = locations
        .iter()
        .map(|(species, location)| (species.to_lowercase(), location))
        .collect();
    let mut manual = phf_codegen::Map::new();
    for (species, location) in &location_keys {
        manual.entry(species.as_str(), &format!("{:?}", location));
    }
    let manual_str = manual.build().to_string();

    let code = quote! {
        /// Fixed pool of candidates considered for suggestions
        pub static SUGGESTION_POOL: [Candidate; #count] = [
            #(#entries),*
        ];
    };

    let dest = out_dir.join("pool.rs");
    let mut file = BufWriter::new(File::create(&dest).expect("create pool.rs"));
    writeln!(file, "{}", code).unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        "static POOL_LOOKUP: phf::Map<&'static str, usize> = {};",
        lookup_str
    )
    .unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        "/// Hand-maintained locations for species the remote data has no encounters for"
    )
    .unwrap();
    writeln!(
        file,
        "pub static MANUAL_LOCATIONS: phf::Map<&'static str, &'static str> = {};",
        manual_str
    )
    .unwrap();
}
