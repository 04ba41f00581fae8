//! Gym leader table generation.

use crate::helpers::type_path;
use crate::models::GymData;
use proc_macro2::TokenStream;
use quote::quote;
use std::fs;
use std::path::Path;

/// Generate `GYM_LEADERS`, ordered by badge number.
pub fn generate(out_dir: &Path, data_dir: &Path, type_names: &[String]) {
    let json = fs::read_to_string(data_dir.join("gyms.json")).expect("gyms.json");
    let mut gyms: Vec<GymData> = serde_json::from_str(&json).expect("parse gyms");
    gyms.sort_by_key(|g| g.badge_id);

    let count = gyms.len();
    let entries: Vec<TokenStream> = gyms
        .iter()
        .map(|g| {
            let id = &g.id;
            let name = &g.name;
            let gym_type = type_path(&g.gym_type, type_names);
            let ace = &g.ace;
            let level_cap = g.level_cap;
            let badge = g.badge_id;
            let advice = &g.description;
            quote! {
                GymLeader {
                    id: #id,
                    name: #name,
                    gym_type: #gym_type,
                    ace: #ace,
                    level_cap: #level_cap,
                    badge: #badge,
                    advice: #advice,
                }
            }
        })
        .collect();

    let code = quote! {
        /// Gym leaders in badge order
        pub static GYM_LEADERS: [GymLeader; #count] = [
            #(#entries),*
        ];
    };

    let dest = out_dir.join("gyms.rs");
    fs::write(&dest, code.to_string()).expect("write gyms.rs");
}
