//! Tier enum and raw tier list generation.

use crate::models::TierFile;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::fs;
use std::path::Path;

/// Generate the `Tier` enum, the raw per-tier name lists and the manual
/// overrides. Flattening into a lookup table happens at runtime in
/// `TierTable`.
pub fn generate(out_dir: &Path, data_dir: &Path) {
    let json = fs::read_to_string(data_dir.join("tiers.json")).expect("tiers.json");
    let file: TierFile = serde_json::from_str(&json).expect("parse tiers");

    let labels: Vec<&str> = file.tiers.iter().map(|t| t.label.as_str()).collect();
    let tier_path = |label: &str, context: &str| -> TokenStream {
        if !labels.contains(&label) {
            panic!("tiers: unknown tier label `{}` ({})", label, context);
        }
        let ident = format_ident!("{}", label);
        quote! { Tier::#ident }
    };

    let tier_count = file.tiers.len();
    let idents: Vec<proc_macro2::Ident> = file
        .tiers
        .iter()
        .map(|t| format_ident!("{}", t.label))
        .collect();

    let label_arms: Vec<TokenStream> = file
        .tiers
        .iter()
        .zip(&idents)
        .map(|(t, ident)| {
            let label = &t.label;
            quote! { Tier::#ident => #label }
        })
        .collect();

    let from_label_arms: Vec<TokenStream> = file
        .tiers
        .iter()
        .zip(&idents)
        .map(|(t, ident)| {
            let lower = t.label.to_lowercase();
            quote! { #lower => Some(Tier::#ident) }
        })
        .collect();

    let score_arms: Vec<TokenStream> = file
        .tiers
        .iter()
        .zip(&idents)
        .map(|(t, ident)| {
            let score = t.score;
            quote! { Tier::#ident => #score }
        })
        .collect();

    let lists: Vec<TokenStream> = file
        .lists
        .iter()
        .map(|list| {
            let tier = tier_path(&list.tier, "tier list");
            let names = &list.names;
            quote! { (#tier, &[#(#names),*]) }
        })
        .collect();

    let overrides: Vec<TokenStream> = file
        .overrides
        .iter()
        .map(|(name, label)| {
            let tier = tier_path(label, name);
            let key = name.to_lowercase();
            quote! { (#key, #tier) }
        })
        .collect();

    let game = &file.game;

    let code = quote! {
        /// Competitive viability tier, best first
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[allow(clippy::upper_case_acronyms)]
        pub enum Tier {
            #(#idents),*
        }

        impl Tier {
            /// Every tier, best first
            pub const ALL: [Tier; #tier_count] = [#(Tier::#idents),*];

            /// Label as written in tier lists ("OU", "UUBL", ...)
            #[inline]
            pub const fn label(self) -> &'static str {
                match self {
                    #(#label_arms,)*
                }
            }

            /// Parse a tier label (case-insensitive)
            #[inline]
            pub fn from_label(s: &str) -> Option<Self> {
                match s.to_ascii_lowercase().as_str() {
                    #(#from_label_arms,)*
                    _ => None,
                }
            }

            /// Numeric viability score used by suggestion ranking
            #[inline]
            pub fn score(self) -> f64 {
                match self {
                    #(#score_arms,)*
                }
            }
        }

        impl core::fmt::Display for Tier {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.label())
            }
        }

        /// Game the tier lists were taken from
        pub const TIER_SOURCE_GAME: &str = #game;

        /// Raw tier lists as published, display names
        pub static RAW_TIERS: &[(Tier, &[&str])] = &[
            #(#lists),*
        ];

        /// Manual additions for pre-evolutions and families missing from the raw lists.
        /// Applied after the raw lists, so they win.
        pub static MANUAL_TIERS: &[(&str, Tier)] = &[
            #(#overrides),*
        ];
    };

    let dest = out_dir.join("tiers.rs");
    fs::write(&dest, code.to_string()).expect("write tiers.rs");
}
