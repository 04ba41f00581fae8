//! Type enum, type set and type chart generation.

use crate::models::TypeChartFile;
use heck::{ToPascalCase, ToShoutySnakeCase};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::fs;
use std::path::Path;

/// Map a chart multiplier onto a `TypeEffectiveness` variant name.
fn effectiveness_ident(attacker: &str, defender: &str, value: f64) -> proc_macro2::Ident {
    let name = if value == 0.0 {
        "Immune"
    } else if value == 0.5 {
        "Resistant"
    } else if value == 1.0 {
        "Normal"
    } else if value == 2.0 {
        "SuperEffective"
    } else {
        panic!(
            "typechart: {} -> {} has multiplier {}, expected one of 0, 0.5, 1, 2",
            attacker, defender, value
        );
    };
    format_ident!("{}", name)
}

/// Generate Type enum, TypeSet bitflags and the type chart.
///
/// Returns the canonical type names so other generators can validate
/// their own type references.
pub fn generate(out_dir: &Path, data_dir: &Path) -> Vec<String> {
    let json = fs::read_to_string(data_dir.join("typechart.json")).expect("typechart.json");
    let file: TypeChartFile = serde_json::from_str(&json).expect("parse typechart");

    let type_names = file.types.clone();
    let type_count = type_names.len();
    assert!(type_count <= 32, "TypeSet is a u32 bitset");

    // Every attacker/defender key in the chart must be a declared type
    for (attacker, row) in &file.chart {
        assert!(
            type_names.contains(attacker),
            "typechart: unknown attacking type `{}`",
            attacker
        );
        for defender in row.keys() {
            assert!(
                type_names.contains(defender),
                "typechart: unknown defending type `{}` in row `{}`",
                defender,
                attacker
            );
        }
    }

    let idents: Vec<proc_macro2::Ident> = type_names
        .iter()
        .map(|name| format_ident!("{}", name.to_pascal_case()))
        .collect();

    let variants: Vec<TokenStream> = idents
        .iter()
        .enumerate()
        .map(|(i, ident)| {
            let idx = i as u8;
            quote! { #ident = #idx }
        })
        .collect();

    let from_str_arms: Vec<TokenStream> = type_names
        .iter()
        .zip(&idents)
        .map(|(name, ident)| {
            let lower = name.to_lowercase();
            quote! { #lower => Some(Type::#ident) }
        })
        .collect();

    let name_arms: Vec<TokenStream> = type_names
        .iter()
        .zip(&idents)
        .map(|(name, ident)| quote! { Type::#ident => #name })
        .collect();

    let set_flags: Vec<TokenStream> = type_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let ident = format_ident!("{}", name.to_shouty_snake_case());
            let bit = 1u32 << i;
            quote! { const #ident = #bit; }
        })
        .collect();

    // Matrix[attacker][defender]; absent pairs are neutral
    let matrix_rows: Vec<TokenStream> = type_names
        .iter()
        .map(|attacker| {
            let row = file.chart.get(attacker);
            let cells: Vec<TokenStream> = type_names
                .iter()
                .map(|defender| {
                    let value = row.and_then(|r| r.get(defender)).copied().unwrap_or(1.0);
                    let ident = effectiveness_ident(attacker, defender, value);
                    quote! { TypeEffectiveness::#ident }
                })
                .collect();
            quote! { [#(#cells),*] }
        })
        .collect();

    let code = quote! {
        use bitflags::bitflags;

        /// Elemental type, in canonical chart order
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[repr(u8)]
        pub enum Type {
            #(#variants),*
        }

        impl Type {
            /// Total number of types
            pub const COUNT: usize = #type_count;

            /// Every type in canonical order
            pub const ALL: [Type; #type_count] = [#(Type::#idents),*];

            /// Parse type from string (case-insensitive)
            #[inline]
            pub fn from_str(s: &str) -> Option<Self> {
                match s.to_ascii_lowercase().as_str() {
                    #(#from_str_arms,)*
                    _ => None,
                }
            }

            /// Display name ("Fire", "Water", ...)
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }

            /// Single-bit set containing only this type
            #[inline]
            pub const fn bit(self) -> TypeSet {
                TypeSet::from_bits_retain(1u32 << (self as u8))
            }
        }

        impl core::fmt::Display for Type {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        bitflags! {
            /// Set of types, one bit per `Type` in canonical order
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
            pub struct TypeSet: u32 {
                #(#set_flags)*
            }
        }

        /// Single-type effectiveness as authored in the chart
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum TypeEffectiveness {
            /// 1.0x damage
            Normal = 0,
            /// 2.0x damage
            SuperEffective = 1,
            /// 0.5x damage
            Resistant = 2,
            /// 0.0x damage (immune)
            Immune = 3,
        }

        impl TypeEffectiveness {
            /// Convert to fixed-point multiplier (4 = 1.0x)
            /// Returns: 0 (immune), 2 (0.5x), 4 (1.0x), 8 (2.0x)
            #[inline]
            pub const fn multiplier(self) -> u8 {
                match self {
                    Self::Normal => 4,
                    Self::SuperEffective => 8,
                    Self::Resistant => 2,
                    Self::Immune => 0,
                }
            }
        }

        /// Type chart: TYPE_CHART[attacker][defender] = effectiveness
        pub static TYPE_CHART: [[TypeEffectiveness; #type_count]; #type_count] = [
            #(#matrix_rows),*
        ];
    };

    let dest = out_dir.join("types.rs");
    fs::write(&dest, code.to_string()).expect("write types.rs");

    type_names
}
