//! Encounter location resolution.
//!
//! Resolution order for a species: direct encounters in the configured game
//! version, the manual location table, then the base species of its
//! evolution chain ("Evolve from X"). The chain walk tracks visited species
//! so a malformed chain terminates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::evolution::EvolutionNode;
use super::{normalize_key, ProviderError};
use crate::pool::manual_location;

pub const TRADE_OR_EVENT: &str = "Trade / Event / One-time catch";
pub const UNKNOWN_OR_EVOLUTION: &str = "Unknown / Trade / Evolution";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const UNKNOWN: &str = "Unknown";

/// Default encounter method, omitted from the display string
const DEFAULT_METHOD: &str = "walk";

/// One encounter condition set within a version
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterDetail {
    pub method: String,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEncounters {
    pub version: String,
    #[serde(default)]
    pub details: Vec<EncounterDetail>,
}

/// Encounters in one location area, across versions
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub location_area: String,
    #[serde(default)]
    pub versions: Vec<VersionEncounters>,
}

/// Species record as far as location lookup needs it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeciesInfo {
    pub name: String,
    pub chain: Option<EvolutionNode>,
}

/// Raw data needed to resolve locations. Keys are species names or ids.
#[allow(async_fn_in_trait)]
pub trait LocationSource: Send + Sync {
    async fn encounters(&self, key: &str) -> Result<Vec<Encounter>, ProviderError>;

    async fn species(&self, key: &str) -> Result<Option<SpeciesInfo>, ProviderError>;
}

/// Turn an API slug into display text: "galar-route-1" -> "Route 1"
pub fn format_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let stripped = remove_first_ignore_case(&spaced, "galar");
    stripped
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn remove_first_ignore_case(haystack: &str, needle: &str) -> String {
    match haystack.to_ascii_lowercase().find(needle) {
        Some(pos) => format!("{}{}", &haystack[..pos], &haystack[pos + needle.len()..]),
        None => haystack.to_string(),
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Display strings for the encounters available in `version`.
///
/// Conditions (time, weather) and non-default methods are appended in
/// parentheses: "Route 5 (Morning/Rain, Surf)".
pub fn format_encounters(encounters: &[Encounter], version: &str) -> Vec<String> {
    encounters
        .iter()
        .filter_map(|enc| {
            let in_version = enc.versions.iter().find(|v| v.version == version)?;
            let location = format_slug(&enc.location_area);

            let mut methods = Vec::new();
            let mut conditions = Vec::new();
            for detail in &in_version.details {
                if detail.method != DEFAULT_METHOD {
                    push_unique(&mut methods, format_slug(&detail.method));
                }
                for condition in &detail.conditions {
                    let text = format_slug(condition)
                        .replacen("Time ", "", 1)
                        .replacen("Weather ", "", 1);
                    push_unique(&mut conditions, text);
                }
            }

            let mut extra = conditions.join("/");
            if !methods.is_empty() {
                if !extra.is_empty() {
                    extra.push_str(", ");
                }
                extra.push_str(&methods.join("/"));
            }

            Some(if extra.is_empty() {
                location
            } else {
                format!("{location} ({extra})")
            })
        })
        .collect()
}

/// Result of looking at one species on its own
enum Lookup {
    Known(Vec<String>),
    EvolvesFrom(String),
}

async fn own_locations<S: LocationSource>(source: &S, key: &str, version: &str) -> Result<Lookup, ProviderError> {
    let direct = format_encounters(&source.encounters(key).await?, version);
    if !direct.is_empty() {
        return Ok(Lookup::Known(direct));
    }

    let Some(species) = source.species(key).await? else {
        return Ok(Lookup::Known(vec![UNKNOWN_LOCATION.to_string()]));
    };
    let name = normalize_key(&species.name);

    if let Some(manual) = manual_location(&name) {
        return Ok(Lookup::Known(vec![manual.to_string()]));
    }

    match species.chain {
        Some(chain) if chain.species == name => Ok(Lookup::Known(vec![TRADE_OR_EVENT.to_string()])),
        Some(chain) => Ok(Lookup::EvolvesFrom(chain.species)),
        None => Ok(Lookup::Known(vec![UNKNOWN_OR_EVOLUTION.to_string()])),
    }
}

/// Is this a real place rather than one of the fallback strings?
fn is_catchable(locations: &[String]) -> bool {
    locations
        .first()
        .is_some_and(|first| !first.contains("Trade") && !first.contains("Unknown"))
}

/// Resolve display locations for `key`, walking toward the base species
/// when the species itself cannot be caught.
pub async fn resolve_locations<S: LocationSource>(source: &S, key: &str, version: &str) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut path = Vec::new();
    let mut current = normalize_key(key);

    let mut result = loop {
        if !visited.insert(current.clone()) {
            debug!(species = %current, "evolution chain loops back");
            break vec![UNKNOWN_OR_EVOLUTION.to_string()];
        }
        path.push(current.clone());
        match own_locations(source, &current, version).await {
            Ok(Lookup::Known(locations)) => break locations,
            Ok(Lookup::EvolvesFrom(base)) => current = base,
            Err(err) => {
                warn!(species = %current, error = %err, "location lookup failed");
                break vec![UNKNOWN.to_string()];
            }
        }
    };

    // path[i + 1] is the base species path[i] evolves from
    for base in path.iter().skip(1).rev() {
        result = if is_catchable(&result) {
            std::iter::once(format!("Evolve from {}", capitalize(base)))
                .chain(result.iter().map(|l| format!("(Found at {l})")))
                .collect()
        } else {
            vec![UNKNOWN_OR_EVOLUTION.to_string()]
        };
    }
    result
}
