//! JSON deserialization structures for the data files.

use serde::Deserialize;
use std::collections::BTreeMap;

/// `typechart.json`: canonical type order plus a sparse
/// attacker -> defender -> multiplier table.
#[derive(Deserialize)]
pub struct TypeChartFile {
    pub types: Vec<String>,
    pub chart: BTreeMap<String, BTreeMap<String, f64>>,
}

#[derive(Deserialize)]
pub struct TierDef {
    pub label: String,
    pub score: f64,
}

#[derive(Deserialize)]
pub struct TierList {
    pub tier: String,
    pub names: Vec<String>,
}

#[derive(Deserialize)]
pub struct TierFile {
    pub game: String,
    pub tiers: Vec<TierDef>,
    pub lists: Vec<TierList>,
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

#[derive(Deserialize)]
pub struct PoolEntry {
    pub name: String,
    pub types: Vec<String>,
    #[serde(rename = "minBadge")]
    pub min_badge: Option<u8>,
    pub location: Option<String>,
    pub note: Option<String>,
}

#[derive(Deserialize)]
pub struct GymData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub gym_type: String,
    pub ace: String,
    #[serde(rename = "levelCap")]
    pub level_cap: u8,
    #[serde(rename = "badgeId")]
    pub badge_id: u8,
    pub description: String,
}
