//! Competitive tiers.
//!
//! The `Tier` enum and the raw lists are generated at build time from
//! `data/tiers.json`. `TierTable` flattens them into a name lookup once and
//! is then passed by reference to whatever needs tier scores.

use std::collections::HashMap;

include!(concat!(env!("OUT_DIR"), "/tiers.rs"));

/// Scores at or above this count as a top meta pick
pub const TOP_TIER_SCORE: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TierError {
    #[error("unknown tier label `{0}`")]
    UnknownLabel(String),
}

impl std::str::FromStr for Tier {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::from_label(s.trim()).ok_or_else(|| TierError::UnknownLabel(s.to_string()))
    }
}

impl Tier {
    #[inline]
    pub fn is_top(self) -> bool {
        self.score() >= TOP_TIER_SCORE
    }
}

/// Lower-cased creature name -> tier
#[derive(Debug, Clone, Default)]
pub struct TierTable {
    entries: HashMap<String, Tier>,
}

impl TierTable {
    /// Table for the bundled tier lists plus manual overrides.
    pub fn gen8() -> Self {
        let mut table = Self::from_lists(RAW_TIERS.iter().map(|(tier, names)| (*tier, names.iter().copied())));
        for (name, tier) in MANUAL_TIERS {
            table.insert(name, *tier);
        }
        table
    }

    /// Build from `(tier, names)` groups. A name listed twice keeps the last tier.
    pub fn from_lists<'a, I, N>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Tier, N)>,
        N: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for (tier, names) in lists {
            for name in names {
                table.insert(name, tier);
            }
        }
        table
    }

    pub fn insert(&mut self, name: &str, tier: Tier) {
        self.entries.insert(name.trim().to_lowercase(), tier);
    }

    /// Case-insensitive lookup
    pub fn tier_of(&self, name: &str) -> Option<Tier> {
        self.entries.get(&name.trim().to_lowercase()).copied()
    }

    /// Tier score, 0 when the name is not tiered
    pub fn score_of(&self, name: &str) -> f64 {
        self.tier_of(name).map_or(0.0, Tier::score)
    }

    /// Best scoring tier among a family. Zero-score tiers never win.
    pub fn max_family_tier<'a, I>(&self, family: I) -> Option<Tier>
    where
        I: IntoIterator<Item = &'a str>,
    {
        family
            .into_iter()
            .filter_map(|name| self.tier_of(name))
            .filter(|tier| tier.score() > 0.0)
            .max_by(|a, b| a.score().total_cmp(&b.score()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
