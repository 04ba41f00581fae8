//! User preferences.

use serde::{Deserialize, Serialize};

use crate::tiers::Tier;

fn default_show_catch_radar() -> bool {
    true
}

fn default_allowed_tiers() -> Vec<Tier> {
    vec![Tier::Uber, Tier::OU, Tier::UU, Tier::UUBL]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_show_catch_radar")]
    pub show_catch_radar: bool,
    /// Tiers listed by the catch radar
    #[serde(default = "default_allowed_tiers")]
    pub allowed_tiers: Vec<Tier>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_catch_radar: default_show_catch_radar(),
            allowed_tiers: default_allowed_tiers(),
        }
    }
}

impl Settings {
    pub fn toggle_catch_radar(&mut self) -> bool {
        self.show_catch_radar = !self.show_catch_radar;
        self.show_catch_radar
    }

    /// Add or remove a tier from the allowed list; returns whether it is now allowed
    pub fn toggle_tier(&mut self, tier: Tier) -> bool {
        if let Some(pos) = self.allowed_tiers.iter().position(|t| *t == tier) {
            self.allowed_tiers.remove(pos);
            false
        } else {
            self.allowed_tiers.push(tier);
            true
        }
    }

    pub fn set_allowed_tiers(&mut self, tiers: impl IntoIterator<Item = Tier>) {
        self.allowed_tiers.clear();
        for tier in tiers {
            if !self.allowed_tiers.contains(&tier) {
                self.allowed_tiers.push(tier);
            }
        }
    }

    pub fn allows(&self, tier: Tier) -> bool {
        self.allowed_tiers.contains(&tier)
    }
}
