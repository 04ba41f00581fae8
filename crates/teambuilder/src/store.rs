//! Persisted team and settings.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use team_engine::settings::Settings;
use team_engine::Team;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub team: Team,
    #[serde(default)]
    pub settings: Settings,
}

/// JSON file holding a [`State`]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored state. A missing file yields a fresh team with
    /// `default_settings`.
    pub fn load(&self, default_settings: &Settings) -> Result<State> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored state, starting fresh");
            return Ok(State {
                team: Team::new(),
                settings: default_settings.clone(),
            });
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("failed to parse {}", self.path.display()))
    }

    pub fn save(&self, state: &State) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(state).context("failed to serialize state")?;
        fs::write(&self.path, json).with_context(|| format!("failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use team_engine::{Creature, Tier, Type, TypeProfile};

    #[test]
    fn missing_file_uses_default_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("state.json"));
        let mut settings = Settings::default();
        settings.set_allowed_tiers([Tier::NU]);

        let state = store.load(&settings).unwrap();
        assert!(state.team.is_empty());
        assert_eq!(state.settings, settings);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested/state.json"));

        let mut state = State::default();
        state
            .team
            .add(Creature::new(4, "Charmander", TypeProfile::single(Type::Fire)), None)
            .unwrap();
        state.team.set_badges(2);
        state.team.blacklist_add("Wooloo");
        state.settings.toggle_catch_radar();
        store.save(&state).unwrap();

        let loaded = store.load(&Settings::default()).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Store::new(&path).load(&Settings::default()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
