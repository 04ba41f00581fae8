//! In-memory provider.
//!
//! Serves a fixed set of records. Used offline (records synthesized from the
//! bundled suggestion pool) and as a test double: it counts fetches and can
//! be told to fail or stall on specific names.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{normalize_key, Creature, CreatureProvider, ProviderError};
use crate::pool::{manual_location, SUGGESTION_POOL};
use crate::tiers::TierTable;

#[derive(Debug, Default)]
pub struct InMemoryProvider {
    creatures: HashMap<String, Creature>,
    failing: HashSet<String>,
    latency: Option<Duration>,
    names_unavailable: bool,
    fetches: AtomicUsize,
}

impl InMemoryProvider {
    pub fn new<I>(creatures: I) -> Self
    where
        I: IntoIterator<Item = Creature>,
    {
        let mut provider = Self::default();
        for creature in creatures {
            provider.insert(creature);
        }
        provider
    }

    /// Records for every bundled suggestion candidate
    pub fn from_pool(tiers: &TierTable) -> Self {
        Self::new(SUGGESTION_POOL.iter().enumerate().map(|(idx, candidate)| {
            let mut creature = Creature::new(idx as u32 + 1, candidate.name.to_string(), candidate.types);
            creature.tier = tiers.tier_of(&candidate.name);
            if let Some(location) = candidate
                .location
                .as_deref()
                .or_else(|| manual_location(&candidate.name))
            {
                creature.locations.push(location.to_string());
            }
            creature
        }))
    }

    pub fn insert(&mut self, creature: Creature) {
        self.creatures.insert(normalize_key(&creature.name), creature);
    }

    /// Make lookups of `name` fail with `ProviderError::Unavailable`
    pub fn fail_on(mut self, name: &str) -> Self {
        self.failing.insert(normalize_key(name));
        self
    }

    /// Sleep before answering each lookup
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make `all_known_names` fail
    pub fn without_names(mut self) -> Self {
        self.names_unavailable = true;
        self
    }

    /// Number of `resolve` calls that reached this provider
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

impl CreatureProvider for InMemoryProvider {
    async fn resolve(&self, name: &str) -> Result<Option<Creature>, ProviderError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let key = normalize_key(name);
        if self.failing.contains(&key) {
            return Err(ProviderError::Unavailable(format!("lookup of `{key}` failed")));
        }
        Ok(self.creatures.get(&key).cloned())
    }

    async fn locations(&self, id: u32) -> Result<Vec<String>, ProviderError> {
        Ok(self
            .creatures
            .values()
            .find(|c| c.id == id)
            .map(|c| c.locations.clone())
            .unwrap_or_default())
    }

    async fn all_known_names(&self) -> Result<Vec<String>, ProviderError> {
        if self.names_unavailable {
            return Err(ProviderError::Unavailable("name list".to_string()));
        }
        let mut names: Vec<String> = self.creatures.values().map(|c| c.name.clone()).collect();
        names.sort();
        Ok(names)
    }
}
