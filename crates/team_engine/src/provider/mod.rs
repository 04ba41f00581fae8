//! Creature records and the data providers that produce them.
//!
//! The engine never talks to a data source directly. Everything goes through
//! [`CreatureProvider`], usually wrapped in a [`MemoizedProvider`] so a
//! process resolves each creature at most once.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::profile::TypeProfile;
use crate::tiers::Tier;

pub mod evolution;
pub mod locations;
pub mod memory;
#[cfg(feature = "pokeapi")]
pub mod pokeapi;

pub use evolution::{Evolution, EvolutionNode};
pub use memory::InMemoryProvider;
#[cfg(feature = "pokeapi")]
pub use pokeapi::PokeApiProvider;

/// Errors raised by a data provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode {what}: {reason}")]
    Decode { what: String, reason: String },

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Base stats as published
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub fn total(&self) -> u16 {
        self.hp + self.attack + self.defense + self.sp_attack + self.sp_defense + self.speed
    }
}

/// Fully resolved creature
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub types: TypeProfile,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub stats: BaseStats,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub next_evolutions: Vec<Evolution>,
    #[serde(default)]
    pub tier: Option<Tier>,
    /// Every species in the evolution chain, lower-case
    #[serde(default)]
    pub family: Vec<String>,
}

impl Creature {
    pub fn new(id: u32, name: impl Into<String>, types: TypeProfile) -> Self {
        let name = name.into();
        Self {
            id,
            family: vec![name.to_lowercase()],
            name,
            types,
            sprite: None,
            stats: BaseStats::default(),
            locations: Vec::new(),
            next_evolutions: Vec::new(),
            tier: None,
        }
    }
}

/// Source of creature data.
///
/// `resolve` returns `Ok(None)` when the source has no such creature; `Err`
/// is reserved for failures worth retrying.
#[allow(async_fn_in_trait)]
pub trait CreatureProvider: Send + Sync {
    async fn resolve(&self, name: &str) -> Result<Option<Creature>, ProviderError>;

    /// Encounter locations for a creature id, formatted for display
    async fn locations(&self, id: u32) -> Result<Vec<String>, ProviderError>;

    /// Every name the source knows, for search assist
    async fn all_known_names(&self) -> Result<Vec<String>, ProviderError>;
}

/// Lookup keys are trimmed and lower-cased
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

enum Miss {
    NotFound,
    Failed(ProviderError),
}

/// Caches successful resolutions for the lifetime of the provider.
///
/// Concurrent lookups of the same key share one underlying fetch. Misses and
/// failures are not cached, so the next call asks the inner provider again.
pub struct MemoizedProvider<P> {
    inner: P,
    creatures: DashMap<String, Arc<OnceCell<Creature>>>,
    names: OnceCell<Vec<String>>,
}

impl<P: CreatureProvider> MemoizedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            creatures: DashMap::new(),
            names: OnceCell::new(),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of creatures resolved so far
    pub fn cached(&self) -> usize {
        self.creatures.iter().filter(|entry| entry.value().initialized()).count()
    }

    fn cell(&self, key: &str) -> Arc<OnceCell<Creature>> {
        self.creatures.entry(key.to_string()).or_default().value().clone()
    }
}

impl<P: CreatureProvider> CreatureProvider for MemoizedProvider<P> {
    async fn resolve(&self, name: &str) -> Result<Option<Creature>, ProviderError> {
        let key = normalize_key(name);
        if key.is_empty() {
            return Ok(None);
        }
        let cell = self.cell(&key);
        let result = cell
            .get_or_try_init(|| async {
                debug!(key = %key, "resolving creature");
                match self.inner.resolve(&key).await {
                    Ok(Some(creature)) => Ok(creature),
                    Ok(None) => Err(Miss::NotFound),
                    Err(err) => Err(Miss::Failed(err)),
                }
            })
            .await;

        let miss = match result {
            Ok(creature) => return Ok(Some(creature.clone())),
            Err(miss) => miss,
        };
        // Unfilled cells would otherwise pile up, one per distinct miss
        self.creatures.remove_if(&key, |_, c| !c.initialized());
        match miss {
            Miss::NotFound => Ok(None),
            Miss::Failed(err) => Err(err),
        }
    }

    async fn locations(&self, id: u32) -> Result<Vec<String>, ProviderError> {
        self.inner.locations(id).await
    }

    async fn all_known_names(&self) -> Result<Vec<String>, ProviderError> {
        self.names
            .get_or_try_init(|| self.inner.all_known_names())
            .await
            .cloned()
    }
}

/// Known names, or an empty list when the provider fails
pub async fn known_names_or_empty<P: CreatureProvider>(provider: &P) -> Vec<String> {
    match provider.all_known_names().await {
        Ok(names) => names,
        Err(err) => {
            warn!(error = %err, "could not load creature names");
            Vec::new()
        }
    }
}

/// Names starting with `prefix` (case-insensitive), at most `limit`
pub async fn search_names<P: CreatureProvider>(provider: &P, prefix: &str, limit: usize) -> Vec<String> {
    let prefix = normalize_key(prefix);
    if prefix.is_empty() {
        return Vec::new();
    }
    known_names_or_empty(provider)
        .await
        .into_iter()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .take(limit)
        .collect()
}
