//! Subcommand handlers and the state they share.

pub mod analyze;
pub mod blacklist;
pub mod gyms;
pub mod matchup;
pub mod radar;
pub mod search;
pub mod settings;
pub mod suggest;
pub mod team;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use team_engine::provider::{InMemoryProvider, PokeApiProvider};
use team_engine::{Creature, CreatureProvider, MemoizedProvider, ProviderError, TierTable};
use tracing::info;

use crate::config::Config;
use crate::store::{State, Store};

/// Creature source selected by configuration
pub enum Backend {
    Offline(MemoizedProvider<InMemoryProvider>),
    Remote(MemoizedProvider<PokeApiProvider>),
}

impl Backend {
    pub fn from_config(config: &Config, tiers: Arc<TierTable>) -> Result<Self> {
        if config.provider.offline {
            info!("using bundled offline data");
            return Ok(Backend::Offline(MemoizedProvider::new(InMemoryProvider::from_pool(&tiers))));
        }
        let provider = PokeApiProvider::new(config.provider.pokeapi(), tiers)
            .context("failed to build the PokeAPI client")?;
        Ok(Backend::Remote(MemoizedProvider::new(provider)))
    }
}

impl CreatureProvider for Backend {
    async fn resolve(&self, name: &str) -> Result<Option<Creature>, ProviderError> {
        match self {
            Backend::Offline(p) => p.resolve(name).await,
            Backend::Remote(p) => p.resolve(name).await,
        }
    }

    async fn locations(&self, id: u32) -> Result<Vec<String>, ProviderError> {
        match self {
            Backend::Offline(p) => p.locations(id).await,
            Backend::Remote(p) => p.locations(id).await,
        }
    }

    async fn all_known_names(&self) -> Result<Vec<String>, ProviderError> {
        match self {
            Backend::Offline(p) => p.all_known_names().await,
            Backend::Remote(p) => p.all_known_names().await,
        }
    }
}

/// Everything a command handler may need
pub struct Context {
    pub store: Store,
    pub state: State,
    pub tiers: Arc<TierTable>,
    pub provider: Arc<Backend>,
}

impl Context {
    pub fn new(config: &Config) -> Result<Self> {
        let tiers = Arc::new(TierTable::gen8());
        let store = Store::new(config.store.path.clone());
        let state = store.load(&config.settings)?;
        let provider = Arc::new(Backend::from_config(config, tiers.clone())?);
        Ok(Self {
            store,
            state,
            tiers,
            provider,
        })
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.state)
    }

    /// Resolve `name` or fail with a readable message
    pub async fn require(&self, name: &str) -> Result<Creature> {
        self.provider
            .resolve(name)
            .await
            .with_context(|| format!("lookup of `{name}` failed"))?
            .with_context(|| format!("no creature named `{name}`"))
    }
}
