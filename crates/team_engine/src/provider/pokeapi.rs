//! PokeAPI-backed provider.
//!
//! Normalizes `/pokemon/{key}`, `/pokemon-species/{key}`, the species'
//! evolution chain and `/pokemon/{id}/encounters` into a [`Creature`].

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::evolution::{family, next_evolutions, EvolutionDetail, EvolutionNode};
use super::locations::{resolve_locations, Encounter, EncounterDetail, LocationSource, SpeciesInfo, VersionEncounters};
use super::locations::UNKNOWN_OR_EVOLUTION;
use super::{normalize_key, BaseStats, Creature, CreatureProvider, ProviderError};
use crate::profile::TypeProfile;
use crate::tiers::TierTable;
use crate::types::Type;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Upper bound on names fetched for search assist
const NAME_LIST_LIMIT: u32 = 1000;

#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    pub base_url: String,
    /// Game version whose encounters are listed ("shield")
    pub version: String,
    pub timeout: Duration,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: "shield".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

pub struct PokeApiProvider {
    client: reqwest::Client,
    config: PokeApiConfig,
    tiers: Arc<TierTable>,
}

impl PokeApiProvider {
    pub fn new(config: PokeApiConfig, tiers: Arc<TierTable>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| ProviderError::Http {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { client, config, tiers })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET and decode, `Ok(None)` on 404
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, ProviderError> {
        let resp = self.client.get(url).send().await.map_err(|e| ProviderError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ProviderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map(Some).map_err(|e| ProviderError::Decode {
            what: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn chain(&self, species: &SpeciesResponse) -> Result<Option<EvolutionNode>, ProviderError> {
        let Some(link) = &species.evolution_chain else {
            return Ok(None);
        };
        let chain: Option<ChainResponse> = self.get_json(&link.url).await?;
        Ok(chain.map(|c| c.chain.into()))
    }
}

impl LocationSource for PokeApiProvider {
    async fn encounters(&self, key: &str) -> Result<Vec<Encounter>, ProviderError> {
        let url = self.url(&format!("pokemon/{key}/encounters"));
        let raw: Option<Vec<EncounterResponse>> = self.get_json(&url).await?;
        Ok(raw.unwrap_or_default().into_iter().map(Encounter::from).collect())
    }

    async fn species(&self, key: &str) -> Result<Option<SpeciesInfo>, ProviderError> {
        let url = self.url(&format!("pokemon-species/{key}"));
        let Some(species) = self.get_json::<SpeciesResponse>(&url).await? else {
            return Ok(None);
        };
        let chain = self.chain(&species).await?;
        Ok(Some(SpeciesInfo {
            name: species.name,
            chain,
        }))
    }
}

impl CreatureProvider for PokeApiProvider {
    #[instrument(skip(self))]
    async fn resolve(&self, name: &str) -> Result<Option<Creature>, ProviderError> {
        let key = normalize_key(name);
        let url = self.url(&format!("pokemon/{key}"));
        let Some(data) = self.get_json::<PokemonResponse>(&url).await? else {
            debug!("not found");
            return Ok(None);
        };

        let types = data.profile()?;
        let mut creature = Creature::new(data.id, data.name.clone(), types);
        creature.sprite = data.sprite();
        creature.stats = data.stats();
        creature.tier = self.tiers.tier_of(&data.name);

        let species_url = self.url(&format!("pokemon-species/{}", data.id));
        if let Some(species) = self.get_json::<SpeciesResponse>(&species_url).await? {
            if let Some(chain) = self.chain(&species).await? {
                creature.next_evolutions = next_evolutions(&chain, &data.name);
                creature.family = family(&chain);
            }
        }

        let locations = self.locations(data.id).await?;
        creature.locations = if locations.is_empty() {
            vec![UNKNOWN_OR_EVOLUTION.to_string()]
        } else {
            locations
        };
        Ok(Some(creature))
    }

    async fn locations(&self, id: u32) -> Result<Vec<String>, ProviderError> {
        Ok(resolve_locations(self, &id.to_string(), &self.config.version).await)
    }

    async fn all_known_names(&self) -> Result<Vec<String>, ProviderError> {
        let url = self.url(&format!("pokemon?limit={NAME_LIST_LIMIT}"));
        let list: Option<NameList> = self.get_json(&url).await?;
        Ok(list
            .map(|l| l.results.into_iter().map(|r| r.name).collect())
            .unwrap_or_default())
    }
}

// Wire models

#[derive(Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Deserialize)]
struct UrlResource {
    url: String,
}

#[derive(Deserialize)]
struct NameList {
    results: Vec<NamedResource>,
}

#[derive(Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Deserialize)]
struct StatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Deserialize, Default)]
struct Artwork {
    front_default: Option<String>,
}

#[derive(Deserialize, Default)]
struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<Artwork>,
}

#[derive(Deserialize, Default)]
struct Sprites {
    front_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    types: Vec<TypeSlot>,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    stats: Vec<StatSlot>,
}

impl PokemonResponse {
    fn profile(&self) -> Result<TypeProfile, ProviderError> {
        let types = self
            .types
            .iter()
            .map(|slot| {
                Type::from_str(&slot.kind.name).ok_or_else(|| ProviderError::Decode {
                    what: format!("types of {}", self.name),
                    reason: format!("unknown type `{}`", slot.kind.name),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        TypeProfile::from_types(&types).map_err(|e| ProviderError::Decode {
            what: format!("types of {}", self.name),
            reason: e.to_string(),
        })
    }

    fn sprite(&self) -> Option<String> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.clone())
            .or_else(|| self.sprites.front_default.clone())
    }

    fn stats(&self) -> BaseStats {
        let mut stats = BaseStats::default();
        for slot in &self.stats {
            let target = match slot.stat.name.as_str() {
                "hp" => &mut stats.hp,
                "attack" => &mut stats.attack,
                "defense" => &mut stats.defense,
                "special-attack" => &mut stats.sp_attack,
                "special-defense" => &mut stats.sp_defense,
                "speed" => &mut stats.speed,
                _ => continue,
            };
            *target = slot.base_stat;
        }
        stats
    }
}

#[derive(Deserialize)]
struct SpeciesResponse {
    name: String,
    #[serde(default)]
    evolution_chain: Option<UrlResource>,
}

#[derive(Deserialize)]
struct ChainResponse {
    chain: ChainLink,
}

#[derive(Deserialize)]
struct ChainDetail {
    min_level: Option<u8>,
    trigger: Option<NamedResource>,
    item: Option<NamedResource>,
}

#[derive(Deserialize)]
struct ChainLink {
    species: NamedResource,
    #[serde(default)]
    evolution_details: Vec<ChainDetail>,
    #[serde(default)]
    evolves_to: Vec<ChainLink>,
}

impl From<ChainLink> for EvolutionNode {
    fn from(link: ChainLink) -> Self {
        EvolutionNode {
            species: link.species.name,
            details: link
                .evolution_details
                .into_iter()
                .map(|d| EvolutionDetail {
                    min_level: d.min_level,
                    trigger: d.trigger.map(|t| t.name),
                    item: d.item.map(|i| i.name),
                })
                .collect(),
            evolves_to: link.evolves_to.into_iter().map(EvolutionNode::from).collect(),
        }
    }
}

#[derive(Deserialize)]
struct EncounterDetailResponse {
    method: NamedResource,
    #[serde(default)]
    condition_values: Vec<NamedResource>,
}

#[derive(Deserialize)]
struct VersionDetailResponse {
    version: NamedResource,
    #[serde(default)]
    encounter_details: Vec<EncounterDetailResponse>,
}

#[derive(Deserialize)]
struct EncounterResponse {
    location_area: NamedResource,
    #[serde(default)]
    version_details: Vec<VersionDetailResponse>,
}

impl From<EncounterResponse> for Encounter {
    fn from(raw: EncounterResponse) -> Self {
        Encounter {
            location_area: raw.location_area.name,
            versions: raw
                .version_details
                .into_iter()
                .map(|v| VersionEncounters {
                    version: v.version.name,
                    details: v
                        .encounter_details
                        .into_iter()
                        .map(|d| EncounterDetail {
                            method: d.method.name,
                            conditions: d.condition_values.into_iter().map(|c| c.name).collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pokemon_payload() {
        let raw = r#"{
            "id": 823,
            "name": "corviknight",
            "types": [
                {"slot": 1, "type": {"name": "flying", "url": ""}},
                {"slot": 2, "type": {"name": "steel", "url": ""}}
            ],
            "sprites": {
                "front_default": "small.png",
                "other": {"official-artwork": {"front_default": "art.png"}}
            },
            "stats": [
                {"base_stat": 98, "stat": {"name": "hp"}},
                {"base_stat": 87, "stat": {"name": "attack"}},
                {"base_stat": 67, "stat": {"name": "speed"}}
            ]
        }"#;
        let data: PokemonResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(data.profile().unwrap(), TypeProfile::dual(Type::Flying, Type::Steel));
        assert_eq!(data.sprite().as_deref(), Some("art.png"));
        let stats = data.stats();
        assert_eq!((stats.hp, stats.attack, stats.speed, stats.defense), (98, 87, 67, 0));
    }

    #[test]
    fn unknown_type_is_decode_error() {
        let raw = r#"{"id": 1, "name": "x", "types": [{"type": {"name": "shadow"}}]}"#;
        let data: PokemonResponse = serde_json::from_str(raw).unwrap();
        assert!(matches!(data.profile(), Err(ProviderError::Decode { .. })));
    }

    #[test]
    fn chain_converts_recursively() {
        let raw = r#"{"chain": {
            "species": {"name": "rookidee"},
            "evolution_details": [],
            "evolves_to": [{
                "species": {"name": "corvisquire"},
                "evolution_details": [{"min_level": 18, "trigger": {"name": "level-up"}, "item": null}],
                "evolves_to": []
            }]
        }}"#;
        let chain: ChainResponse = serde_json::from_str(raw).unwrap();
        let node: EvolutionNode = chain.chain.into();
        assert_eq!(family(&node), vec!["rookidee", "corvisquire"]);
        assert_eq!(next_evolutions(&node, "rookidee")[0].level, Some(18));
    }

    #[test]
    fn encounters_keep_version_details() {
        let raw = r#"[{
            "location_area": {"name": "galar-route-3"},
            "version_details": [{
                "version": {"name": "shield"},
                "encounter_details": [{"method": {"name": "walk"}, "condition_values": [{"name": "weather-snow"}]}]
            }]
        }]"#;
        let parsed: Vec<EncounterResponse> = serde_json::from_str(raw).unwrap();
        let encounters: Vec<Encounter> = parsed.into_iter().map(Encounter::from).collect();
        assert_eq!(
            super::super::locations::format_encounters(&encounters, "shield"),
            vec!["Route 3 (Snow)"]
        );
    }
}
