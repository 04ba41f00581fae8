//! Resolving ranked candidates into full suggestions.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{rank_candidates, RankContext, Reason, ScoredCandidate};
use crate::analysis::{analyze_team, suggestion_criteria};
use crate::pool::{Candidate, SUGGESTION_POOL};
use crate::provider::{Creature, CreatureProvider};
use crate::team::{Team, TEAM_SIZE};
use crate::tiers::{Tier, TierTable};

/// A ranked candidate with its resolved creature record
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Suggestion {
    pub creature: Creature,
    pub score: f64,
    pub reasons: Vec<Reason>,
    pub note: Option<String>,
    pub location: Option<String>,
    /// The creature's own tier, or the best tier in its family
    pub display_tier: Option<Tier>,
}

/// Resolve every ranked entry concurrently, keeping rank order.
///
/// Entries the provider cannot resolve are dropped; lower-ranked candidates
/// are not pulled in to replace them.
#[instrument(skip_all, fields(ranked = ranked.len()))]
pub async fn hydrate_ranked<P: CreatureProvider>(
    provider: &P,
    ranked: Vec<ScoredCandidate>,
    tiers: &TierTable,
) -> Vec<Suggestion> {
    let lookups = ranked.iter().map(|entry| provider.resolve(&entry.candidate.name));
    let resolved = join_all(lookups).await;

    ranked
        .into_iter()
        .zip(resolved)
        .filter_map(|(entry, result)| {
            let creature = match result {
                Ok(Some(creature)) => creature,
                Ok(None) => {
                    debug!(name = %entry.candidate.name, "suggestion not found, dropped");
                    return None;
                }
                Err(err) => {
                    debug!(name = %entry.candidate.name, error = %err, "suggestion lookup failed, dropped");
                    return None;
                }
            };
            let display_tier = creature
                .tier
                .or_else(|| tiers.max_family_tier(creature.family.iter().map(String::as_str)));
            Some(Suggestion {
                display_tier,
                creature,
                score: entry.score,
                reasons: entry.reasons,
                note: entry.candidate.note.map(|n| n.into_owned()),
                location: entry.candidate.location.map(|l| l.into_owned()),
            })
        })
        .collect()
}

/// Result of one suggestion request
#[derive(Clone, Debug, PartialEq)]
pub enum SuggestionOutcome {
    Ready(Vec<Suggestion>),
    /// A newer request started before this one finished
    Superseded,
}

impl SuggestionOutcome {
    pub fn into_ready(self) -> Option<Vec<Suggestion>> {
        match self {
            SuggestionOutcome::Ready(list) => Some(list),
            SuggestionOutcome::Superseded => None,
        }
    }
}

/// Runs the full analyze -> rank -> hydrate pipeline for a team.
///
/// Every request takes a new generation number. A request that finishes
/// after a newer one has started reports `Superseded` instead of results.
pub struct Suggester<P> {
    provider: Arc<P>,
    tiers: Arc<TierTable>,
    pool: Vec<Candidate>,
    generation: AtomicU64,
}

impl<P: CreatureProvider> Suggester<P> {
    /// Suggester over the bundled pool
    pub fn new(provider: Arc<P>, tiers: Arc<TierTable>) -> Self {
        Self::with_pool(provider, tiers, SUGGESTION_POOL.to_vec())
    }

    pub fn with_pool(provider: Arc<P>, tiers: Arc<TierTable>, pool: Vec<Candidate>) -> Self {
        Self {
            provider,
            tiers,
            pool,
            generation: AtomicU64::new(0),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mark any in-flight request as stale
    pub fn invalidate(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Rank without hydrating
    pub fn rank(&self, team: &Team, excluded: &HashSet<String>) -> Vec<ScoredCandidate> {
        let analysis = analyze_team(&team.profiles());
        let criteria = suggestion_criteria(&analysis);
        let owned = team.owned_names();
        let ctx = RankContext {
            criteria: &criteria,
            progression: team.badges(),
            excluded,
            owned: &owned,
            tiers: &self.tiers,
        };
        rank_candidates(&self.pool, &ctx)
    }

    /// Suggestions for `team`. Empty and full teams get an empty list.
    pub async fn suggest(&self, team: &Team) -> SuggestionOutcome {
        let generation = self.invalidate();

        let members = team.len();
        if members == 0 || members >= TEAM_SIZE {
            debug!(members, "no suggestions for this team size");
            return SuggestionOutcome::Ready(Vec::new());
        }

        let ranked = self.rank(team, &team.blacklist_set());
        let suggestions = hydrate_ranked(self.provider.as_ref(), ranked, &self.tiers).await;

        if self.is_current(generation) {
            SuggestionOutcome::Ready(suggestions)
        } else {
            debug!(generation, "suggestion request superseded");
            SuggestionOutcome::Superseded
        }
    }
}
