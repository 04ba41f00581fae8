//! team_engine - type coverage and suggestion engine for team building
//!
//! Given the type profiles of a roster, this library derives shared
//! weaknesses, resistances and offensive coverage gaps, then ranks a pool of
//! candidates that would patch those gaps. Creature details come from a
//! pluggable [`provider::CreatureProvider`].

/// Type definitions and type chart
pub mod types {
    include!(concat!(env!("OUT_DIR"), "/types.rs"));
}

/// Single/dual type multipliers and coverage
pub mod calc;

/// One- or two-type creature profiles
pub mod profile;

/// Roster-wide gap analysis
pub mod analysis;

/// Competitive tiers and the tier lookup table
pub mod tiers;

/// Suggestion candidates and manual locations
pub mod pool;

/// Gym leaders and progression caps
pub mod gyms;

/// Creature records and data providers
pub mod provider;

/// Candidate ranking and hydration
pub mod suggest;

/// Tier-filtered catch list
pub mod radar;

/// Team roster store
pub mod team;

/// User preferences
pub mod settings;

// Re-export commonly used types
pub use analysis::{analyze_team, suggestion_criteria, SuggestionCriteria, TeamAnalysis};
pub use calc::{dual_multiplier, multiplier, Multiplier};
pub use pool::{Candidate, SUGGESTION_POOL};
pub use profile::TypeProfile;
pub use provider::{Creature, CreatureProvider, MemoizedProvider, ProviderError};
pub use suggest::{
    hydrate_ranked, rank_candidates, RankContext, Reason, ScoredCandidate, Suggester, Suggestion,
    SuggestionOutcome,
};
pub use team::Team;
pub use tiers::{Tier, TierTable};
pub use types::{Type, TypeEffectiveness, TypeSet};
