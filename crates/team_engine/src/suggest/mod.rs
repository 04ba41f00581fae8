//! Suggestion scoring.
//!
//! `rank_candidates` is pure: it filters the pool against progression,
//! ownership and the blacklist, scores what is left and keeps the top
//! entries. `hydrate_ranked` and [`Suggester`] then resolve those entries
//! through a provider.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::analysis::SuggestionCriteria;
use crate::calc::{dual_multiplier, hits_super_effectively};
use crate::pool::Candidate;
use crate::provider::normalize_key;
use crate::tiers::{TierTable, TOP_TIER_SCORE};
use crate::types::Type;

mod hydrate;

pub use hydrate::{hydrate_ranked, Suggester, Suggestion, SuggestionOutcome};

/// Points per offensive gap a candidate covers
pub const OFFENSIVE_HIT_POINTS: f64 = 3.0;
/// Multiplier applied to the candidate's tier score
pub const TIER_WEIGHT: f64 = 1.5;
/// Most defensive points a single candidate can earn
pub const DEFENSIVE_POINT_CAP: u32 = 2;
pub const MAX_SUGGESTIONS: usize = 10;

/// Why a candidate was suggested
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Reason {
    /// Super-effective against a type the team cannot hit
    Hits(Type),
    /// Tier score of at least 4
    TopPick,
    /// Resists a shared team weakness
    Resists(Type),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Hits(t) => write!(f, "Hits {t}"),
            Reason::TopPick => f.write_str("Top Meta Pick"),
            Reason::Resists(t) => write!(f, "Resists {t}"),
        }
    }
}

impl From<Reason> for String {
    fn from(reason: Reason) -> Self {
        reason.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
    pub reasons: Vec<Reason>,
}

/// Everything ranking needs besides the pool.
///
/// `excluded` and `owned` hold lower-case names; `owned` covers roster
/// members and their evolution families.
#[derive(Clone, Copy, Debug)]
pub struct RankContext<'a> {
    pub criteria: &'a SuggestionCriteria,
    pub progression: u8,
    pub excluded: &'a HashSet<String>,
    pub owned: &'a HashSet<String>,
    pub tiers: &'a TierTable,
}

/// Score one candidate, `None` if it is filtered out
pub fn score_candidate(candidate: &Candidate, ctx: &RankContext<'_>) -> Option<ScoredCandidate> {
    if !candidate.is_available(ctx.progression) {
        return None;
    }
    let key = normalize_key(&candidate.name);
    if ctx.owned.contains(&key) || ctx.excluded.contains(&key) {
        return None;
    }

    let mut reasons = Vec::new();

    let mut offensive = 0.0;
    for &gap in &ctx.criteria.hits {
        if hits_super_effectively(&candidate.types, gap) {
            offensive += OFFENSIVE_HIT_POINTS;
            reasons.push(Reason::Hits(gap));
        }
    }

    let tier_score = ctx.tiers.score_of(&candidate.name);
    if tier_score >= TOP_TIER_SCORE {
        reasons.push(Reason::TopPick);
    }

    let mut defensive = 0;
    for &threat in &ctx.criteria.resists {
        if defensive < DEFENSIVE_POINT_CAP && dual_multiplier(threat, &candidate.types).is_resisted() {
            defensive += 1;
            reasons.push(Reason::Resists(threat));
        }
    }

    // Pure walls are not offered while the team still has offensive gaps
    if !ctx.criteria.hits.is_empty() && offensive == 0.0 && tier_score < TOP_TIER_SCORE {
        return None;
    }

    let score = offensive + tier_score * TIER_WEIGHT + f64::from(defensive);
    if score == 0.0 {
        return None;
    }

    Some(ScoredCandidate {
        candidate: candidate.clone(),
        score,
        reasons,
    })
}

/// Filter, score and rank `pool`.
///
/// At most [`MAX_SUGGESTIONS`] entries, best score first, ties by name.
pub fn rank_candidates(pool: &[Candidate], ctx: &RankContext<'_>) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = pool.iter().filter_map(|c| score_candidate(c, ctx)).collect();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.candidate.name.cmp(&b.candidate.name))
    });
    debug!(
        pool = pool.len(),
        eligible = ranked.len(),
        progression = ctx.progression,
        "ranked suggestion candidates"
    );
    ranked.truncate(MAX_SUGGESTIONS);
    ranked
}
