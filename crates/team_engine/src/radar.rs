//! Catch radar: tiered pool entries obtainable at the current progression.

use futures::future::join_all;
use tracing::debug;

use crate::pool::Candidate;
use crate::provider::{normalize_key, Creature, CreatureProvider};
use crate::settings::Settings;
use crate::team::Team;
use crate::tiers::{Tier, TierTable};

/// Gate assumed for candidates without one, i.e. never obtainable
const UNGATED: u8 = 99;

/// Pool entries worth catching now, best tier first then by name.
///
/// Skips names already on the team, candidates gated above the team's
/// badges and anything whose tier is not in `settings.allowed_tiers`.
pub fn radar_candidates<'p>(
    pool: &'p [Candidate],
    team: &Team,
    settings: &Settings,
    tiers: &TierTable,
) -> Vec<(&'p Candidate, Tier)> {
    if !settings.show_catch_radar {
        return Vec::new();
    }
    let on_team: Vec<String> = team.members().iter().map(|c| normalize_key(&c.name)).collect();

    let mut found: Vec<(&Candidate, Tier)> = pool
        .iter()
        .filter(|c| !on_team.contains(&normalize_key(&c.name)))
        .filter(|c| c.min_badge.unwrap_or(UNGATED) <= team.badges())
        .filter_map(|c| tiers.tier_of(&c.name).map(|tier| (c, tier)))
        .filter(|(_, tier)| settings.allows(*tier))
        .collect();

    found.sort_by(|(a, ta), (b, tb)| {
        tb.score()
            .total_cmp(&ta.score())
            .then_with(|| a.name.cmp(&b.name))
    });
    found
}

/// Resolve radar candidates through the provider, dropping failures
pub async fn scan<P: CreatureProvider>(
    provider: &P,
    pool: &[Candidate],
    team: &Team,
    settings: &Settings,
    tiers: &TierTable,
) -> Vec<Creature> {
    let candidates = radar_candidates(pool, team, settings, tiers);
    let resolved = join_all(candidates.iter().map(|(c, _)| provider.resolve(&c.name))).await;
    let hits: Vec<Creature> = resolved.into_iter().filter_map(|r| r.ok().flatten()).collect();
    debug!(candidates = candidates.len(), resolved = hits.len(), "catch radar scan");
    hits
}
