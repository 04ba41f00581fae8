use anyhow::Result;
use clap::Args;
use team_engine::radar::{radar_candidates, scan};
use team_engine::SUGGESTION_POOL;

use super::Context;

#[derive(Args, Debug)]
pub struct RadarArgs {
    /// List candidates without resolving them through the provider
    #[arg(long)]
    pub quick: bool,
}

pub async fn execute(ctx: &Context, args: RadarArgs) -> Result<()> {
    let team = &ctx.state.team;
    let settings = &ctx.state.settings;

    if !settings.show_catch_radar {
        println!("Catch radar is disabled in settings.");
        return Ok(());
    }

    let allowed: Vec<String> = settings.allowed_tiers.iter().map(ToString::to_string).collect();
    println!("\n=== Catch Radar ({} badges; tiers {}) ===", team.badges(), allowed.join("/"));

    let candidates = radar_candidates(&SUGGESTION_POOL, team, settings, &ctx.tiers);
    if candidates.is_empty() {
        println!("Nothing worth catching right now.");
        return Ok(());
    }

    if args.quick {
        for (candidate, tier) in &candidates {
            println!("  {:<5} {}", tier.to_string(), candidate.name);
        }
        return Ok(());
    }

    let found = scan(ctx.provider.as_ref(), &SUGGESTION_POOL, team, settings, &ctx.tiers).await;
    for creature in &found {
        let tier = creature.tier.map_or_else(|| "-".to_string(), |t| t.to_string());
        let location = creature.locations.first().map_or("Unknown", String::as_str);
        println!("  {:<5} {:<20} {}", tier, creature.name, location);
    }
    if found.len() < candidates.len() {
        println!("  ({} could not be resolved)", candidates.len() - found.len());
    }
    Ok(())
}
