use anyhow::Result;
use clap::Args;
use team_engine::team::TEAM_SIZE;
use team_engine::{Suggester, SuggestionOutcome};
use tracing::warn;

use super::Context;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Print suggestions as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(ctx: &Context, args: SuggestArgs) -> Result<()> {
    let team = &ctx.state.team;
    let suggester = Suggester::new(ctx.provider.clone(), ctx.tiers.clone());

    let suggestions = match suggester.suggest(team).await {
        SuggestionOutcome::Ready(list) => list,
        SuggestionOutcome::Superseded => {
            warn!("suggestion request was superseded");
            return Ok(());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if team.is_empty() {
        println!("Add a team member first (`teambuilder team add <name>`).");
        return Ok(());
    }
    if team.len() >= TEAM_SIZE {
        println!("The team is full.");
        return Ok(());
    }
    if suggestions.is_empty() {
        println!("No suggestions available yet for {} badge(s).", team.badges());
        return Ok(());
    }

    println!("\n=== Suggestions ({} badges) ===", team.badges());
    for (rank, s) in suggestions.iter().enumerate() {
        let tier = s.display_tier.map_or_else(|| "-".to_string(), |t| t.to_string());
        let reasons: Vec<String> = s.reasons.iter().map(ToString::to_string).collect();
        println!(
            "{:>2}. {:<20} {:<5} {:>6.2}  {}",
            rank + 1,
            s.creature.name,
            tier,
            s.score,
            reasons.join(", ")
        );
        if let Some(location) = s.location.as_deref().or_else(|| s.creature.locations.first().map(String::as_str)) {
            println!("      Location: {location}");
        }
        if let Some(note) = &s.note {
            println!("      Note: {note}");
        }
    }
    Ok(())
}
