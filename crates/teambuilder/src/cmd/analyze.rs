use anyhow::{Context as _, Result};
use clap::Args;
use team_engine::analysis::{shared_weaknesses, Advice};
use team_engine::{analyze_team, TypeProfile};

use super::Context;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Roster member types, e.g. `--type fire --type water/ground`.
    /// Defaults to the stored team.
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(ctx: &Context, args: AnalyzeArgs) -> Result<()> {
    let roster = if args.types.is_empty() {
        ctx.state.team.profiles()
    } else {
        args.types
            .iter()
            .map(|s| TypeProfile::parse(s).with_context(|| format!("bad type profile `{s}`")))
            .collect::<Result<Vec<_>>>()?
    };

    let analysis = analyze_team(&roster);

    if args.json {
        let criteria = team_engine::suggestion_criteria(&analysis);
        let out = serde_json::json!({
            "weaknesses": analysis.weaknesses,
            "resistances": analysis.resistances,
            "offensive_coverage": analysis.offensive_coverage.to_vec(),
            "missing_coverage": analysis.missing_coverage.to_vec(),
            "criteria": criteria,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("\n=== Team Analysis ({} members) ===", roster.len());

    let shared = shared_weaknesses(&analysis);
    if shared.is_empty() {
        println!("No shared weaknesses.");
    } else {
        println!("Shared weaknesses:");
        for (t, count) in &shared {
            println!("  {:<9} x{count}   {}", t.name(), Advice::Resist(*t));
        }
    }

    let resisted: Vec<String> = analysis
        .resistances
        .iter()
        .filter(|&(_, n)| n > 0)
        .map(|(t, n)| format!("{t} x{n}"))
        .collect();
    if !resisted.is_empty() {
        println!("Resistances: {}", resisted.join(", "));
    }

    let covered: Vec<&str> = analysis.offensive_coverage.types().map(|t| t.name()).collect();
    println!("Hits super-effectively: {}", list_or_none(&covered));

    let missing: Vec<&str> = analysis.missing_coverage.types().map(|t| t.name()).collect();
    println!("Coverage gaps: {}", list_or_none(&missing));
    for t in analysis.missing_coverage.types().take(3) {
        println!("  {}", Advice::Hit(t));
    }
    Ok(())
}

fn list_or_none(names: &[&str]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
