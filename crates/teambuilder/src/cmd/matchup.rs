use anyhow::{Context as _, Result};
use clap::Args;
use team_engine::calc::{resistances, weaknesses};
use team_engine::{dual_multiplier, Type, TypeProfile};

#[derive(Args, Debug)]
pub struct MatchupArgs {
    /// Attacking type
    pub attacker: String,

    /// Defending type or pair, e.g. `water/ground`
    pub defender: String,

    /// Also list every weakness and resistance of the defender
    #[arg(short, long)]
    pub full: bool,
}

pub fn execute(args: MatchupArgs) -> Result<()> {
    let attacker =
        Type::from_str(&args.attacker).with_context(|| format!("unknown type `{}`", args.attacker))?;
    let defender = TypeProfile::parse(&args.defender)
        .with_context(|| format!("bad defending types `{}`", args.defender))?;

    let mult = dual_multiplier(attacker, &defender);
    println!("{attacker} -> {}: {}", describe(&defender), mult);

    if args.full {
        let weak: Vec<String> = weaknesses(&defender)
            .into_iter()
            .map(|(t, m)| format!("{t} {m}"))
            .collect();
        let resist: Vec<String> = resistances(&defender)
            .into_iter()
            .map(|(t, m)| format!("{t} {m}"))
            .collect();
        println!("Weak to: {}", weak.join(", "));
        println!("Resists: {}", resist.join(", "));
    }
    Ok(())
}

fn describe(profile: &TypeProfile) -> String {
    profile.iter().map(|t| t.name()).collect::<Vec<_>>().join("/")
}
