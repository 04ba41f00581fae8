use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use team_engine::gyms::{level_cap, next_gym};
use team_engine::provider::{normalize_key, Evolution};
use team_engine::team::TEAM_SIZE;
use tracing::info;

use super::Context;

#[derive(Args, Debug)]
pub struct TeamArgs {
    #[command(subcommand)]
    pub action: TeamAction,
}

#[derive(Subcommand, Debug)]
pub enum TeamAction {
    /// Look up a creature and put it on the team
    Add {
        name: String,
        /// Slot 1-6; defaults to the first empty one
        #[arg(short, long)]
        slot: Option<usize>,
    },

    /// Empty a slot (1-6). Locked slots are kept.
    Remove { slot: usize },

    /// Toggle the lock on a slot (1-6)
    Lock { slot: usize },

    /// Empty every unlocked slot
    Clear,

    /// Evolve the member in a slot (1-6)
    Evolve {
        slot: usize,
        /// Target species when there is more than one evolution
        #[arg(long)]
        into: Option<String>,
    },

    /// Set the number of badges earned (0-8)
    Badges { count: u8 },

    /// Show the team
    Show,
}

/// Choose the evolution to apply. A single option needs no `into`.
fn pick_evolution<'a>(name: &str, options: &'a [Evolution], into: Option<&str>) -> Result<&'a Evolution> {
    match (options, into) {
        ([], _) => anyhow::bail!("{name} does not evolve"),
        (_, Some(wanted)) => {
            let key = normalize_key(wanted);
            options
                .iter()
                .find(|evo| normalize_key(&evo.name) == key)
                .with_context(|| format!("{name} cannot evolve into {wanted} (options: {})", evolution_names(options)))
        }
        ([only], None) => Ok(only),
        (_, None) => anyhow::bail!(
            "{name} has several evolutions, pick one with --into: {}",
            evolution_names(options)
        ),
    }
}

fn evolution_names(options: &[Evolution]) -> String {
    options.iter().map(|evo| evo.name.as_str()).collect::<Vec<_>>().join(", ")
}

fn describe(evo: &Evolution) -> String {
    match (evo.level, evo.item.as_deref(), evo.trigger.as_deref()) {
        (Some(level), _, _) => format!("{} (Lv {level})", evo.name),
        (None, Some(item), _) => format!("{} ({item})", evo.name),
        (None, None, Some(trigger)) => format!("{} ({trigger})", evo.name),
        (None, None, None) => evo.name.clone(),
    }
}

/// Convert a 1-based slot from the command line
fn slot_index(slot: usize) -> Result<usize> {
    if (1..=TEAM_SIZE).contains(&slot) {
        Ok(slot - 1)
    } else {
        anyhow::bail!("slot must be between 1 and {TEAM_SIZE}, got {slot}")
    }
}

pub async fn execute(ctx: &mut Context, args: TeamArgs) -> Result<()> {
    match args.action {
        TeamAction::Add { name, slot } => {
            let slot = slot.map(slot_index).transpose()?;
            let creature = ctx.require(&name).await?;
            let added = creature.name.clone();
            let placed = ctx
                .state
                .team
                .add(creature, slot)
                .with_context(|| format!("could not add {added}"))?;
            info!(name = %added, slot = placed + 1, "added team member");
            println!("Added {added} to slot {}.", placed + 1);
        }
        TeamAction::Remove { slot } => {
            let idx = slot_index(slot)?;
            match ctx.state.team.remove(idx)? {
                Some(removed) => println!("Removed {} from slot {slot}.", removed.name),
                None if ctx.state.team.is_locked(idx) => println!("Slot {slot} is locked."),
                None => println!("Slot {slot} is already empty."),
            }
        }
        TeamAction::Lock { slot } => {
            let locked = ctx.state.team.toggle_lock(slot_index(slot)?)?;
            println!("Slot {slot} {}.", if locked { "locked" } else { "unlocked" });
        }
        TeamAction::Evolve { slot, into } => {
            let idx = slot_index(slot)?;
            let current = ctx
                .state
                .team
                .slot(idx)
                .with_context(|| format!("slot {slot} is empty"))?;
            let from = current.name.clone();
            let target = pick_evolution(&from, &current.next_evolutions, into.as_deref())?
                .name
                .clone();
            let evolved = ctx.require(&target).await?;
            let to = evolved.name.clone();
            ctx.state.team.replace(idx, evolved)?;
            info!(from = %from, to = %to, slot, "evolved team member");
            println!("{from} evolved into {to}.");
        }
        TeamAction::Clear => {
            ctx.state.team.clear();
            println!("Cleared unlocked slots.");
        }
        TeamAction::Badges { count } => {
            ctx.state.team.set_badges(count);
            println!(
                "Badges: {} (level cap {}).",
                ctx.state.team.badges(),
                level_cap(ctx.state.team.badges())
            );
        }
        TeamAction::Show => {
            show(ctx);
            return Ok(());
        }
    }
    ctx.save()
}

fn show(ctx: &Context) {
    let team = &ctx.state.team;
    println!("\n=== Team ({}/{TEAM_SIZE}) ===", team.len());
    for idx in 0..TEAM_SIZE {
        let lock = if team.is_locked(idx) { "*" } else { " " };
        match team.slot(idx) {
            Some(c) => {
                let types: Vec<&str> = c.types.iter().map(|t| t.name()).collect();
                let tier = c.tier.map_or_else(String::new, |t| format!(" [{t}]"));
                println!("{lock}{}. {:<20} {}{tier}", idx + 1, c.name, types.join("/"));
                if !c.next_evolutions.is_empty() {
                    let next: Vec<String> = c.next_evolutions.iter().map(describe).collect();
                    println!("      evolves into {}", next.join(", "));
                }
            }
            None => println!("{lock}{}. -", idx + 1),
        }
    }

    let badges = team.badges();
    match next_gym(badges) {
        Some(gym) => println!(
            "Badges: {badges}. Next: {} ({} type), level cap {}.",
            gym.name, gym.gym_type, gym.level_cap
        ),
        None => println!("Badges: {badges}. All gyms cleared, level cap {}.", level_cap(badges)),
    }
    if !team.blacklist().is_empty() {
        println!("Blacklist: {}", team.blacklist().join(", "));
    }
}
