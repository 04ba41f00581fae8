//! Team builder command line.
//!
//! Keeps a six-slot team on disk, explains its type coverage and suggests
//! creatures that patch the gaps.
//!
//! Usage:
//!   teambuilder team add corviknight
//!   teambuilder team badges 3
//!   teambuilder analyze
//!   teambuilder analyze --type fire --type water/ground
//!   teambuilder suggest --json
//!   teambuilder --offline radar
//!   teambuilder settings tiers OU UU RU

mod cmd;
mod config;
mod logging;
mod store;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use cmd::{analyze, blacklist, gyms, matchup, radar, search, settings, suggest, team, Context};
use tracing::debug;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "teambuilder", version, about)]
struct Cli {
    /// Config file (default: ./teambuilder.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use bundled data instead of the remote API
    #[arg(long, global = true)]
    offline: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Weaknesses, resistances and coverage gaps
    Analyze(analyze::AnalyzeArgs),

    /// Ranked suggestions for the stored team
    Suggest(suggest::SuggestArgs),

    /// Tiered creatures catchable at the current progression
    Radar(radar::RadarArgs),

    /// Edit or show the stored team
    Team(team::TeamArgs),

    /// Names that are never suggested
    Blacklist(blacklist::BlacklistArgs),

    /// Catch radar preferences
    Settings(settings::SettingsArgs),

    /// Search creature names by prefix
    Search(search::SearchArgs),

    /// Gym leaders and level caps
    Gyms(gyms::GymsArgs),

    /// Raw type matchup, e.g. `matchup ice water/ground`
    Matchup(matchup::MatchupArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // Require explicit subcommand to avoid flag ambiguity at the root.
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    // The calculator needs neither config nor state
    let command = match command {
        Commands::Matchup(args) => return matchup::execute(args),
        other => other,
    };

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.offline {
        config.provider.offline = true;
    }
    debug!(?config, "configuration resolved");

    let mut ctx = Context::new(&config)?;
    match command {
        Commands::Analyze(args) => analyze::execute(&ctx, args),
        Commands::Suggest(args) => suggest::execute(&ctx, args).await,
        Commands::Radar(args) => radar::execute(&ctx, args).await,
        Commands::Team(args) => team::execute(&mut ctx, args).await,
        Commands::Blacklist(args) => blacklist::execute(&mut ctx, args),
        Commands::Settings(args) => settings::execute(&mut ctx, args),
        Commands::Search(args) => search::execute(&ctx, args).await,
        Commands::Gyms(args) => gyms::execute(&ctx, args),
        Commands::Matchup(args) => matchup::execute(args),
    }
}
