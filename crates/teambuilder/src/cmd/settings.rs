use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use team_engine::settings::Settings;
use team_engine::Tier;
use tracing::info;

use super::Context;

#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Turn the catch radar on or off
    Radar { state: Switch },

    /// Change a single radar tier
    Tier {
        #[command(subcommand)]
        action: TierAction,
    },

    /// Replace the radar tiers, e.g. `tiers OU UU`
    Tiers {
        #[arg(required = true)]
        tiers: Vec<Tier>,
    },

    /// Show current settings
    Show,
}

#[derive(Subcommand, Debug)]
pub enum TierAction {
    /// Allow the tier if it is hidden, hide it otherwise
    Toggle { tier: Tier },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

fn tier_list(settings: &Settings) -> String {
    if settings.allowed_tiers.is_empty() {
        return "none".to_string();
    }
    settings
        .allowed_tiers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Apply a change and describe the result. `None` for read-only actions.
fn apply(settings: &mut Settings, action: SettingsAction) -> Option<String> {
    match action {
        SettingsAction::Radar { state } => {
            let on = state == Switch::On;
            if settings.show_catch_radar != on {
                settings.toggle_catch_radar();
            }
            Some(format!("Catch radar {}.", if on { "enabled" } else { "disabled" }))
        }
        SettingsAction::Tier {
            action: TierAction::Toggle { tier },
        } => {
            let allowed = settings.toggle_tier(tier);
            Some(format!("{tier} {}.", if allowed { "allowed" } else { "hidden" }))
        }
        SettingsAction::Tiers { tiers } => {
            settings.set_allowed_tiers(tiers);
            Some(format!("Radar tiers: {}.", tier_list(settings)))
        }
        SettingsAction::Show => None,
    }
}

pub fn execute(ctx: &mut Context, args: SettingsArgs) -> Result<()> {
    let Some(message) = apply(&mut ctx.state.settings, args.action) else {
        let settings = &ctx.state.settings;
        println!("Catch radar: {}", if settings.show_catch_radar { "on" } else { "off" });
        println!("Radar tiers: {}", tier_list(settings));
        return Ok(());
    };
    info!(settings = ?ctx.state.settings, "settings changed");
    println!("{message}");
    ctx.save()
}
