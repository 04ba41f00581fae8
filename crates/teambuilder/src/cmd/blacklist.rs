use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;

#[derive(Args, Debug)]
pub struct BlacklistArgs {
    #[command(subcommand)]
    pub action: BlacklistAction,
}

#[derive(Subcommand, Debug)]
pub enum BlacklistAction {
    /// Never suggest this name
    Add { name: String },

    /// Allow a blacklisted name again
    Remove { name: String },

    /// Show blacklisted names
    List,
}

pub fn execute(ctx: &mut Context, args: BlacklistArgs) -> Result<()> {
    match args.action {
        BlacklistAction::Add { name } => {
            ctx.state.team.blacklist_add(&name);
            println!("{name} will no longer be suggested.");
        }
        BlacklistAction::Remove { name } => {
            if ctx.state.team.blacklist_remove(&name) {
                println!("{name} removed from the blacklist.");
            } else {
                println!("{name} was not blacklisted.");
            }
        }
        BlacklistAction::List => {
            let names = ctx.state.team.blacklist();
            if names.is_empty() {
                println!("The blacklist is empty.");
            } else {
                for name in names {
                    println!("  {name}");
                }
            }
            return Ok(());
        }
    }
    ctx.save()
}
