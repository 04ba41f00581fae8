use anyhow::Result;
use clap::Args;
use team_engine::gyms::{next_gym, GYM_LEADERS};

use super::Context;

#[derive(Args, Debug)]
pub struct GymsArgs {
    /// Include each leader's advice
    #[arg(short, long)]
    pub advice: bool,
}

pub fn execute(ctx: &Context, args: GymsArgs) -> Result<()> {
    let next = next_gym(ctx.state.team.badges()).map(|g| g.badge);

    println!("\n=== Gym Leaders ===");
    for gym in GYM_LEADERS.iter() {
        let marker = if Some(gym.badge) == next { ">" } else { " " };
        println!(
            "{marker}{}. {:<10} {:<9} ace {:<12} cap {}",
            gym.badge,
            gym.name,
            gym.gym_type.name(),
            gym.ace,
            gym.level_cap
        );
        if args.advice {
            println!("      {}", gym.advice);
        }
    }
    Ok(())
}
