use anyhow::Result;
use clap::Args;
use team_engine::provider::search_names;

use super::Context;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Start of the name
    pub prefix: String,

    /// Maximum number of names to list
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

pub async fn execute(ctx: &Context, args: SearchArgs) -> Result<()> {
    let names = search_names(ctx.provider.as_ref(), &args.prefix, args.limit).await;
    if names.is_empty() {
        println!("No names match `{}`.", args.prefix);
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
