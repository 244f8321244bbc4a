//! `leafcare init` command implementation

use anyhow::Result;
use clap::Args;

use crate::config::{config_path, load_config, save_config, Config};

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file with the defaults
    #[arg(long)]
    force: bool,
}

pub async fn run(args: InitArgs) -> Result<()> {
    let path = config_path()?;

    if !args.force && load_config()?.is_some() {
        println!("Config already exists at {}", path.display());
        println!("Use --force to reset it to the defaults");
        return Ok(());
    }

    save_config(&Config::default())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
