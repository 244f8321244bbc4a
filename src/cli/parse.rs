//! `leafcare parse` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::advice::build_bundle;

#[derive(Args)]
pub struct ParseArgs {
    /// File holding the raw advice response (`-` for stdin)
    file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: ParseArgs) -> Result<()> {
    let raw = super::read_input(&args.file)?;
    let bundle = build_bundle(&raw);
    super::print_bundle(&bundle, args.json)
}
