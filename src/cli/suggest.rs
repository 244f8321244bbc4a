//! `leafcare suggest` command implementation

use anyhow::Result;
use clap::Args;

use crate::advisor::{suggest_treatment, GeminiClient};
use crate::config::Config;

#[derive(Args)]
pub struct SuggestArgs {
    /// Disease name as reported by the classifier
    disease: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(config: &Config, args: SuggestArgs) -> Result<()> {
    let client = GeminiClient::from_config(&config.advisor)?;
    let bundle = suggest_treatment(&client, &args.disease).await;
    super::print_bundle(&bundle, args.json)
}
