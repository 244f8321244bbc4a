//! `leafcare news` and `leafcare compare` command implementations

use anyhow::Result;
use clap::Args;

use crate::advisor::{compare_diagnoses, fetch_news, DiagnosisSummary, GeminiClient};
use crate::config::Config;

#[derive(Args)]
pub struct NewsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Original diagnosis name
    #[arg(long)]
    before: String,

    /// Original classifier confidence (percent)
    #[arg(long)]
    before_confidence: f32,

    /// Follow-up diagnosis name
    #[arg(long)]
    after: String,

    /// Follow-up classifier confidence (percent)
    #[arg(long)]
    after_confidence: f32,
}

pub async fn run_news(config: &Config, args: NewsArgs) -> Result<()> {
    let client = GeminiClient::from_config(&config.advisor)?;
    let item = fetch_news(&client).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("{}\n\n{}", item.headline, item.summary);
    }
    Ok(())
}

pub async fn run_compare(config: &Config, args: CompareArgs) -> Result<()> {
    let client = GeminiClient::from_config(&config.advisor)?;
    let before = DiagnosisSummary::new(args.before, args.before_confidence);
    let after = DiagnosisSummary::new(args.after, args.after_confidence);

    println!("{}", compare_diagnoses(&client, &before, &after).await);
    Ok(())
}
