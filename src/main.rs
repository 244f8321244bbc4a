//! leafcare - Turn AI plant-treatment advice into a dated task calendar

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use leafcare::cli::{self, Cli, Commands};
use leafcare::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("LEAFCARE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("leafcare=debug")
            .init();
    }

    let cli = Cli::parse();

    // Commands that don't need configuration.
    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "leafcare", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Init(args) => return cli::init::run(args).await,
        Commands::Parse(args) => return cli::parse::run(args).await,
        _ => {}
    }

    let config = Config::load()?;

    match cli.command {
        Commands::Suggest(args) => cli::suggest::run(&config, args).await,
        Commands::Plan(args) => cli::plan::run(&config, args).await,
        Commands::Tasks { command } => cli::tasks::run(&config, command).await,
        Commands::News(args) => cli::insights::run_news(&config, args).await,
        Commands::Compare(args) => cli::insights::run_compare(&config, args).await,
        Commands::Completion { .. } | Commands::Init(_) | Commands::Parse(_) => unreachable!(),
    }
}
