//! Top-level command line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::init::InitArgs;
use super::insights::{CompareArgs, NewsArgs};
use super::parse::ParseArgs;
use super::plan::PlanArgs;
use super::suggest::SuggestArgs;
use super::tasks::TasksCommands;

#[derive(Parser)]
#[command(name = "leafcare")]
#[command(version)]
#[command(about = "Turn AI plant-treatment advice into a dated task calendar")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init(InitArgs),

    /// Extract sections and schedule rows from a saved advice response
    Parse(ParseArgs),

    /// Ask the advice service for a treatment plan
    Suggest(SuggestArgs),

    /// Turn an advice response into dated tasks
    Plan(PlanArgs),

    /// Manage stored tasks
    Tasks {
        #[command(subcommand)]
        command: TasksCommands,
    },

    /// Fetch a cultivation news item
    News(NewsArgs),

    /// Summarise progress between two diagnoses
    Compare(CompareArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
