//! `leafcare tasks` subcommands implementation

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::config::Config;
use crate::schedule::{follow_up_task, Clock, DiagnosisId, SystemClock, TaskOwner, UserId};
use crate::store::{calendar_events, JsonTaskStore, TaskStore};

#[derive(Subcommand)]
pub enum TasksCommands {
    /// List a user's tasks
    List(TasksListArgs),

    /// Toggle a task between done and not done
    Toggle(TaskRefArgs),

    /// Delete a task
    Delete(TaskRefArgs),

    /// Schedule a follow-up photo reminder
    FollowUp(FollowUpArgs),

    /// Delete every task generated for a diagnosis
    Purge(PurgeArgs),

    /// Print a user's tasks as calendar events (JSON)
    Calendar(CalendarArgs),
}

#[derive(Args)]
pub struct TasksListArgs {
    /// Owning user ID
    #[arg(long)]
    user: String,

    /// Hide completed tasks
    #[arg(long)]
    pending: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct TaskRefArgs {
    /// Task ID
    id: String,

    /// Owning user ID
    #[arg(long)]
    user: String,
}

#[derive(Args)]
pub struct FollowUpArgs {
    /// Owning user ID
    #[arg(long)]
    user: String,

    /// Diagnosis to follow up on
    #[arg(long)]
    diagnosis: String,

    /// Plant name
    #[arg(long)]
    plant: Option<String>,

    /// Days from today (defaults to the configured follow_up_days)
    #[arg(long)]
    days: Option<u32>,
}

#[derive(Args)]
pub struct PurgeArgs {
    /// Owning user ID
    #[arg(long)]
    user: String,

    /// Diagnosis whose tasks to delete
    #[arg(long)]
    diagnosis: String,
}

#[derive(Args)]
pub struct CalendarArgs {
    /// Owning user ID
    #[arg(long)]
    user: String,
}

pub async fn run(config: &Config, command: TasksCommands) -> Result<()> {
    let store = JsonTaskStore::from_config(&config.store)?;

    match command {
        TasksCommands::List(args) => run_list(&store, args),
        TasksCommands::Toggle(args) => run_toggle(&store, args),
        TasksCommands::Delete(args) => run_delete(&store, args),
        TasksCommands::FollowUp(args) => run_follow_up(&store, config, args),
        TasksCommands::Purge(args) => run_purge(&store, args),
        TasksCommands::Calendar(args) => run_calendar(&store, args),
    }
}

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id.trim()).with_context(|| format!("Invalid task ID: {}", id))
}

fn run_list(store: &dyn TaskStore, args: TasksListArgs) -> Result<()> {
    let mut records = store.list_for_user(&UserId(args.user))?;
    if args.pending {
        records.retain(|r| !r.task.is_completed);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    println!("Tasks ({}):\n", records.len());
    for record in &records {
        println!("{}  {}", record.id, record.task.to_line());
    }
    Ok(())
}

fn run_toggle(store: &dyn TaskStore, args: TaskRefArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    let completed = store.toggle_completed(&UserId(args.user), id)?;
    println!(
        "Task {} marked {}",
        id,
        if completed { "done" } else { "not done" }
    );
    Ok(())
}

fn run_delete(store: &dyn TaskStore, args: TaskRefArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    store.delete(&UserId(args.user), id)?;
    println!("Deleted task {}", id);
    Ok(())
}

fn run_follow_up(store: &dyn TaskStore, config: &Config, args: FollowUpArgs) -> Result<()> {
    let mut owner = TaskOwner::new(args.user, args.diagnosis);
    if let Some(plant) = args.plant {
        owner = owner.with_plant_label(plant);
    }

    let days = args.days.unwrap_or(config.schedule.follow_up_days);
    let task = follow_up_task(&owner, SystemClock.now(), days);
    let created = store.insert_many(std::slice::from_ref(&task))?;

    for record in &created {
        println!("Scheduled: {}  {}", record.id, record.task.to_line());
    }
    Ok(())
}

fn run_purge(store: &dyn TaskStore, args: PurgeArgs) -> Result<()> {
    let removed =
        store.delete_for_diagnosis(&UserId(args.user), &DiagnosisId(args.diagnosis.clone()))?;
    println!("Deleted {} tasks for diagnosis {}", removed, args.diagnosis);
    Ok(())
}

fn run_calendar(store: &dyn TaskStore, args: CalendarArgs) -> Result<()> {
    let records = store.list_for_user(&UserId(args.user))?;
    println!("{}", serde_json::to_string_pretty(&calendar_events(&records))?);
    Ok(())
}
