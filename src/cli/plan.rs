//! `leafcare plan` command implementation

use anyhow::Result;
use chrono::NaiveTime;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::advice::build_bundle;
use crate::config::Config;
use crate::schedule::{
    follow_up_task, Clock, FixedClock, ResolvedTask, SlotAllocator, SystemClock, TaskOwner,
};
use crate::store::{JsonTaskStore, TaskStore};

#[derive(Args)]
pub struct PlanArgs {
    /// File holding the raw advice response (`-` for stdin)
    file: PathBuf,

    /// Owning user ID
    #[arg(long)]
    user: String,

    /// Diagnosis the schedule belongs to
    #[arg(long)]
    diagnosis: String,

    /// Plant name prefixed to task descriptions
    #[arg(long)]
    plant: Option<String>,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Also schedule a follow-up photo reminder
    #[arg(long)]
    follow_up: bool,

    /// Write the tasks to the task store
    #[arg(long)]
    save: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PlannedTaskJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(flatten)]
    task: &'a ResolvedTask,
}

pub async fn run(config: &Config, args: PlanArgs) -> Result<()> {
    let raw = super::read_input(&args.file)?;
    let bundle = build_bundle(&raw);

    let clock: Box<dyn Clock> = match &args.date {
        Some(date) => Box::new(FixedClock(super::parse_date(date)?.and_time(NaiveTime::MIN))),
        None => Box::new(SystemClock),
    };
    let now = clock.now();

    let mut owner = TaskOwner::new(&args.user, &args.diagnosis);
    if let Some(plant) = &args.plant {
        owner = owner.with_plant_label(plant);
    }

    let allocator = SlotAllocator::from_config(&config.schedule);
    let mut tasks = allocator.allocate(&bundle.schedule, now.date(), &owner);
    if args.follow_up {
        tasks.push(follow_up_task(&owner, now, config.schedule.follow_up_days));
    }

    if tasks.is_empty() {
        println!("No schedule rows found");
        return Ok(());
    }

    let mut saved_to = None;
    let ids: Vec<Option<String>> = if args.save {
        let store = JsonTaskStore::from_config(&config.store)?;
        let ids = store
            .insert_many(&tasks)?
            .iter()
            .map(|record| Some(record.id.to_string()))
            .collect();
        saved_to = Some(store.path().to_path_buf());
        ids
    } else {
        vec![None; tasks.len()]
    };

    if args.json {
        let out: Vec<PlannedTaskJson> = tasks
            .iter()
            .zip(ids)
            .map(|(task, id)| PlannedTaskJson { id, task })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Tasks ({}):\n", tasks.len());
    for task in &tasks {
        println!("{}", task.to_line());
    }
    if let Some(path) = saved_to {
        println!("\nSaved {} tasks to {}", tasks.len(), path.display());
    }

    Ok(())
}
