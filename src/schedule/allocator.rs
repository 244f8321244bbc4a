//! Time slot allocation for schedule entries

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashMap;

use super::model::{ResolvedTask, TaskOwner};
use super::relative_date::{midnight, resolve};
use crate::advice::ScheduleEntry;
use crate::config::ScheduleConfig;

/// Assigns due dates and times to schedule entries.
///
/// All-day tasks (matched by keyword) land at midnight of their day. Timed
/// tasks on the same day are spaced one interval apart, starting at the
/// first slot, in the order they were listed. Slot bookkeeping lives only
/// for the duration of one [`SlotAllocator::allocate`] call, so tasks from
/// separate calls may share a time.
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    all_day_keywords: Vec<String>,
    first_slot: NaiveTime,
    interval: Duration,
}

impl SlotAllocator {
    pub fn new(all_day_keywords: &[String], first_slot: NaiveTime, interval: Duration) -> Self {
        Self {
            all_day_keywords: all_day_keywords.iter().map(|k| k.to_lowercase()).collect(),
            first_slot,
            interval,
        }
    }

    pub fn from_config(config: &ScheduleConfig) -> Self {
        Self::new(
            &config.all_day_keywords,
            config.first_slot_time(),
            config.slot_interval(),
        )
    }

    /// Whether a task is scheduled for the whole day rather than a time slot
    pub fn is_all_day(&self, task: &str) -> bool {
        let task = task.to_lowercase();
        self.all_day_keywords
            .iter()
            .any(|keyword| task.contains(keyword.as_str()))
    }

    /// Resolve every entry into a task, preserving entry order
    pub fn allocate(
        &self,
        entries: &[ScheduleEntry],
        reference: NaiveDate,
        owner: &TaskOwner,
    ) -> Vec<ResolvedTask> {
        let mut last_slot: HashMap<NaiveDate, NaiveDateTime> = HashMap::new();

        entries
            .iter()
            .map(|entry| {
                let day = resolve(&entry.relative_date, reference);
                let is_all_day = self.is_all_day(&entry.task);

                let due_at = if is_all_day {
                    midnight(day)
                } else {
                    let slot = match last_slot.get(&day) {
                        Some(last) => last.checked_add_signed(self.interval).unwrap_or(*last),
                        None => day.and_time(self.first_slot),
                    };
                    last_slot.insert(day, slot);
                    slot
                };

                ResolvedTask {
                    user_id: owner.user_id.clone(),
                    diagnosis_id: owner.diagnosis_id.clone(),
                    description: owner.describe(&entry.task),
                    details: entry.details.clone(),
                    due_at,
                    is_all_day,
                    is_completed: false,
                    is_follow_up: false,
                }
            })
            .collect()
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::from_config(&ScheduleConfig::default())
    }
}
