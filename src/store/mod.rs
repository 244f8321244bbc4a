//! Task persistence
//!
//! The scheduling core only produces [`ResolvedTask`] values; this module
//! stores them and serves them back for the calendar.

pub mod error;
pub mod json;

pub use error::StoreError;
pub use json::JsonTaskStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::{DiagnosisId, ResolvedTask, UserId};

/// A stored task with its identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub task: ResolvedTask,
}

impl TaskRecord {
    pub fn new(task: ResolvedTask) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            task,
        }
    }
}

/// Persistence collaborator for dated tasks.
///
/// Mutations are scoped to the owning user; a task belonging to someone
/// else is reported as [`StoreError::NotFound`].
pub trait TaskStore {
    /// Store a batch of tasks, returning the created records in input order
    fn insert_many(&self, tasks: &[ResolvedTask]) -> error::Result<Vec<TaskRecord>>;

    /// All tasks of a user, ordered by due time
    fn list_for_user(&self, user: &UserId) -> error::Result<Vec<TaskRecord>>;

    /// Flip the completion flag, returning the new value
    fn toggle_completed(&self, user: &UserId, id: Uuid) -> error::Result<bool>;

    fn delete(&self, user: &UserId, id: Uuid) -> error::Result<()>;

    /// Remove every task generated for a diagnosis, returning how many went
    fn delete_for_diagnosis(
        &self,
        user: &UserId,
        diagnosis: &DiagnosisId,
    ) -> error::Result<usize>;
}

/// Calendar feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,

    /// ISO 8601 local date-time
    pub start: String,

    pub all_day: bool,
}

impl From<&TaskRecord> for CalendarEvent {
    fn from(record: &TaskRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.task.description.clone(),
            start: record.task.due_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            all_day: record.task.is_all_day,
        }
    }
}

pub fn calendar_events(records: &[TaskRecord]) -> Vec<CalendarEvent> {
    records.iter().map(CalendarEvent::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_calendar_event_from_record() {
        let task = ResolvedTask {
            user_id: UserId("u".to_string()),
            diagnosis_id: DiagnosisId("d".to_string()),
            description: "Banana: Spray".to_string(),
            details: String::new(),
            due_at: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
            is_all_day: false,
            is_completed: false,
            is_follow_up: false,
        };
        let record = TaskRecord::new(task);
        let events = calendar_events(std::slice::from_ref(&record));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, record.id.to_string());
        assert_eq!(events[0].title, "Banana: Spray");
        assert_eq!(events[0].start, "2026-08-01T09:15:00");
        assert!(!events[0].all_day);

        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["allDay"], false);
    }

    #[test]
    fn test_record_flattens_task_fields() {
        let task = ResolvedTask {
            user_id: UserId("u".to_string()),
            diagnosis_id: DiagnosisId("d".to_string()),
            description: "Monitor".to_string(),
            details: String::new(),
            due_at: NaiveDate::from_ymd_opt(2026, 8, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            is_all_day: true,
            is_completed: false,
            is_follow_up: false,
        };
        let json = serde_json::to_value(TaskRecord::new(task)).unwrap();
        assert_eq!(json["description"], "Monitor");
        assert_eq!(json["is_all_day"], true);
        assert!(json.get("task").is_none());
    }
}
