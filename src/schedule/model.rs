//! Calendar task data model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of the user who owns a task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of the diagnosis a task was generated for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosisId(pub String);

impl fmt::Display for DiagnosisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who a batch of tasks belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOwner {
    pub user_id: UserId,
    pub diagnosis_id: DiagnosisId,

    /// Name of the plant, prefixed to task descriptions when set
    pub plant_label: Option<String>,
}

impl TaskOwner {
    pub fn new(user_id: impl Into<String>, diagnosis_id: impl Into<String>) -> Self {
        Self {
            user_id: UserId(user_id.into()),
            diagnosis_id: DiagnosisId(diagnosis_id.into()),
            plant_label: None,
        }
    }

    pub fn with_plant_label(mut self, label: impl Into<String>) -> Self {
        self.plant_label = Some(label.into());
        self
    }

    /// Task description with the plant label prefixed, if any
    pub fn describe(&self, task: &str) -> String {
        match &self.plant_label {
            Some(label) => format!("{}: {}", label, task),
            None => task.to_string(),
        }
    }
}

/// A schedule entry with an absolute due date, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTask {
    pub user_id: UserId,
    pub diagnosis_id: DiagnosisId,
    pub description: String,
    pub details: String,

    /// Local due time; midnight for all-day tasks
    pub due_at: NaiveDateTime,

    pub is_all_day: bool,

    #[serde(default)]
    pub is_completed: bool,

    #[serde(default)]
    pub is_follow_up: bool,
}

impl ResolvedTask {
    /// Format as a single display line
    pub fn to_line(&self) -> String {
        let when = if self.is_all_day {
            format!("{} (all day)", self.due_at.format("%Y-%m-%d"))
        } else {
            self.due_at.format("%Y-%m-%d %H:%M").to_string()
        };
        let check = if self.is_completed { "[x]" } else { "[ ]" };
        format!("{} {}  {}", check, when, self.description)
    }
}
