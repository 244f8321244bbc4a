//! Advice data model

use serde::{Deserialize, Serialize};

/// Sentinel shown in place of a section the AI response did not contain
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the generated treatment schedule, before date resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Relative date phrase as written, e.g. "Day 7 (Week 1)"
    pub relative_date: String,

    /// What to do
    pub task: String,

    /// How to do it
    pub details: String,
}

impl ScheduleEntry {
    pub fn new(
        relative_date: impl Into<String>,
        task: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            relative_date: relative_date.into(),
            task: task.into(),
            details: details.into(),
        }
    }
}

/// Structured treatment advice for a single diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionBundle {
    pub description: String,
    pub treatment: String,
    pub prevention: String,

    /// Schedule rows in the order they appeared in the source table
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

impl SuggestionBundle {
    /// Canned advice for a plant classified as healthy
    pub fn healthy() -> Self {
        Self {
            description: "This plant appears to be healthy.".to_string(),
            treatment: "No treatment is necessary. Continue to monitor its condition and provide proper care.".to_string(),
            prevention: "Maintain a regular watering schedule and ensure the plant gets adequate sunlight.".to_string(),
            schedule: Vec::new(),
        }
    }

    /// Placeholder returned when the advice service could not be reached
    pub fn unavailable() -> Self {
        Self {
            description: "Error fetching details.".to_string(),
            treatment: String::new(),
            prevention: String::new(),
            schedule: Vec::new(),
        }
    }

    /// Render as the markdown layout the advice service is asked to produce
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("### Description\n{}\n\n", self.description));
        output.push_str(&format!("### Treatment Plan\n{}\n\n", self.treatment));
        output.push_str(&format!("### Prevention\n{}\n\n", self.prevention));
        output.push_str("### Generated Treatment Schedule\n");
        output.push_str("| Date (Relative) | Task | Details |\n");
        output.push_str("|---|---|---|\n");
        for entry in &self.schedule {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&entry.relative_date),
                escape_cell(&entry.task),
                escape_cell(&entry.details)
            ));
        }
        output
    }
}

/// Keep a value inside one table cell on a single line
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
