//! Treatment advice extraction
//!
//! Turns a free-text AI response into a [`SuggestionBundle`]:
//! - Split the response into its labeled sections
//! - Parse the schedule table into ordered entries

pub mod model;
pub mod sections;
pub mod table;

pub use model::{ScheduleEntry, SuggestionBundle, NOT_AVAILABLE};
pub use sections::{extract, ExtractedSections, HeaderSchema, SectionText, Tail};
pub use table::parse_rows;

/// Build a bundle from a raw advice response.
///
/// Pure function of its input: missing sections become "N/A" and a missing
/// schedule section yields an empty schedule.
pub fn build_bundle(raw: &str) -> SuggestionBundle {
    let sections = extract(raw);
    let schedule = sections
        .schedule
        .as_str()
        .map(parse_rows)
        .unwrap_or_default();

    SuggestionBundle {
        description: sections.description.or_sentinel(),
        treatment: sections.treatment.or_sentinel(),
        prevention: sections.prevention.or_sentinel(),
        schedule,
    }
}
