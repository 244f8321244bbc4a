//! Follow-up reminders after a treatment plan

use chrono::{Days, NaiveDateTime};

use super::model::{ResolvedTask, TaskOwner};
use super::relative_date::midnight;

const DEFAULT_PLANT_LABEL: &str = "Plant";

/// An all-day reminder to re-photograph the plant `days` after `now`
pub fn follow_up_task(owner: &TaskOwner, now: NaiveDateTime, days: u32) -> ResolvedTask {
    let today = now.date();
    let due = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(today);
    let label = owner.plant_label.as_deref().unwrap_or(DEFAULT_PLANT_LABEL);

    ResolvedTask {
        user_id: owner.user_id.clone(),
        diagnosis_id: owner.diagnosis_id.clone(),
        description: format!("Follow-up for: {}", label),
        details: "Upload a new photo to check treatment progress.".to_string(),
        due_at: midnight(due),
        is_all_day: true,
        is_completed: false,
        is_follow_up: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_follow_up_is_all_day_a_week_out() {
        let now = NaiveDate::from_ymd_opt(2026, 6, 28)
            .unwrap()
            .and_hms_opt(16, 20, 0)
            .unwrap();
        let task = follow_up_task(&TaskOwner::new("u", "d"), now, 7);

        assert_eq!(
            task.due_at,
            NaiveDate::from_ymd_opt(2026, 7, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert!(task.is_all_day);
        assert!(task.is_follow_up);
        assert_eq!(task.description, "Follow-up for: Plant");
    }

    #[test]
    fn test_follow_up_uses_plant_label() {
        let now = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let owner = TaskOwner::new("u", "d").with_plant_label("North field");
        let task = follow_up_task(&owner, now, 3);
        assert_eq!(task.description, "Follow-up for: North field");
        assert_eq!(task.due_at.date(), NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
    }
}
