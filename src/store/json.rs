//! JSON file task store

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

use super::error::{Result, StoreError};
use super::{TaskRecord, TaskStore};
use crate::config::StoreConfig;
use crate::schedule::{DiagnosisId, ResolvedTask, UserId};

/// Keeps every task in a single JSON array on disk
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> anyhow::Result<Self> {
        Ok(Self::new(config.tasks_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<TaskRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, records: &[TaskRecord]) -> Result<()> {
        if self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        } else if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Load, apply `f` to the task owned by `user` with `id`, and save
    fn update<T>(
        &self,
        user: &UserId,
        id: Uuid,
        f: impl FnOnce(&mut Vec<TaskRecord>, usize) -> T,
    ) -> Result<T> {
        let mut records = self.load()?;
        let idx = records
            .iter()
            .position(|r| r.id == id && &r.task.user_id == user)
            .ok_or(StoreError::NotFound(id))?;

        let value = f(&mut records, idx);
        self.save(&records)?;
        Ok(value)
    }
}

impl TaskStore for JsonTaskStore {
    fn insert_many(&self, tasks: &[ResolvedTask]) -> Result<Vec<TaskRecord>> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let mut records = self.load()?;
        let created: Vec<TaskRecord> = tasks.iter().cloned().map(TaskRecord::new).collect();
        records.extend(created.iter().cloned());
        self.save(&records)?;

        info!("Stored {} tasks in {:?}", created.len(), self.path);
        Ok(created)
    }

    fn list_for_user(&self, user: &UserId) -> Result<Vec<TaskRecord>> {
        let mut records: Vec<TaskRecord> = self
            .load()?
            .into_iter()
            .filter(|r| &r.task.user_id == user)
            .collect();
        records.sort_by_key(|r| r.task.due_at);
        Ok(records)
    }

    fn toggle_completed(&self, user: &UserId, id: Uuid) -> Result<bool> {
        self.update(user, id, |records, idx| {
            let task = &mut records[idx].task;
            task.is_completed = !task.is_completed;
            task.is_completed
        })
    }

    fn delete(&self, user: &UserId, id: Uuid) -> Result<()> {
        self.update(user, id, |records, idx| {
            records.remove(idx);
        })
    }

    fn delete_for_diagnosis(&self, user: &UserId, diagnosis: &DiagnosisId) -> Result<usize> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| !(&r.task.user_id == user && &r.task.diagnosis_id == diagnosis));
        let removed = before - records.len();

        if removed > 0 {
            self.save(&records)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::ScheduleEntry;
    use crate::schedule::{SlotAllocator, TaskOwner};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn tasks_for(user: &str, diagnosis: &str) -> Vec<ResolvedTask> {
        let entries = vec![
            ScheduleEntry::new("Day 3", "Spray", "Copper"),
            ScheduleEntry::new("Today", "Prune", "Lower leaves"),
            ScheduleEntry::new("Today", "Monitor", "Spots"),
        ];
        let reference = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        SlotAllocator::default().allocate(&entries, reference, &TaskOwner::new(user, diagnosis))
    }

    #[test]
    fn test_load_nonexistent_file() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonTaskStore::new(temp.path().join("tasks.json"));
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_whitespace_only_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, "  \n\t ")?;
        assert!(JsonTaskStore::new(path).load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_an_error() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{ not json")?;
        let err = JsonTaskStore::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
        Ok(())
    }

    #[test]
    fn test_insert_and_list_sorted_by_due() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonTaskStore::new(temp.path().join("nested").join("tasks.json"));

        let created = store.insert_many(&tasks_for("alice", "d1"))?;
        assert_eq!(created.len(), 3);
        assert_eq!(created[0].task.description, "Spray");

        let listed = store.list_for_user(&UserId("alice".to_string()))?;
        let names: Vec<&str> = listed.iter().map(|r| r.task.description.as_str()).collect();
        assert_eq!(names, vec!["Monitor", "Prune", "Spray"]);
        Ok(())
    }

    #[test]
    fn test_list_is_scoped_to_user() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonTaskStore::new(temp.path().join("tasks.json"));
        store.insert_many(&tasks_for("alice", "d1"))?;
        store.insert_many(&tasks_for("bob", "d2"))?;

        assert_eq!(store.list_for_user(&UserId("alice".to_string()))?.len(), 3);
        assert_eq!(store.list_for_user(&UserId("carol".to_string()))?.len(), 0);
        Ok(())
    }

    #[test]
    fn test_toggle_completed() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonTaskStore::new(temp.path().join("tasks.json"));
        let alice = UserId("alice".to_string());
        let id = store.insert_many(&tasks_for("alice", "d1"))?[0].id;

        assert!(store.toggle_completed(&alice, id)?);
        assert!(!store.toggle_completed(&alice, id)?);
        assert!(store.toggle_completed(&alice, id)?);

        let listed = store.list_for_user(&alice)?;
        assert!(listed.iter().find(|r| r.id == id).unwrap().task.is_completed);
        Ok(())
    }

    #[test]
    fn test_other_users_task_is_not_found() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonTaskStore::new(temp.path().join("tasks.json"));
        let id = store.insert_many(&tasks_for("alice", "d1"))?[0].id;
        let bob = UserId("bob".to_string());

        assert!(matches!(
            store.toggle_completed(&bob, id),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(store.delete(&bob, id), Err(StoreError::NotFound(_))));
        assert_eq!(store.load()?.len(), 3);
        Ok(())
    }

    #[test]
    fn test_delete() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonTaskStore::new(temp.path().join("tasks.json"));
        let alice = UserId("alice".to_string());
        let id = store.insert_many(&tasks_for("alice", "d1"))?[1].id;

        store.delete(&alice, id)?;
        let remaining = store.list_for_user(&alice)?;
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|r| r.id != id));
        Ok(())
    }

    #[test]
    fn test_delete_for_diagnosis() -> Result<()> {
        let temp = tempdir()?;
        let store = JsonTaskStore::new(temp.path().join("tasks.json"));
        store.insert_many(&tasks_for("alice", "d1"))?;
        store.insert_many(&tasks_for("alice", "d2"))?;

        let alice = UserId("alice".to_string());
        let removed = store.delete_for_diagnosis(&alice, &DiagnosisId("d1".to_string()))?;
        assert_eq!(removed, 3);

        let remaining = store.list_for_user(&alice)?;
        assert_eq!(remaining.len(), 3);
        assert!(remaining
            .iter()
            .all(|r| r.task.diagnosis_id == DiagnosisId("d2".to_string())));
        Ok(())
    }

    #[test]
    fn test_save_creates_backup() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        let store = JsonTaskStore::new(&path);

        store.insert_many(&tasks_for("alice", "d1"))?;
        assert!(!path.with_extension("json.bak").exists());

        store.insert_many(&tasks_for("alice", "d2"))?;
        assert!(path.with_extension("json.bak").exists());
        Ok(())
    }

    #[test]
    fn test_insert_nothing_does_not_create_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        JsonTaskStore::new(&path).insert_many(&[])?;
        assert!(!path.exists());
        Ok(())
    }
}
