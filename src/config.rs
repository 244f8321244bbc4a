//! User configuration management

use anyhow::{Context, Result};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

const APP_DIR_NAME: &str = "leafcare";
const MAX_SLOT_MINUTES: u32 = 24 * 60;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub advisor: AdvisorConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Task text containing any of these (case-insensitive) is scheduled all day
    #[serde(default = "default_all_day_keywords")]
    pub all_day_keywords: Vec<String>,

    /// Time of the first timed task on a day, as HH:MM
    #[serde(default = "default_first_slot")]
    pub first_slot: String,

    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,

    #[serde(default = "default_follow_up_days")]
    pub follow_up_days: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            all_day_keywords: default_all_day_keywords(),
            first_slot: default_first_slot(),
            slot_minutes: default_slot_minutes(),
            follow_up_days: default_follow_up_days(),
        }
    }
}

impl ScheduleConfig {
    /// Parsed `first_slot`, falling back to 09:00 when it is not a valid time
    pub fn first_slot_time(&self) -> NaiveTime {
        NaiveTime::parse_from_str(self.first_slot.trim(), "%H:%M").unwrap_or_else(|e| {
            warn!("Invalid first_slot {:?} ({}), using 09:00", self.first_slot, e);
            NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
        })
    }

    /// Spacing between timed tasks on the same day, between one minute and one day
    pub fn slot_interval(&self) -> Duration {
        Duration::minutes(i64::from(self.slot_minutes.clamp(1, MAX_SLOT_MINUTES)))
    }
}

fn default_all_day_keywords() -> Vec<String> {
    ["monitor", "inspect", "check", "sanitation", "assess"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_first_slot() -> String {
    "09:00".to_string()
}

fn default_slot_minutes() -> u32 {
    15
}

fn default_follow_up_days() -> u32 {
    7
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AdvisorConfig {
    /// The API key from the configured environment variable, if set and non-empty
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Task file location; defaults to `tasks.json` in the app directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl StoreConfig {
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(expand_home(path)),
            None => Ok(get_app_dir()?.join("tasks.json")),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// App directory under the platform config dir, created on first use
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?
        .join(APP_DIR_NAME);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create app directory {:?}", dir))?;
    Ok(dir)
}

/// Location of `config.toml` inside the app directory
pub fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Invalid config at {:?}", path))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
