use crate::core::calculator::wage::WageRule;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_utc_offset;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod check;

const MAX_DELETION_WINDOW: i64 = 24 * 60;

/// Language used for notes, weekday labels and event labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    pub fn is_japanese(&self) -> bool {
        matches!(self, Language::Ja)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_current_user")]
    pub current_user: i64,
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: i64,
    #[serde(default = "default_minute_unit")]
    pub minute_unit: i64,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default = "default_deletion_window")]
    pub deletion_window_minutes: i64,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_in_progress_label")]
    pub in_progress_label: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_current_user() -> i64 {
    1
}
fn default_hourly_rate() -> i64 {
    1500
}
fn default_minute_unit() -> i64 {
    60
}
fn default_utc_offset() -> String {
    "+09:00".to_string()
}
fn default_deletion_window() -> i64 {
    5
}
fn default_in_progress_label() -> String {
    "in progress".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            current_user: default_current_user(),
            hourly_rate: default_hourly_rate(),
            minute_unit: default_minute_unit(),
            utc_offset: default_utc_offset(),
            deletion_window_minutes: default_deletion_window(),
            language: Language::default(),
            in_progress_label: default_in_progress_label(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `TIMECARD_HOME` overrides it (handy for tests and portable installs).
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var("TIMECARD_HOME") {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timecard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timecard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timecard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timecard.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing keys fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }

    /// Civil timezone used to assign punches to days.
    pub fn timezone(&self) -> AppResult<FixedOffset> {
        parse_utc_offset(&self.utc_offset).ok_or_else(|| {
            AppError::Config(format!(
                "utc_offset '{}' is not a valid offset (expected e.g. +09:00)",
                self.utc_offset
            ))
        })
    }

    /// Undo window in minutes, at most one day.
    pub fn deletion_window(&self) -> AppResult<i64> {
        if !(0..=MAX_DELETION_WINDOW).contains(&self.deletion_window_minutes) {
            return Err(AppError::Config(format!(
                "deletion_window_minutes must be between 0 and {}, got {}",
                MAX_DELETION_WINDOW, self.deletion_window_minutes
            )));
        }
        Ok(self.deletion_window_minutes)
    }

    pub fn wage_rule(&self) -> AppResult<WageRule> {
        WageRule::new(self.hourly_rate, self.minute_unit)
    }
}
