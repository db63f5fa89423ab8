use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,
    #[serde(default = "default_session_command")]
    pub session_command: String,
    #[serde(default)]
    pub session_args: Vec<String>,
    #[serde(default = "default_session_terminal")]
    pub session_terminal: String,
    #[serde(default = "default_session_timeout")]
    pub session_timeout_secs: u64,
}

fn default_tasks_file() -> String {
    "~/.tasks".to_string()
}
fn default_session_command() -> String {
    "last".to_string()
}
fn default_session_terminal() -> String {
    "console".to_string()
}
fn default_session_timeout() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: default_tasks_file(),
            session_command: default_session_command(),
            session_args: Vec::new(),
            session_terminal: default_session_terminal(),
            session_timeout_secs: default_session_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtasklogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtasklogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtasklogger.conf")
    }

    /// Resolved path of the task log (`~` expanded)
    pub fn tasks_path(&self) -> PathBuf {
        expand_tilde(&self.tasks_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize the configuration directory and file.
    /// In test mode nothing is written and the defaults (plus override) are returned.
    pub fn init_all(tasks_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let config = Config {
            tasks_file: tasks_file.unwrap_or_else(default_tasks_file),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            config.save()?;
        }

        Ok(config)
    }
}
