//! Configuration file and data directory resolution.
//!
//! Settings are kept as pretty-printed JSON in `config.json` inside the
//! platform data directory. A missing file means defaults. The database
//! location can be forced with the `RECALL_FLOW_DB` environment variable,
//! which wins over the file.
//!
//! ```rust,no_run
//! use recall_flow::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.db_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::messages::Message;
use super::scheduler::REVIEW_BATCH_SIZE;
use crate::db::db::DB_FILE_NAME;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env::{self, consts::OS};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Overrides the database path from the configuration file.
pub const DB_PATH_ENV: &str = "RECALL_FLOW_DB";

const APP_DIR_NAME: &str = "recall-flow";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file. Defaults to `recall_flow.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Cards offered per review session.
    pub review_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            review_batch_size: REVIEW_BATCH_SIZE,
        }
    }
}

/// Per-user data directory: `~/.local/share/recall-flow` on Linux,
/// `~/Library/Application Support/recall-flow` on macOS and
/// `%LOCALAPPDATA%\recall-flow` on Windows.
pub fn data_dir() -> PathBuf {
    let home = || env::var("HOME").unwrap_or_else(|_| ".".into());
    let base = match OS {
        "windows" => PathBuf::from(env::var("LOCALAPPDATA").unwrap_or_else(|_| ".".into())),
        "macos" => PathBuf::from(home()).join("Library").join("Application Support"),
        _ => PathBuf::from(home()).join(".local").join("share"),
    };
    base.join(APP_DIR_NAME)
}

/// Path of `file_name` inside the data directory, creating the directory if needed.
fn data_file(file_name: &str) -> Result<PathBuf> {
    let dir = data_dir();
    fs::create_dir_all(&dir)?;
    Ok(dir.join(file_name))
}

impl Config {
    pub fn read() -> Result<Config> {
        let path = data_file(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        let file = File::create(data_file(CONFIG_FILE_NAME)?)?;
        serde_json::to_writer_pretty(&file, self)?;
        Ok(())
    }

    /// Database location: `RECALL_FLOW_DB`, then the configured path, then the default file.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Some(path) = env::var_os(DB_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => data_file(DB_FILE_NAME),
        }
    }

    /// Interactive setup, starting from the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let database: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.db_path()?.display().to_string())
            .interact_text()?;

        let review_batch_size: usize = Input::with_theme(&theme)
            .with_prompt(Message::PromptReviewBatchSize.to_string())
            .default(current.review_batch_size)
            .validate_with(|size: &usize| if *size > 0 { Ok(()) } else { Err("must be at least 1") })
            .interact_text()?;

        Ok(Config {
            database: Some(PathBuf::from(database.trim())),
            review_batch_size,
        })
    }
}
