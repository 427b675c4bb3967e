//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::task::StoreOptions;

/// File name used when neither the command line nor the config names one
pub const DEFAULT_TASKS_FILE: &str = "tasks.csv";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            backup: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub confirm_delete: bool,

    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
            toast_seconds: default_toast_seconds(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub name: String,
}

fn default_true() -> bool {
    true
}

fn default_toast_seconds() -> u64 {
    3
}

pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("taskpad"))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            backup: self.storage.backup,
        }
    }

    /// Pick the tasks file: explicit path first, then the config, then
    /// `tasks.csv` in the working directory.
    pub fn tasks_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        match &self.storage.path {
            Some(path) => expand_home(path),
            None => PathBuf::from(DEFAULT_TASKS_FILE),
        }
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(Some(config))
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
