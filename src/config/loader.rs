// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use std::path::{Path, PathBuf};

use crate::base;
use crate::error::{CommitrcError, ConfigError, Result, ResultExt};
use crate::project;
use crate::rules::RuleTable;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["commitlint.toml", ".commitlintrc.toml", ".commitlintrc.json"];

/// Encoding of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(CommitrcError::Config(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })),
        }
    }
}

/// Find the configuration file for the current directory.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
///
/// Searches upward to the repository root, then the user's home and config
/// directories.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    find_in_repository(start_dir).or_else(find_in_user_dirs)
}

/// Search `start_dir` and its parents, stopping at the first directory that
/// holds a `.git` entry.
fn find_in_repository(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = find_in_dir(&current) {
            return Some(found);
        }

        if current.join(".git").exists() {
            tracing::debug!("Reached repository root at {:?}", current);
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

fn find_in_user_dirs() -> Option<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        if let Some(found) = find_in_dir(&home) {
            return Some(found);
        }
    }

    let config_dir = dirs::config_dir()?;
    let path = config_dir.join("commitlint").join("config.toml");
    path.exists().then_some(path)
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load the effective rules for the current directory.
///
/// Falls back to the project rules when no configuration file exists.
pub fn load_config() -> Result<RuleTable> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using project rules");
            Ok(project::effective_rules().clone())
        }
    }
}

/// Load a configuration file and resolve what it extends.
pub fn load_config_from(path: &Path) -> Result<RuleTable> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CommitrcError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read config file {}", path.display()))?;

    let local = parse_config(&content, format)?;
    Ok(base::resolve(&local)?)
}

/// Parse a configuration document into a local, unresolved table.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<RuleTable> {
    let file: super::ConfigFile = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            CommitrcError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        })?,
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            CommitrcError::Config(ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })
        })?,
    };

    Ok(RuleTable::try_from(file)?)
}

/// Render a table in the TOML configuration format.
pub fn to_toml(table: &RuleTable) -> Result<String> {
    toml::to_string(table).context("Failed to serialize rule table")
}
