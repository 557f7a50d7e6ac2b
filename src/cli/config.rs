//! Run configuration
//!
//! Values come from three layers, highest precedence first:
//! 1. Command line flags
//! 2. The optional JSON file given with `-config`
//! 3. Built-in defaults

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::args::Cli;
use super::errors::{CliError, CliResult};

pub const DEFAULT_EXECUTION_TYPE: &str = "orchestration";
pub const DEFAULT_STATUS: &str = "RUNNING";
pub const DEFAULT_REDIS_ADDR: &str = "localhost:6379";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub execution_type: Option<String>,
    pub status: Option<String>,
    /// Same syntax as `-filters`
    pub filters: Option<String>,
    pub fields: Option<Vec<String>>,
    pub redis_addr: Option<String>,
    pub redis_password: Option<String>,
    pub redis_db: Option<i64>,
}

impl ConfigFile {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let file: ConfigFile = serde_json::from_str(&content)?;
        Ok(file)
    }
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub execution_type: String,
    pub status: String,
    pub filters: String,
    pub fields: Vec<String>,
    pub redis_addr: String,
    pub redis_password: Option<String>,
    pub redis_db: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            execution_type: DEFAULT_EXECUTION_TYPE.to_string(),
            status: DEFAULT_STATUS.to_string(),
            filters: String::new(),
            fields: Vec::new(),
            redis_addr: DEFAULT_REDIS_ADDR.to_string(),
            redis_password: None,
            redis_db: 0,
        }
    }
}

impl Config {
    /// Resolve configuration from flags, loading `-config` if given
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        let config = Self::merge(cli, file);
        config.validate()?;
        Ok(config)
    }

    /// Layer flags over file values over defaults
    pub fn merge(cli: &Cli, file: ConfigFile) -> Self {
        let defaults = Config::default();
        Self {
            execution_type: cli
                .execution_type
                .clone()
                .or(file.execution_type)
                .unwrap_or(defaults.execution_type),
            status: cli.status.clone().or(file.status).unwrap_or(defaults.status),
            filters: cli.filters.clone().or(file.filters).unwrap_or(defaults.filters),
            fields: cli
                .fields
                .as_deref()
                .map(split_fields)
                .or_else(|| file.fields.map(|fields| normalize_fields(&fields)))
                .unwrap_or(defaults.fields),
            redis_addr: cli
                .redis_addr
                .clone()
                .or(file.redis_addr)
                .unwrap_or(defaults.redis_addr),
            redis_password: cli.redis_password.clone().or(file.redis_password),
            redis_db: cli.redis_db.or(file.redis_db).unwrap_or(defaults.redis_db),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> CliResult<()> {
        if self.execution_type.is_empty() {
            return Err(CliError::config_error("execution type must not be empty"));
        }
        if self.execution_type.contains(['*', '?', '[', ']']) {
            return Err(CliError::config_error(format!(
                "Invalid execution type: '{}'. Glob characters are not allowed.",
                self.execution_type
            )));
        }
        if self.redis_addr.is_empty() {
            return Err(CliError::config_error("redis address must not be empty"));
        }
        if self.redis_db < 0 {
            return Err(CliError::config_error(format!(
                "Invalid redis database index: {}",
                self.redis_db
            )));
        }
        Ok(())
    }
}

/// Splits `-fields` into names, trimming whitespace and dropping blanks
pub fn split_fields(raw: &str) -> Vec<String> {
    normalize_fields(raw.split(','))
}

fn normalize_fields<I, T>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    fields
        .into_iter()
        .filter_map(|f| {
            let f = f.as_ref().trim();
            (!f.is_empty()).then(|| f.to_string())
        })
        .collect()
}
