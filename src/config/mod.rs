//! Tool configuration
//!
//! Settings are layered: defaults, then an optional `.editlinks.toml` file,
//! then CLI flags, then environment overrides applied at the binary boundary.

pub mod rules;

pub use rules::{EditRule, load_edit_rules};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{defaults, env_vars, output_formats};
use crate::core::error::{EditLinksError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of entries probed per batch
    pub batch_size: Option<usize>,

    /// Timeout in milliseconds for each HEAD request
    pub timeout: Option<u64>,

    /// Pause in milliseconds after each batch's probes resolve
    pub batch_delay: Option<u64>,

    /// Overall run deadline in seconds (no deadline when absent)
    pub deadline: Option<u64>,

    /// File-path suffixes that are never probed
    pub ignore: Option<Vec<String>>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: Some(defaults::BATCH_SIZE),
            timeout: Some(defaults::TIMEOUT_MS),
            batch_delay: Some(defaults::BATCH_DELAY_MS),
            deadline: None,
            ignore: None, // Falls back to the built-in suffix list
            user_agent: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .editlinks.toml in current directory
        if let Ok(config) = Self::load_from_file(".editlinks.toml") {
            return config;
        }

        // Check for .editlinks.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.editlinks.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(batch_size) = cli_config.batch_size {
            self.batch_size = Some(batch_size);
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(batch_delay) = cli_config.batch_delay {
            self.batch_delay = Some(batch_delay);
        }
        if let Some(deadline) = cli_config.deadline {
            self.deadline = Some(deadline);
        }
        if let Some(ref ignore) = cli_config.ignore {
            self.ignore = Some(ignore.clone());
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Apply `DOCS_LINK_CHECK_*` environment overrides.
    ///
    /// Only called from the binary so the library stays free of
    /// process-global coupling. Env values win over file and CLI settings.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var(env_vars::BATCH_SIZE) {
            let batch_size: usize = raw.parse().map_err(|_| {
                EditLinksError::Config(format!(
                    "{} must be a positive integer, got '{raw}'",
                    env_vars::BATCH_SIZE
                ))
            })?;
            if batch_size == 0 {
                return Err(EditLinksError::Config(format!(
                    "{} cannot be 0",
                    env_vars::BATCH_SIZE
                )));
            }
            self.batch_size = Some(batch_size);
        }

        if let Ok(raw) = std::env::var(env_vars::TIMEOUT) {
            let timeout: u64 = raw.parse().map_err(|_| {
                EditLinksError::Config(format!(
                    "{} must be a number of milliseconds, got '{raw}'",
                    env_vars::TIMEOUT
                ))
            })?;
            self.timeout = Some(timeout);
        }

        Ok(())
    }

    /// Effective batch size
    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or(defaults::BATCH_SIZE).max(1)
    }

    /// Get per-request timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout.unwrap_or(defaults::TIMEOUT_MS))
    }

    /// Get inter-batch delay as Duration
    pub fn batch_delay_duration(&self) -> Duration {
        Duration::from_millis(self.batch_delay.unwrap_or(defaults::BATCH_DELAY_MS))
    }

    /// Get run deadline as Duration, when configured
    pub fn deadline_duration(&self) -> Option<Duration> {
        self.deadline.map(Duration::from_secs)
    }

    /// Effective ignore-suffix list
    pub fn ignore_suffixes(&self) -> Vec<String> {
        self.ignore.clone().unwrap_or_else(|| {
            defaults::IGNORE_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub batch_size: Option<usize>,
    pub timeout: Option<u64>,
    pub batch_delay: Option<u64>,
    pub deadline: Option<u64>,
    pub ignore: Option<Vec<String>>,
    pub user_agent: Option<String>,
    pub output_format: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}
