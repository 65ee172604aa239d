//! Configuration module for the xqt CLI.
//!
//! This module handles loading `xqt.toml`, which holds the
//! default scanner mode and output settings. Command-line flags override
//! whatever the file says.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use xqc_lex::ScanState;

use crate::error::{Result, XqtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "xqt.toml";

/// Fallback when the CPU count does not fit.
const DEFAULT_THREAD_COUNT: usize = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Scanner mode the tool starts in.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// How token listings are printed.
    #[serde(default)]
    pub output: OutputConfig,

    /// Settings for `check`.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Initial scanner mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Emit whitespace as `Ws` tokens instead of skipping it.
    #[serde(default)]
    pub ws_explicit: bool,

    /// Treat quotes as string literal delimiters.
    #[serde(default = "default_true")]
    pub parse_string_literals: bool,

    /// Start inside element content, e.g. for template fragments.
    #[serde(default)]
    pub start_in_element_content: bool,
}

/// Token listing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Include `Ws` tokens in listings.
    #[serde(default)]
    pub show_trivia: bool,
}

/// `check` options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files checked in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}

fn default_parallel_jobs() -> usize {
    match get_num_cpus() {
        0 => DEFAULT_THREAD_COUNT,
        n => n,
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            ws_explicit: false,
            parse_string_literals: true,
            start_in_element_content: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_trivia: false,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl LexerConfig {
    /// The scanner state these settings describe.
    pub fn scan_state(&self) -> ScanState {
        let mut state = ScanState::default();
        state.set_ws_explicit(self.ws_explicit);
        state.set_parse_string_literals(self.parse_string_literals);
        state.set_element_content(self.start_in_element_content);
        state
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/xqt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(XqtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            XqtError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("xqt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("xqt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
