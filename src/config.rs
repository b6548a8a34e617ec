//! Scan configuration
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional `.todocheck.toml` (in the scan root, or named explicitly),
//! and command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{DEFAULT_TICKET_PREFIX, MarkerError, MarkerPattern};
use crate::core::ports::DecodePolicy;
use crate::core::services::CommentMode;

/// Config file looked up in the scan root
pub const CONFIG_FILE: &str = ".todocheck.toml";

/// Report file name for all matches
pub const DEFAULT_ALL_REPORT: &str = "todo_report.html";

/// Report file name for matches in modified files
pub const DEFAULT_MODIFIED_REPORT: &str = "modified_todo_report.html";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// An exclude entry is not a valid glob
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    Exclude {
        /// Offending pattern
        pattern: String,
        /// Underlying error
        #[source]
        source: glob::PatternError,
    },

    /// Ticket prefix rejected
    #[error(transparent)]
    Marker(#[from] MarkerError),
}

/// Complete scan configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Marker rules
    #[serde(default)]
    pub markers: MarkersConfig,
    /// Tree walk and file reading
    #[serde(default)]
    pub scan: ScanSettings,
    /// Report output
    #[serde(default)]
    pub report: ReportConfig,
}

/// Marker rule settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkersConfig {
    /// Project prefix for ticket references (`PREFIX-123`)
    #[serde(default = "default_ticket_prefix")]
    pub ticket_prefix: String,
}

fn default_ticket_prefix() -> String {
    DEFAULT_TICKET_PREFIX.to_string()
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            ticket_prefix: default_ticket_prefix(),
        }
    }
}

/// Tree walk settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// How comment lines are recognised
    #[serde(default)]
    pub comment_mode: CommentMode,
    /// What to do with files that are not valid UTF-8
    #[serde(default)]
    pub on_invalid_encoding: DecodePolicy,
    /// Glob patterns (relative to the root) of files to leave out
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// Report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// File name of the report covering all matches
    #[serde(default = "default_all_name")]
    pub all_name: String,
    /// File name of the report covering modified files
    #[serde(default = "default_modified_name")]
    pub modified_name: String,
}

fn default_all_name() -> String {
    DEFAULT_ALL_REPORT.to_string()
}

fn default_modified_name() -> String {
    DEFAULT_MODIFIED_REPORT.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            all_name: default_all_name(),
            modified_name: default_modified_name(),
        }
    }
}

impl ScanConfig {
    /// Parse a config document
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `.todocheck.toml` from the scan root, or defaults if absent
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the marker rules for this configuration
    pub fn marker_pattern(&self) -> Result<MarkerPattern, ConfigError> {
        Ok(MarkerPattern::new(&self.markers.ticket_prefix)?)
    }

    /// Compile the exclude globs
    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>, ConfigError> {
        self.scan
            .exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::Exclude {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}
