// Local configuration for the folio CLI.
//
// Global config: `~/.folio/config.toml`. Every field has a default; a
// missing file is silently the defaults, a malformed one is an error
// carrying its path. Command-line flags override loaded values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use folio_common::diff::DiffStrategy;

/// Root directory for folio global state: `~/.folio/`.
pub fn global_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio"))
}

/// Path to the global config file: `~/.folio/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    global_dir().map(|d| d.join("config.toml"))
}

/// CLI configuration at `~/.folio/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    /// Lint settings.
    pub lint: LintConfig,
    /// Summary settings.
    pub summary: SummaryConfig,
    /// Diff settings.
    pub diff: DiffConfig,
}

impl FolioConfig {
    /// Load from `~/.folio/config.toml`. A missing file (or an
    /// undeterminable home directory) yields the defaults; a file that
    /// exists but fails to read or parse is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match global_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(error) => return Err(ConfigError::Io { path: path.to_path_buf(), source: error }),
        };
        let config = toml::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LintConfig {
    /// Line length threshold for the long-line check.
    pub max_line_length: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self { max_line_length: folio_common::assist::DEFAULT_MAX_LINE_LENGTH }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SummaryConfig {
    /// Character budget for generated summaries.
    pub max_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { max_chars: folio_common::assist::DEFAULT_SUMMARY_MAX_CHARS }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiffConfig {
    /// Diff algorithm used when `--strategy` is not passed.
    pub strategy: DiffStrategy,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
