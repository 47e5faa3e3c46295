// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search session tuning.
//!
//! All durations are milliseconds in the file and `Duration` in code. Missing
//! keys take the storefront's values: 400 ms debounce, 4 s not-found notice,
//! 150 ms blur grace, 10 suggestions.

use crate::search::suggest::MAX_SUGGESTIONS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 400;
pub const DEFAULT_NOTICE_MS: u64 = 4_000;
pub const DEFAULT_BLUR_HIDE_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchConfig {
    /// Quiet period before a keystroke burst is ranked.
    pub debounce_ms: u64,
    /// How long the not-found notice stays up.
    pub notice_ms: u64,
    /// Grace period between blur and hiding the list, so a click can land.
    pub blur_hide_ms: u64,
    /// Suggestion-list cap, `1..=10`.
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            notice_ms: DEFAULT_NOTICE_MS,
            blur_hide_ms: DEFAULT_BLUR_HIDE_MS,
            suggestion_limit: MAX_SUGGESTIONS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    /// A value is out of range.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
            ConfigError::Invalid { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl SearchConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(?config, path = %path.display(), "loaded search config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "debounceMs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.suggestion_limit == 0 || self.suggestion_limit > MAX_SUGGESTIONS {
            return Err(ConfigError::Invalid {
                field: "suggestionLimit",
                reason: format!("must be between 1 and {}, got {}", MAX_SUGGESTIONS, self.suggestion_limit),
            });
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn notice(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    pub fn blur_hide(&self) -> Duration {
        Duration::from_millis(self.blur_hide_ms)
    }
}
