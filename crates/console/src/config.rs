// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console configuration.
//!
//! Settings come from an optional JSON file; command-line flags override
//! individual fields.

use std::path::Path;

use repair_desk::StoreConfig;
use repair_desk_api::SessionConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the console needs to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub store: StoreConfig,
    pub session: SessionConfig,
    /// Seed the ticket store with the demo fixtures.
    pub seed_fixtures: bool,
    /// Report on this many trailing weeks, including empty ones. When unset,
    /// one report per week that has tickets.
    pub report_weeks: Option<usize>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            session: SessionConfig::default(),
            seed_fixtures: true,
            report_weeks: None,
        }
    }
}

impl ConsoleConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw: String = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parses config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid config document.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
