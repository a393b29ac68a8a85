// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for plistenv.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ExpandConfig, variables
//! variables: name -> value (the explicit environment mapping)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::plist::DEFAULT_MAX_ROUNDS;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// Expansion behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpandConfig {
    /// Log a warning for every unresolved reference.
    pub warn_undefined: bool,
    /// Seed the environment with the process environment.
    pub inherit_process_env: bool,
    /// Upper bound of passes for single-setting expansion.
    pub max_fixpoint_rounds: u32,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            warn_undefined: true,
            inherit_process_env: false,
            max_fixpoint_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}
