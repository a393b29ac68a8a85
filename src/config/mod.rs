// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for plistenv.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. plistenv.toml (cwd, optional)
//! 3. --ini files
//! 4. PLISTENV_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PLISTENV_EXPAND__WARN_UNDEFINED=false  → expand.warn_undefined = false
//! PLISTENV_GLOBAL__OUTPUT_LOG_LEVEL=4    → global.output_log_level = 4
//! ```
//!
//! # Variables
//!
//! ```toml
//! [variables]
//! PRODUCT_NAME = "Viewer"
//! PRODUCT_BUNDLE_IDENTIFIER = "org.example.$(PRODUCT_NAME:rfc1034identifier)"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};
use crate::plist::Environment;

use loader::ConfigLoader;
use types::{ExpandConfig, GlobalConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "plistenv.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PLISTENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Expansion options.
    pub expand: ExpandConfig,
    /// Variables available to every expansion.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use plistenv::config::Config;
    ///
    /// let config = Config::builder()
    ///     .default_file("plistenv.toml")
    ///     .ini("ci/plistenv.toml")
    ///     .env_prefix("PLISTENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().inline(content).build()
    }

    /// Validate values that deserialization alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `expand.max_fixpoint_rounds` is 0.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.expand.max_fixpoint_rounds == 0 {
            return Err(ConfigError::InvalidValue {
                section: "expand".to_string(),
                key: "max_fixpoint_rounds".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Environment the configuration describes.
    ///
    /// The process environment (if inherited) comes first; `[variables]`
    /// entries override it.
    #[must_use]
    pub fn environment(&self) -> Environment {
        let mut env = if self.expand.inherit_process_env {
            Environment::from_process()
        } else {
            Environment::new()
        };
        env.extend(self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        env
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "expand.warn_undefined".to_string(),
            self.expand.warn_undefined.to_string(),
        );
        options.insert(
            "expand.inherit_process_env".to_string(),
            self.expand.inherit_process_env.to_string(),
        );
        options.insert(
            "expand.max_fixpoint_rounds".to_string(),
            self.expand.max_fixpoint_rounds.to_string(),
        );
        for (name, value) in &self.variables {
            options.insert(format!("variables.{name}"), value.clone());
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
