// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .default_file("plistenv.toml")   optional, skipped when absent
//!   .ini(path)...                    --ini, must exist
//!   .inline(toml)                    TOML text
//!   .env_prefix("PLISTENV")          PLISTENV_SECTION__KEY
//!   .set_all(["section.key=value"])  --set
//!        |
//!        v
//!    build() --> Config (validated)
//! ```
//!
//! Later layers win. TOML and `--set` keys keep their case; keys taken from
//! environment variables are lower-cased by the `config` crate.

use std::fmt;
use std::path::PathBuf;

use config::builder::{ConfigBuilder, DefaultState};
use config::{Environment, File, FileFormat};
use tracing::debug;

use super::Config;
use crate::error::Result;
use crate::plist::parse_assignment;

/// One TOML layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The working-directory config file; ignored when missing.
    Default(PathBuf),
    /// A file named with `--ini`; an error when missing.
    Ini(PathBuf),
    /// TOML text held in memory.
    Inline(String),
}

impl Source {
    /// Whether the layer contributes anything when built.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Default(path) => path.exists(),
            Self::Ini(_) | Self::Inline(_) => true,
        }
    }

    fn add_to(&self, builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        match self {
            Self::Default(path) | Self::Ini(path) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(matches!(self, Self::Ini(_))),
            ),
            Self::Inline(text) => builder.add_source(File::from_str(text, FileFormat::Toml)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default(path) => write!(f, "[default] {}", path.display()),
            Self::Ini(path) => write!(f, "[ini] {}", path.display()),
            Self::Inline(_) => f.write_str("[inline] <string>"),
        }
    }
}

/// Collects configuration layers and merges them into a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    sources: Vec<Source>,
    env_prefix: Option<String>,
    overrides: Vec<(String, String)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn default_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::Default(path.into()));
        self
    }

    /// Adds a file that must exist and parse when [`build`](Self::build) runs.
    #[must_use]
    pub fn ini(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(Source::Ini(path.into()));
        self
    }

    #[must_use]
    pub fn inline(mut self, toml: impl Into<String>) -> Self {
        self.sources.push(Source::Inline(toml.into()));
        self
    }

    /// Reads `PREFIX_SECTION__KEY` environment variables at build time.
    #[must_use]
    pub fn env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Records `section.key=value` overrides, as given to `--set`.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not of the form `KEY=VALUE`.
    pub fn set_all<I, S>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in overrides {
            let (key, value) = parse_assignment(item.as_ref())?;
            self.overrides.push((key.to_string(), value.to_string()));
        }
        Ok(self)
    }

    /// Layers that will be read, in order, skipping an absent default file.
    pub fn sources(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter().filter(|source| source.is_present())
    }

    /// Numbered source lines for the `inis` command.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }

    /// Merges every layer into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if an `--ini` file is missing, a layer is not valid
    /// TOML, an override key is malformed, the merged tree does not match
    /// [`Config`], or [`Config::validate`] rejects it.
    pub fn build(self) -> Result<Config> {
        let mut builder = config::Config::builder();
        for source in &self.sources {
            debug!(%source, "config layer");
            builder = source.add_to(builder);
        }
        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }
        for (key, value) in self.overrides {
            debug!(key = %key, value = %value, "config override");
            builder = builder.set_override(key, value)?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
