// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging for plistenv, built on `tracing`.
//!
//! ```text
//! [global] output_log_level / file_log_level / log_file
//!        |
//!        v  LogConfig::from(&GlobalConfig)
//! init_logging
//!    |                     |
//!    v                     v
//! stderr (compact)      log file (non_blocking, span close events)
//! PLISTENV_LOG overrides the console level
//!
//! document_span("expand", path)
//!   file, undefined, removed  <- recorded by the command
//!   every warning about an undefined variable is emitted inside it
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::{Span, field, info_span};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, Result};

/// Environment variable holding an `EnvFilter` directive for the console.
pub const LOG_ENV_VAR: &str = "PLISTENV_LOG";

/// Verbosity, stored in config files as 0-6.
///
/// Undefined variables are reported at [`LogLevel::Warn`]; every substitution
/// is traced at [`LogLevel::Trace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
    /// Same filter as `Trace`; kept so level 6 stays valid in old configs.
    Dump = 6,
}

impl LogLevel {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for levels above 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {level}"),
        })
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        Some(match level {
            0 => Self::Silent,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            5 => Self::Trace,
            6 => Self::Dump,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Silent => LevelFilter::OFF,
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace | Self::Dump => LevelFilter::TRACE,
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, ConfigError> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

/// Where log output goes and how much of it.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(default)]
    console_level: LogLevel,
    #[builder(default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(into)]
    log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&GlobalConfig> for LogConfig {
    fn from(global: &GlobalConfig) -> Self {
        Self::builder()
            .console_level(global.output_log_level)
            .file_level(global.file_log_level)
            .maybe_log_file(global.log_file.clone())
            .build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Console filter: `PLISTENV_LOG` if set and valid, else the console level.
    fn console_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.console_level.level_filter().into())
            .with_env_var(LOG_ENV_VAR)
            .from_env_lossy()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use plistenv::logging::{LogConfig, LogLevel, init_logging};
///
/// let config = LogConfig::builder()
///     .console_level(LogLevel::Warn)
///     .log_file("plistenv.log")
///     .build();
/// let _guard = init_logging(&config)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(config.console_filter());

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(create_log_file(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(config.file_level().level_filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

fn create_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))
}

/// Span covering the processing of one document.
///
/// `undefined` and `removed` start empty; the command records them once
/// known, and the file layer writes them when the span closes.
#[must_use]
pub fn document_span(command: &'static str, path: &Path) -> Span {
    info_span!(
        "document",
        command,
        file = %path.display(),
        undefined = field::Empty,
        removed = field::Empty,
    )
}

#[cfg(test)]
mod tests;
