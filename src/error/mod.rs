// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            PlistError (16 bytes)
//!                   |
//!   +------+------+-+----+-------+----+
//!   |      |      |      |       |    |
//!   v      v      v      v       v    v
//! Config  Doc  Expand  Darwin   Fs   Io
//!  Box    Box   Box     Box    Box  Box
//!
//! Sub-errors (unboxed internally):
//!   Config    InvalidValue, InvalidAssignment
//!   Document  Json, UnsupportedValue, Cycle
//!   Expand    NoFixpoint
//!   Darwin    NoApplePlatform, UnknownDevice, UnknownPlatformType
//!   Fs        NotFound, IoError
//! ```
//!
//! The variable expander itself never fails; unresolved or malformed tokens
//! are left verbatim. Everything here belongs to the layers around it.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PlistError`].
pub type PlistResult<T> = std::result::Result<T, PlistError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum PlistError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Document could not be read or written.
    #[error("document error: {0}")]
    Document(#[from] Box<DocumentError>),

    /// Setting expansion did not settle.
    #[error("expand error: {0}")]
    Expand(#[from] Box<ExpandError>),

    /// Darwin platform lookup failed.
    #[error("darwin error: {0}")]
    Darwin(#[from] Box<DarwinError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PlistError {
                fn from(err: $error) -> Self {
                    PlistError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    DocumentError => Document,
    ExpandError => Expand,
    DarwinError => Darwin,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `KEY=VALUE` assignment.
    #[error("invalid assignment '{0}', expected KEY=VALUE")]
    InvalidAssignment(String),
}

// --- Document Errors ---

/// Errors reading or writing property-list documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// JSON syntax or structure error.
    #[error("failed to parse '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Value has no representation in the target format.
    #[error("unsupported value at '{key}': {message}")]
    UnsupportedValue { key: String, message: String },

    /// A container refers to itself and cannot be serialized.
    #[error("reference cycle at '{key}'")]
    Cycle { key: String },

    /// Environment file root is not a mapping.
    #[error("expected a mapping at the root of '{path}'")]
    NotAMapping { path: String },
}

// --- Expand Errors ---

/// Errors from repeated (fixpoint) setting expansion.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// The setting kept changing after the allowed number of rounds.
    #[error("setting '{setting}' did not settle after {rounds} rounds")]
    NoFixpoint { setting: String, rounds: u32 },
}

// --- Darwin Errors ---

/// Errors from Darwin platform helpers.
#[derive(Debug, Error)]
pub enum DarwinError {
    /// No Apple platform matches the target OS list.
    #[error("no Apple platform corresponds to target OS list: {target_os}")]
    NoApplePlatform { target_os: String },

    /// Unknown device name.
    #[error("unknown Apple device '{0}'")]
    UnknownDevice(String),

    /// Unknown platform type.
    #[error("unknown platform type '{0}', expected 'device' or 'simulator'")]
    UnknownPlatformType(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error for `path`.
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.display().to_string())
        } else {
            Self::IoError {
                path: path.display().to_string(),
                source,
            }
        }
    }
}
