// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `expand`, `setting` and `clean` commands.
//!
//! # Variable Layers
//!
//! ```text
//! [variables] / process env  (config)
//!   < --env-file FILE        (flat JSON object)
//!   < -D KEY=VALUE           (repeatable)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Variable definitions shared by `expand` and `setting`.
#[derive(Debug, Clone, Default, Args)]
pub struct VariableArgs {
    /// Defines a variable. Can be specified multiple times.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub defines: Vec<String>,

    /// Reads variables from a flat JSON object.
    #[arg(long = "env-file", value_name = "FILE")]
    pub env_file: Option<PathBuf>,
}

/// Arguments for the `expand` command.
#[derive(Debug, Clone, Args)]
pub struct ExpandArgs {
    /// JSON property list to expand, `-` for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub variables: VariableArgs,

    /// Removes null and empty-string entries after expanding.
    #[arg(long)]
    pub clean: bool,

    /// Pretty-prints the output.
    #[arg(short = 'p', long)]
    pub pretty: bool,
}

/// Arguments for the `setting` command.
#[derive(Debug, Clone, Args)]
pub struct SettingArgs {
    /// Setting value, e.g. 'org.example.$(PRODUCT_NAME:rfc1034identifier)'.
    #[arg(value_name = "VALUE")]
    pub value: String,

    #[command(flatten)]
    pub variables: VariableArgs,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Args)]
pub struct CleanArgs {
    /// JSON property list to clean, `-` for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Pretty-prints the output.
    #[arg(short = 'p', long)]
    pub pretty: bool,
}
