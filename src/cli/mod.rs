// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for plistenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! plistenv [global options] <command>
//! version | options | inis
//! expand <FILE> [-D K=V]... [--env-file F] [--clean] [--pretty]
//! setting <VALUE> [-D K=V]...
//! clean <FILE> [--pretty]
//! platform --target-os OS... [--platform-type T] [--sdk-version V]
//! resource <PATH>
//! ```

pub mod darwin;
pub mod expand;
pub mod global;


use crate::cli::darwin::{PlatformArgs, ResourceArgs};
use crate::cli::expand::{CleanArgs, ExpandArgs, SettingArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Property List Variable Expander
///
/// Substitutes `$(VAR)`, `${VAR}` and `@VAR@` references in property lists.
#[derive(Debug, Parser)]
#[command(
    name = "plistenv",
    author,
    version,
    about = "Property List Variable Expander",
    long_about = "plistenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Expands $(VAR), ${VAR} and @VAR@ references in the string\n\
                  values of a JSON property list. A reference may carry a\n\
                  formatter, as in $(PRODUCT_NAME:rfc1034identifier).\n\
                  See `plistenv <command> --help` for more information about\n\
                  a command.",
    after_help = "INI FILES:\n\n\
                  plistenv reads `plistenv.toml` from the current directory if it\n\
                  exists. Additional INIs can be specified with --ini, those are\n\
                  loaded after it. PLISTENV_SECTION__KEY environment variables and\n\
                  --set options override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by plistenv.
    Inis,

    /// Expands variable references in a property list.
    Expand(ExpandArgs),

    /// Expands a single setting until it stops changing.
    Setting(SettingArgs),

    /// Removes null and empty-string entries from a property list.
    Clean(CleanArgs),

    /// Prints the Apple platform names for a target OS list.
    Platform(PlatformArgs),

    /// Prints the localization of a resource path.
    Resource(ResourceArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
