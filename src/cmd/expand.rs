// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `expand`, `setting` and `clean` commands.
//!
//! ```text
//! Config::environment() + --env-file + -D  --> Environment
//! read_json(FILE) --> expand --> [clean] --> write_json(stdout)
//! ```

use std::io;

use tracing::{debug, info, warn};

use crate::cli::expand::{CleanArgs, ExpandArgs, SettingArgs, VariableArgs};
use crate::config::Config;
use crate::document::{read_environment, read_json, write_json};
use crate::error::Result;
use crate::logging::document_span;
use crate::plist::{Environment, Node, VariableExpander, clean_property_list, expand_setting};

/// Builds the expansion environment from config, `--env-file` and `-D`.
///
/// # Errors
///
/// Returns an error if the env file cannot be read or a define is malformed.
pub fn build_environment(args: &VariableArgs, config: &Config) -> Result<Environment> {
    let mut env = config.environment();
    if let Some(ref path) = args.env_file {
        env.merge(&read_environment(path)?);
    }
    for define in &args.defines {
        env.apply_assignment(define)?;
    }
    debug!(variables = env.len(), "environment ready");
    Ok(env)
}

/// Expands a property list document in place and returns it together with
/// the number of unresolved references.
///
/// Runs inside a `document` span that records the undefined and removed
/// counts.
///
/// # Errors
///
/// Returns an error if the document or env file cannot be read.
pub fn expand_document(args: &ExpandArgs, config: &Config) -> Result<(Node, usize)> {
    let span = document_span("expand", &args.file);
    let _entered = span.enter();

    let env = build_environment(&args.variables, config)?;
    let node = read_json(&args.file)?;

    let warn_undefined = config.expand.warn_undefined;
    let mut undefined = 0usize;
    let mut expander = VariableExpander::with_handler(|key: &str, name: &str| {
        undefined += 1;
        if warn_undefined {
            warn!(key, "undefined variable {name} in variable expansion");
        }
    });
    expander.expand(&node, &env);
    span.record("undefined", undefined);

    if args.clean {
        span.record("removed", clean_property_list(&node));
    }
    info!("expanded property list");
    Ok((node, undefined))
}

/// Run the `expand` command.
///
/// # Errors
///
/// Returns an error if reading, expanding or writing fails.
pub fn run_expand_command(args: &ExpandArgs, config: &Config) -> Result<()> {
    let (node, _) = expand_document(args, config)?;
    write_json(&node, io::stdout().lock(), args.pretty)?;
    Ok(())
}

/// Run the `setting` command.
///
/// # Errors
///
/// Returns an error if the environment cannot be built or the setting does
/// not settle within `expand.max_fixpoint_rounds` passes.
pub fn run_setting_command(args: &SettingArgs, config: &Config) -> Result<()> {
    let env = build_environment(&args.variables, config)?;
    let value = expand_setting(&args.value, &env, config.expand.max_fixpoint_rounds)?;
    println!("{value}");
    Ok(())
}

/// Run the `clean` command.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_clean_command(args: &CleanArgs) -> Result<()> {
    let span = document_span("clean", &args.file);
    let _entered = span.enter();

    let node = read_json(&args.file)?;
    span.record("removed", clean_property_list(&node));
    info!("cleaned property list");
    write_json(&node, io::stdout().lock(), args.pretty)?;
    Ok(())
}
