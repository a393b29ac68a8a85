// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use plistenv::config::Config;
use plistenv::config::loader::ConfigLoader;
use plistenv::logging::LogLevel;
use plistenv::plist::{Node, VariableExpander};

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").unwrap();
    insta::assert_yaml_snapshot!(config, @r"
    global:
      output_log_level: 3
      file_log_level: 5
    expand:
      warn_undefined: true
      inherit_process_env: false
      max_fixpoint_rounds: 16
    ");
}

#[test]
fn config_parse_all_sections() {
    let toml = r#"
[global]
output_log_level = 2
file_log_level = 6
log_file = "logs/plistenv.log"

[expand]
warn_undefined = false
inherit_process_env = true
max_fixpoint_rounds = 32

[variables]
product = "viewer"
channel = "beta"
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_yaml_snapshot!(config, @r#"
    global:
      output_log_level: 2
      file_log_level: 6
      log_file: logs/plistenv.log
    expand:
      warn_undefined: false
      inherit_process_env: true
      max_fixpoint_rounds: 32
    variables:
      channel: beta
      product: viewer
    "#);
}

#[test]
fn config_parse_invalid_toml() {
    assert!(Config::parse("[expand\nwarn_undefined = ").is_err());
}

#[test]
fn config_parse_wrong_type() {
    assert!(Config::parse("[expand]\nmax_fixpoint_rounds = \"many\"\n").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(
        &base,
        "[global]\noutput_log_level = 1\n[variables]\nname = \"base\"\nkeep = \"yes\"\n",
    )
    .unwrap();
    std::fs::write(&local, "[variables]\nname = \"local\"\n").unwrap();

    let config = ConfigLoader::new()
        .ini(&base)
        .ini(&local)
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::Error);
    assert_eq!(config.variables.get("name").map(String::as_str), Some("local"));
    assert_eq!(config.variables.get("keep").map(String::as_str), Some("yes"));
}

#[test]
fn config_set_overrides_files() {
    let config = ConfigLoader::new()
        .inline("[global]\noutput_log_level = 1\n")
        .set_all(["global.output_log_level=4", "expand.inherit_process_env=false"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::Debug);
}

#[test]
fn config_variables_drive_expansion() {
    let config = Config::parse("[variables]\nname = \"My App\"\n").unwrap();
    let plist = Node::dict([("id", "org.example.$(name:rfc1034identifier)")]);

    VariableExpander::new().expand(&plist, &config.environment());
    assert_eq!(plist.get_str("id").as_deref(), Some("org.example.My-App"));
}
