// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Expand | Setting | Clean | Platform | Resource | Config
//! ```

use std::process::ExitCode;

use plistenv::cli::global::GlobalOptions;
use plistenv::cli::{self, Command};
use plistenv::cmd::config::{run_inis_command, run_options_command};
use plistenv::cmd::darwin::{run_platform_command, run_resource_command};
use plistenv::cmd::expand::{run_clean_command, run_expand_command, run_setting_command};
use plistenv::config::loader::ConfigLoader;
use plistenv::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use plistenv::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&LogConfig::from(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_sources());
            Ok(())
        }
        Some(Command::Expand(args)) => run_expand_command(args, config),
        Some(Command::Setting(args)) => run_setting_command(args, config),
        Some(Command::Clean(args)) => run_clean_command(args),
        Some(Command::Platform(args)) => run_platform_command(args),
        Some(Command::Resource(args)) => {
            run_resource_command(args);
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().default_file(DEFAULT_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.ini(ini_path);
    }
    loader.env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> plistenv::error::Result<Config> {
    build_config_loader(global)
        .set_all(global.to_config_overrides())?
        .build()
}
