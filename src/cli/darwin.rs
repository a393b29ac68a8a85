// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `platform` and `resource` commands.

use clap::{Args, ValueEnum};

use crate::darwin::PlatformType;

/// Arguments for the `platform` command.
#[derive(Debug, Clone, Args)]
pub struct PlatformArgs {
    /// Target OS identifiers, e.g. 'ios,darwin,unix'.
    #[arg(long = "target-os", value_name = "OS", required = true, value_delimiter = ',', action = clap::ArgAction::Append)]
    pub target_os: Vec<String>,

    /// Device or simulator platform.
    #[arg(long = "platform-type", value_name = "TYPE")]
    pub platform_type: Option<PlatformTypeArg>,

    /// SDK version appended to the platform directory name.
    #[arg(long = "sdk-version", value_name = "VERSION")]
    pub sdk_version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformTypeArg {
    Device,
    Simulator,
}

impl From<PlatformTypeArg> for PlatformType {
    fn from(arg: PlatformTypeArg) -> Self {
        match arg {
            PlatformTypeArg::Device => Self::Device,
            PlatformTypeArg::Simulator => Self::Simulator,
        }
    }
}

/// Arguments for the `resource` command.
#[derive(Debug, Clone, Args)]
pub struct ResourceArgs {
    /// Resource path, e.g. 'App/en.lproj/Main.storyboard'.
    #[arg(value_name = "PATH")]
    pub path: String,
}
