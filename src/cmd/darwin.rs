// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `platform` and `resource` commands.

use crate::cli::darwin::{PlatformArgs, ResourceArgs};
use crate::darwin::{
    PlatformType, apple_platform_directory_name, apple_platform_name, localization_key,
    relative_resource_path, target_devices, targeted_device_family,
};
use crate::error::Result;

fn align(rows: Vec<(&str, String)>) -> Vec<String> {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    rows.into_iter()
        .map(|(key, value)| format!("{key:<width$} = {value}"))
        .collect()
}

/// Describes the Apple platform of a target OS list.
///
/// # Errors
///
/// Returns `DarwinError::NoApplePlatform` if no Apple OS is listed.
pub fn format_platform(args: &PlatformArgs) -> Result<Vec<String>> {
    let platform_type = args.platform_type.map(PlatformType::from);
    let target_os = args.target_os.as_slice();
    let directory =
        apple_platform_directory_name(target_os, platform_type, args.sdk_version.as_deref())?;
    let name = apple_platform_name(target_os, platform_type)?;
    let devices = target_devices(target_os).unwrap_or_default();

    Ok(align(vec![
        ("directory", directory),
        ("name", name),
        (
            "devices",
            devices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        ("device_family", targeted_device_family(devices)),
    ]))
}

/// Describes the localization of a resource path.
#[must_use]
pub fn format_resource(args: &ResourceArgs) -> Vec<String> {
    align(vec![
        (
            "localization",
            localization_key(&args.path).unwrap_or_default().to_string(),
        ),
        ("relative_path", relative_resource_path(&args.path).to_string()),
    ])
}

/// Run the `platform` command.
///
/// # Errors
///
/// Returns an error if no Apple OS is listed.
pub fn run_platform_command(args: &PlatformArgs) -> Result<()> {
    for line in format_platform(args)? {
        println!("{line}");
    }
    Ok(())
}

/// Run the `resource` command.
pub fn run_resource_command(args: &ResourceArgs) {
    for line in format_resource(args) {
        println!("{line}");
    }
}
