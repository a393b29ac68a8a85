// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Apple platform and resource helpers.
//!
//! ```text
//! target OS list ["ios", "darwin", ...]
//!   target_devices()              -> [iphone, ipad]
//!   targeted_device_family()      -> "1,2"
//!   apple_platform_directory_name -> "iPhoneSimulator17.0"
//!   apple_platform_name           -> "iphonesimulator"
//!
//! resource path ".../en.lproj/sub/Main.strings"
//!   localization_key()            -> "en"
//!   relative_resource_path()      -> "sub"
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::DarwinError;

/// Apple device kinds, as used by `TARGETED_DEVICE_FAMILY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppleDevice {
    Mac,
    IPhone,
    IPad,
    Tv,
    Watch,
    Car,
}

impl AppleDevice {
    /// Numeric device family identifier. Macs have none.
    #[must_use]
    pub const fn device_number(self) -> Option<u8> {
        match self {
            Self::Mac => None,
            Self::IPhone => Some(1),
            Self::IPad => Some(2),
            Self::Tv => Some(3),
            Self::Watch => Some(4),
            Self::Car => Some(5),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::IPhone => "iphone",
            Self::IPad => "ipad",
            Self::Tv => "tv",
            Self::Watch => "watch",
            Self::Car => "car",
        }
    }
}

impl fmt::Display for AppleDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppleDevice {
    type Err = DarwinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mac" => Ok(Self::Mac),
            "iphone" => Ok(Self::IPhone),
            "ipad" => Ok(Self::IPad),
            "tv" => Ok(Self::Tv),
            "watch" => Ok(Self::Watch),
            "car" => Ok(Self::Car),
            _ => Err(DarwinError::UnknownDevice(s.to_string())),
        }
    }
}

/// Whether a platform directory refers to real hardware or the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    Device,
    Simulator,
}

impl PlatformType {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Device => "OS",
            Self::Simulator => "Simulator",
        }
    }
}

impl FromStr for PlatformType {
    type Err = DarwinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "device" => Ok(Self::Device),
            "simulator" => Ok(Self::Simulator),
            _ => Err(DarwinError::UnknownPlatformType(s.to_string())),
        }
    }
}

struct ApplePlatform {
    target_os: &'static str,
    directory: &'static str,
    devices: &'static [AppleDevice],
}

// Checked in this order; the first OS present in the target list wins.
static PLATFORMS: [ApplePlatform; 4] = [
    ApplePlatform {
        target_os: "ios",
        directory: "iPhone",
        devices: &[AppleDevice::IPhone, AppleDevice::IPad],
    },
    ApplePlatform {
        target_os: "macos",
        directory: "MacOSX",
        devices: &[AppleDevice::Mac],
    },
    ApplePlatform {
        target_os: "tvos",
        directory: "AppleTV",
        devices: &[AppleDevice::Tv],
    },
    ApplePlatform {
        target_os: "watchos",
        directory: "Watch",
        devices: &[AppleDevice::Watch],
    },
];

fn find_platform<S: AsRef<str>>(target_os: &[S]) -> Option<&'static ApplePlatform> {
    PLATFORMS
        .iter()
        .find(|p| target_os.iter().any(|os| os.as_ref() == p.target_os))
}

/// Devices available for a target OS list, or `None` for non-Apple targets.
#[must_use]
pub fn target_devices<S: AsRef<str>>(target_os: &[S]) -> Option<&'static [AppleDevice]> {
    find_platform(target_os).map(|p| p.devices)
}

/// `TARGETED_DEVICE_FAMILY` value for a device list.
///
/// Devices without a number (Macs) contribute an empty item.
#[must_use]
pub fn targeted_device_family(devices: &[AppleDevice]) -> String {
    devices
        .iter()
        .map(|d| d.device_number().map(|n| n.to_string()).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}

/// Platform directory name such as `iPhoneOS`, `WatchSimulator10.0` or
/// `MacOSX`.
///
/// macOS never takes a device/simulator suffix.
///
/// # Errors
///
/// Returns `DarwinError::NoApplePlatform` if no Apple OS is in `target_os`.
pub fn apple_platform_directory_name<S: AsRef<str>>(
    target_os: &[S],
    platform_type: Option<PlatformType>,
    version: Option<&str>,
) -> Result<String, DarwinError> {
    let platform = find_platform(target_os).ok_or_else(|| DarwinError::NoApplePlatform {
        target_os: target_os
            .iter()
            .map(|os| os.as_ref())
            .collect::<Vec<&str>>()
            .join(","),
    })?;

    let suffix = match platform_type {
        Some(t) if platform.target_os != "macos" => t.suffix(),
        _ => "",
    };
    Ok(format!(
        "{}{suffix}{}",
        platform.directory,
        version.unwrap_or_default()
    ))
}

/// Lower-cased platform directory name without a version (`iphoneos`,
/// `macosx`), as used for SDK names.
///
/// # Errors
///
/// Returns `DarwinError::NoApplePlatform` if no Apple OS is in `target_os`.
pub fn apple_platform_name<S: AsRef<str>>(
    target_os: &[S],
    platform_type: Option<PlatformType>,
) -> Result<String, DarwinError> {
    apple_platform_directory_name(target_os, platform_type, None).map(|s| s.to_lowercase())
}

const LPROJ: &str = ".lproj/";

/// Splits a resource path into its localization and the directory of the
/// resource relative to the `xx.lproj` folder.
fn resource_file_properties(path: &str) -> (Option<&str>, &str) {
    if let Some(lproj) = path.find(LPROJ)
        && let Some(slash) = path[..lproj].rfind('/')
    {
        let key = &path[slash + 1..lproj];
        return (Some(key), parent_dir(&path[lproj + LPROJ.len()..]));
    }
    (None, ".")
}

fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        None => ".",
        Some(0) => "/",
        Some(i) => &path[..i],
    }
}

/// Localization of a resource inside an `xx.lproj` directory.
///
/// The `.lproj` folder must be preceded by a `/`; bare relative paths such as
/// `en.lproj/Main.strings` count as unlocalized.
#[must_use]
pub fn localization_key(path: &str) -> Option<&str> {
    resource_file_properties(path).0
}

/// Directory of a localized resource relative to its `xx.lproj` folder, or
/// `.` for unlocalized resources.
#[must_use]
pub fn relative_resource_path(path: &str) -> &str {
    resource_file_properties(path).1
}

#[cfg(test)]
mod tests;
