// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    AppleDevice, PlatformType, apple_platform_directory_name, apple_platform_name,
    localization_key, relative_resource_path, target_devices, targeted_device_family,
};
use crate::error::DarwinError;

#[test]
fn test_device_numbers() {
    let numbers: Vec<_> = ["mac", "iphone", "ipad", "tv", "watch", "car"]
        .iter()
        .map(|name| name.parse::<AppleDevice>().unwrap().device_number())
        .collect();
    assert_eq!(numbers, [None, Some(1), Some(2), Some(3), Some(4), Some(5)]);
    assert!("toaster".parse::<AppleDevice>().is_err());
}

#[test]
fn test_target_devices() {
    assert_eq!(
        target_devices(&["ios", "darwin", "bsd", "unix"]),
        Some(&[AppleDevice::IPhone, AppleDevice::IPad][..])
    );
    assert_eq!(
        target_devices(&["watchos", "darwin"]),
        Some(&[AppleDevice::Watch][..])
    );
    assert_eq!(target_devices(&["linux", "unix"]), None);
}

#[test]
fn test_targeted_device_family() {
    insta::assert_snapshot!(
        targeted_device_family(&[AppleDevice::IPhone, AppleDevice::IPad]),
        @"1,2"
    );
    assert_eq!(targeted_device_family(&[AppleDevice::Mac]), "");
    assert_eq!(
        targeted_device_family(&[AppleDevice::Mac, AppleDevice::Tv]),
        ",3"
    );
}

#[test]
fn test_platform_directory_names() {
    let ios = ["ios", "darwin"];
    let names = [
        apple_platform_directory_name(&ios, Some(PlatformType::Device), None).unwrap(),
        apple_platform_directory_name(&ios, Some(PlatformType::Simulator), Some("17.2")).unwrap(),
        apple_platform_directory_name(&ios, None, None).unwrap(),
        apple_platform_directory_name(&["macos", "darwin"], Some(PlatformType::Device), Some("14.0"))
            .unwrap(),
        apple_platform_directory_name(&["tvos"], Some(PlatformType::Device), None).unwrap(),
        apple_platform_directory_name(&["watchos"], Some(PlatformType::Simulator), None).unwrap(),
    ];
    insta::assert_snapshot!(
        names.join("\n"),
        @r"
    iPhoneOS
    iPhoneSimulator17.2
    iPhone
    MacOSX14.0
    AppleTVOS
    WatchSimulator
    "
    );
}

#[test]
fn test_platform_name_is_lowercase() {
    assert_eq!(
        apple_platform_name(&["ios"], Some(PlatformType::Simulator)).unwrap(),
        "iphonesimulator"
    );
    assert_eq!(apple_platform_name(&["macos"], None).unwrap(), "macosx");
}

#[test]
fn test_platform_requires_apple_target() {
    let err = apple_platform_name(&["linux", "unix"], None).unwrap_err();
    assert!(matches!(err, DarwinError::NoApplePlatform { ref target_os } if target_os == "linux,unix"));
}

#[test]
fn test_platform_type_parse() {
    assert_eq!("device".parse::<PlatformType>().unwrap(), PlatformType::Device);
    assert!("emulator".parse::<PlatformType>().is_err());
}

#[test]
fn test_localized_resource_paths() {
    let path = "/src/res/en.lproj/sub/dir/Main.strings";
    assert_eq!(localization_key(path), Some("en"));
    assert_eq!(relative_resource_path(path), "sub/dir");

    let flat = "/src/res/pt_BR.lproj/Localizable.strings";
    assert_eq!(localization_key(flat), Some("pt_BR"));
    assert_eq!(relative_resource_path(flat), ".");
}

#[test]
fn test_unlocalized_resource_paths() {
    assert_eq!(localization_key("/src/res/icon.png"), None);
    assert_eq!(relative_resource_path("/src/res/icon.png"), ".");
    // No directory separator before the .lproj folder.
    assert_eq!(localization_key("en.lproj/Main.strings"), None);
    assert_eq!(relative_resource_path("en.lproj/Main.strings"), ".");
}
