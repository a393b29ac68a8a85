// plistenv: Property List Variable Expander
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the Darwin platform helpers.

use plistenv::darwin::{
    AppleDevice, PlatformType, apple_platform_directory_name, apple_platform_name,
    localization_key, relative_resource_path, target_devices, targeted_device_family,
};
use plistenv::plist::{Environment, Node, VariableExpander};

#[test]
fn darwin_platform_directories() {
    let cases: [(&[&str], Option<PlatformType>, Option<&str>); 6] = [
        (&["ios", "darwin", "unix"], Some(PlatformType::Device), Some("17.0")),
        (&["ios", "darwin", "unix"], Some(PlatformType::Simulator), None),
        (&["macos", "darwin", "unix"], Some(PlatformType::Device), Some("14.2")),
        (&["tvos", "darwin"], Some(PlatformType::Device), None),
        (&["watchos", "darwin"], Some(PlatformType::Simulator), Some("10.0")),
        (&["ios"], None, None),
    ];
    let names: Vec<String> = cases
        .iter()
        .map(|&(os, kind, version)| apple_platform_directory_name(os, kind, version).unwrap())
        .collect();
    insta::assert_snapshot!(names.join("\n"), @r"
    iPhoneOS17.0
    iPhoneSimulator
    MacOSX14.2
    AppleTVOS
    WatchSimulator10.0
    iPhone
    ");
}

#[test]
fn darwin_platform_name_is_lowercase() {
    assert_eq!(
        apple_platform_name(&["tvos"], Some(PlatformType::Simulator)).unwrap(),
        "appletvsimulator"
    );
    assert!(apple_platform_name(&["linux"], None).is_err());
}

#[test]
fn darwin_device_family_into_plist() {
    let devices = target_devices(&["ios", "darwin"]).unwrap();
    assert_eq!(devices, &[AppleDevice::IPhone, AppleDevice::IPad]);

    let mut env = Environment::new();
    env.set("TARGETED_DEVICE_FAMILY", targeted_device_family(devices));
    let plist = Node::dict([("UIDeviceFamily", "$(TARGETED_DEVICE_FAMILY)")]);
    VariableExpander::new().expand(&plist, &env);

    assert_eq!(plist.get_str("UIDeviceFamily").as_deref(), Some("1,2"));
}

#[test]
fn darwin_non_apple_target_has_no_devices() {
    assert!(target_devices(&["linux", "unix"]).is_none());
}

#[test]
fn darwin_localized_resources() {
    let paths = [
        "Resources/en.lproj/InfoPlist.strings",
        "Resources/pt-BR.lproj/Sub/Dir/Main.storyboard",
        "Resources/Icon.icns",
        "en.lproj/Main.strings",
    ];
    let described: Vec<String> = paths
        .iter()
        .map(|p| {
            format!(
                "{p} -> {} {}",
                localization_key(p).unwrap_or("-"),
                relative_resource_path(p)
            )
        })
        .collect();
    insta::assert_snapshot!(described.join("\n"), @r"
    Resources/en.lproj/InfoPlist.strings -> en .
    Resources/pt-BR.lproj/Sub/Dir/Main.storyboard -> pt-BR Sub/Dir
    Resources/Icon.icns -> - .
    en.lproj/Main.strings -> - .
    ");
}
