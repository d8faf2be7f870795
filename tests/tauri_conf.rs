//! Checks that the framework configuration agrees with the shell's own config.

use autopm_desktop_lib::ShellConfig;
use serde_json::Value;

fn tauri_conf() -> Value {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tauri.conf.json");
    let raw = std::fs::read_to_string(path).expect("tauri.conf.json is readable");
    serde_json::from_str(&raw).expect("tauri.conf.json is valid JSON")
}

#[test]
fn product_name_matches_shell() {
    let conf = tauri_conf();
    assert_eq!(conf["productName"], Value::from(ShellConfig::default().name));
    assert_eq!(conf["identifier"], "dev.autopm.desktop");
}

#[test]
fn bundle_description_matches_shell() {
    assert_eq!(
        tauri_conf()["bundle"]["shortDescription"],
        Value::from(ShellConfig::default().description)
    );
}

#[test]
fn version_matches_crate() {
    assert_eq!(tauri_conf()["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn main_window_is_created_in_code() {
    // A declarative window would collide with the one built at setup.
    let windows = tauri_conf()["app"]["windows"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert!(windows.is_empty());
}

#[test]
fn bundling_is_disabled() {
    assert_eq!(tauri_conf()["bundle"]["active"], false);
}

#[test]
fn public_config_is_valid() {
    let config = ShellConfig::default();
    config.validate().unwrap();
    assert_eq!(config.window.url, "https://autopm.dev");
}
