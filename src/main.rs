//! AutoPM Desktop Application
//!
//! Entry point for the Tauri desktop application.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    if let Err(err) = autopm_desktop_lib::run() {
        tracing::error!(error = %err, "AutoPM Desktop failed to start");
        std::process::exit(1);
    }
}
