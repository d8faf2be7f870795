//! AutoPM Desktop - Tauri shell
//!
//! Opens a single webview window on https://autopm.dev and stays out of the
//! way. All product behavior is served by the remote page.

mod config;
mod error;
mod logging;
mod window;

pub use config::{MacWindowConfig, ShellConfig, TitleBarKind, WindowConfig};
pub use error::{Error, Result};
pub use window::create_main_window;

use tauri::{RunEvent, WindowEvent};

/// Initialize logging, open the main window and block on the Tauri event loop.
///
/// Returns once the loop exits normally. Any failure while building the app or
/// its window is returned to the caller.
pub fn run() -> Result<()> {
    logging::init();

    let config = ShellConfig::default();
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        tauri = tauri::VERSION,
        description = %config.description,
        "{} starting",
        config.name
    );
    match serde_json::to_string(&config) {
        Ok(json) => tracing::debug!(config = %json, "shell configuration"),
        Err(e) => tracing::warn!(error = %e, "could not serialize shell configuration"),
    }

    let app = tauri::Builder::default().build(tauri::generate_context!())?;

    // Built before `run`; errors from the setup hook would panic instead.
    #[cfg(debug_assertions)]
    {
        let window = create_main_window(&app, &config.window)?;
        window.open_devtools();
    }
    #[cfg(not(debug_assertions))]
    create_main_window(&app, &config.window)?;

    let terminate_on_last_close = config.terminate_after_last_window_closed;

    app.run(move |_app, event| match event {
        RunEvent::WindowEvent {
            label,
            event: WindowEvent::Destroyed,
            ..
        } => {
            tracing::debug!(%label, "window destroyed");
        }
        RunEvent::ExitRequested { code, api, .. } => {
            if prevents_exit(code, terminate_on_last_close) {
                tracing::debug!("last window closed, keeping app alive");
                api.prevent_exit();
            }
        }
        RunEvent::Exit => {
            tracing::info!("event loop exited");
        }
        _ => {}
    });

    Ok(())
}

/// Whether an exit request should be vetoed.
///
/// `code` is `None` when the request comes from the last window closing; an
/// explicit exit code always goes through.
fn prevents_exit(code: Option<i32>, terminate_on_last_close: bool) -> bool {
    code.is_none() && !terminate_on_last_close
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_window_close_exits_when_terminating() {
        assert!(!prevents_exit(None, true));
    }

    #[test]
    fn last_window_close_is_vetoed_when_staying_alive() {
        assert!(prevents_exit(None, false));
    }

    #[test]
    fn explicit_exit_code_is_never_vetoed() {
        assert!(!prevents_exit(Some(0), true));
        assert!(!prevents_exit(Some(0), false));
        assert!(!prevents_exit(Some(2), false));
    }

    #[test]
    fn default_config_exits_with_last_window() {
        let config = ShellConfig::default();
        assert!(!prevents_exit(None, config.terminate_after_last_window_closed));
    }
}
