//! Main webview window

use tauri::{
    LogicalPosition, Manager, Runtime, TitleBarStyle, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};

use crate::config::{TitleBarKind, WindowConfig};
use crate::error::{Error, Result};

/// Open the window described by `config`, loading its remote URL.
pub fn create_main_window<R: Runtime, M: Manager<R>>(
    manager: &M,
    config: &WindowConfig,
) -> Result<WebviewWindow<R>> {
    if manager.get_webview_window(&config.label).is_some() {
        return Err(Error::DuplicateWindow(config.label.clone()));
    }

    let url = config.parsed_url()?;
    tracing::debug!(label = %config.label, %url, "building webview window");

    let builder = WebviewWindowBuilder::new(manager, &config.label, WebviewUrl::External(url))
        .title(&config.title)
        .inner_size(f64::from(config.width), f64::from(config.height))
        .resizable(true);

    #[cfg(target_os = "macos")]
    let builder = builder
        .title_bar_style(title_bar_style(config.mac.title_bar))
        .hidden_title(config.mac.title_bar.hides_title());

    #[cfg(target_os = "macos")]
    let builder = match traffic_light_position(config.mac.title_bar) {
        Some(position) => builder.traffic_light_position(position),
        None => builder,
    };

    let window = builder.build()?;

    tracing::info!(
        label = %config.label,
        title = %config.title,
        width = config.width,
        height = config.height,
        url = %config.url,
        "main window created"
    );

    Ok(window)
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn title_bar_style(kind: TitleBarKind) -> TitleBarStyle {
    match kind {
        TitleBarKind::Default => TitleBarStyle::Visible,
        TitleBarKind::Hidden | TitleBarKind::HiddenInset => TitleBarStyle::Overlay,
    }
}

/// Traffic light offset from the top-left corner for inset title bars.
const TRAFFIC_LIGHT_INSET: (f64, f64) = (20.0, 24.0);

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn traffic_light_position(kind: TitleBarKind) -> Option<LogicalPosition<f64>> {
    match kind {
        TitleBarKind::HiddenInset => Some(LogicalPosition::new(
            TRAFFIC_LIGHT_INSET.0,
            TRAFFIC_LIGHT_INSET.1,
        )),
        TitleBarKind::Default | TitleBarKind::Hidden => None,
    }
}
