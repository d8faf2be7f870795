//! Static shell configuration
//!
//! Everything the launcher needs is a literal: the window it opens, where that
//! window points, and how the title bar looks on macOS.

use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

pub const APP_NAME: &str = "AutoPM";
pub const MAIN_WINDOW_LABEL: &str = "main";
pub const REMOTE_URL: &str = "https://autopm.dev";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellConfig {
    pub name: String,
    pub description: String,
    /// Exit the process once the last window is closed (macOS would
    /// otherwise keep the app alive in the dock).
    pub terminate_after_last_window_closed: bool,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowConfig {
    pub label: String,
    pub title: String,
    /// Logical pixels
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub mac: MacWindowConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacWindowConfig {
    pub title_bar: TitleBarKind,
}

/// Title bar appearance on macOS. Ignored elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleBarKind {
    /// Standard native title bar
    Default,
    /// Transparent title bar, content drawn underneath
    Hidden,
    /// Like `Hidden`, with the traffic lights inset into the content
    HiddenInset,
}

impl TitleBarKind {
    pub fn hides_title(&self) -> bool {
        !matches!(self, TitleBarKind::Default)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name: APP_NAME.to_string(),
            description: APP_NAME.to_string(),
            terminate_after_last_window_closed: true,
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            label: MAIN_WINDOW_LABEL.to_string(),
            title: APP_NAME.to_string(),
            width: 600,
            height: 800,
            url: REMOTE_URL.to_string(),
            mac: MacWindowConfig::default(),
        }
    }
}

impl Default for MacWindowConfig {
    fn default() -> Self {
        Self {
            title_bar: TitleBarKind::HiddenInset,
        }
    }
}

impl ShellConfig {
    /// Reject configurations the framework would either refuse or render
    /// as an unusable window.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidConfig("application name is empty".to_string()));
        }
        self.window.validate()
    }
}

impl WindowConfig {
    pub fn parsed_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.url)?)
    }

    fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::InvalidConfig("window label is empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::InvalidConfig("window title is empty".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        let url = self.parsed_url()?;
        if url.scheme() != "https" {
            return Err(Error::InvalidConfig(format!(
                "remote URL must use https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }
}
