//! Configuration types for SNH_OS
//!
//! Defines:
//! - `Settings` - Everything read from `config.toml`
//! - One struct per table (`[ui]`, `[shell]`, `[behavior]`, `[network]`)
//! - `SettingsOverrides` - Values given on the command line

use std::time::Duration;

use serde::{Deserialize, Serialize};
use snhos_core::Theme;
use url::Url;

pub const DEFAULT_JOKE_API_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub shell: ShellSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub network: NetworkSettings,
}

/// Look and pacing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Accent palette at startup
    #[serde(default)]
    pub theme: Theme,

    /// Go straight to the desktop
    #[serde(default)]
    pub skip_boot: bool,

    /// Event poll timeout; one tick per expiry
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            skip_boot: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Shell identity shown in the prompt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShellSettings {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// How long a toast stays up
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl BehaviorSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// The joke fetch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkSettings {
    #[serde(default = "default_joke_api_url")]
    pub joke_api_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// When false, `joke` fails without touching the network
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            joke_api_url: default_joke_api_url(),
            timeout_ms: default_timeout_ms(),
            enabled: true,
        }
    }
}

impl NetworkSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The joke endpoint, if it parses as an http(s) URL
    pub fn joke_url(&self) -> Result<Url, String> {
        let url = Url::parse(&self.joke_api_url).map_err(|e| e.to_string())?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(format!("unsupported scheme '{other}'")),
        }
    }
}

/// Command-line values that win over the file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub theme: Option<Theme>,
    pub skip_boot: bool,
    pub user: Option<String>,
}

impl Settings {
    pub fn apply(&mut self, overrides: SettingsOverrides) {
        if let Some(theme) = overrides.theme {
            self.ui.theme = theme;
        }
        if overrides.skip_boot {
            self.ui.skip_boot = true;
        }
        if let Some(user) = overrides.user {
            self.shell.user = user;
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_user() -> String {
    "visitor".to_string()
}

fn default_host() -> String {
    "desktop".to_string()
}

fn default_toast_duration_ms() -> u64 {
    4000
}

fn default_joke_api_url() -> String {
    DEFAULT_JOKE_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.theme, Theme::Amber);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert_eq!(settings.shell.user, "visitor");
        assert_eq!(settings.shell.host, "desktop");
        assert_eq!(settings.behavior.toast_duration_ms, 4000);
        assert!(settings.network.enabled);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
theme = "purple"

[network]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(settings.ui.theme, Theme::Purple);
        assert!(!settings.ui.skip_boot);
        assert!(!settings.network.enabled);
        assert_eq!(settings.network.timeout_ms, 5000);
        assert_eq!(settings.shell.user, "visitor");
    }

    #[test]
    fn test_joke_url_validation() {
        let mut network = NetworkSettings::default();
        assert!(network.joke_url().is_ok());

        network.joke_api_url = "ftp://example.com/joke".into();
        assert!(network.joke_url().is_err());

        network.joke_api_url = "not a url".into();
        assert!(network.joke_url().is_err());
    }

    #[test]
    fn test_overrides_win() {
        let mut settings = Settings::default();
        settings.apply(SettingsOverrides {
            theme: Some(Theme::Green),
            skip_boot: true,
            user: Some("neo".into()),
        });
        assert_eq!(settings.ui.theme, Theme::Green);
        assert!(settings.ui.skip_boot);
        assert_eq!(settings.shell.user, "neo");
    }
}
