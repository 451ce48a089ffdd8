//! Small shared enums used across the app and TUI crates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Accent palette of the whole desktop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Amber,
    Green,
    Purple,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Amber, Theme::Green, Theme::Purple];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Amber => "amber",
            Theme::Green => "green",
            Theme::Purple => "purple",
        }
    }

    /// Human label used by the command palette
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Amber => "Cyber Amber",
            Theme::Green => "Matrix Green",
            Theme::Purple => "Neon Purple",
        }
    }

    /// Body of the toast shown after switching to this theme
    pub fn announcement(&self) -> &'static str {
        match self {
            Theme::Amber => "Standard protocol loaded.",
            Theme::Green => "Matrix protocol loaded.",
            Theme::Purple => "Neon protocol loaded.",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a theme name is not one of the known palettes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    /// Exact, case-sensitive match on the lowercase name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Error => "✕",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str_is_exact() {
        assert_eq!("green".parse::<Theme>(), Ok(Theme::Green));
        assert!("Green".parse::<Theme>().is_err());
        assert!("blue".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }
        let w: Wrapper = serde_json::from_str(r#"{"theme":"purple"}"#).unwrap();
        assert_eq!(w.theme, Theme::Purple);
    }

    #[test]
    fn test_severity_icons_distinct() {
        let icons = [
            Severity::Info.icon(),
            Severity::Success.icon(),
            Severity::Warning.icon(),
            Severity::Error.icon(),
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
