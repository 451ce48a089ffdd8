//! Locating and loading `config.toml`

use std::path::{Path, PathBuf};

use snhos_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "snh-os";
const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/snh-os/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Settings::default()
        }
    }
}

/// Read and parse one settings file
pub fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str::<Settings>(&content)
        .map_err(|e| Error::config(path, e.message().to_string()))?;

    if let Err(e) = settings.network.joke_url() {
        warn!(
            "Invalid joke_api_url {:?} in {:?}: {}",
            settings.network.joke_api_url, path, e
        );
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snhos_core::Theme;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_loads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[ui]\ntheme = \"green\"\nskip_boot = true\n\n[shell]\nuser = \"trinity\"\n",
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.ui.theme, Theme::Green);
        assert!(settings.ui.skip_boot);
        assert_eq!(settings.shell.user, "trinity");
        assert_eq!(settings.shell.host, "desktop");
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui\ntheme = ").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_read_settings_reports_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui\ntheme = ").unwrap();

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains(CONFIG_FILENAME));
    }

    #[test]
    fn test_unknown_theme_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ntheme = \"blue\"\n").unwrap();
        assert_eq!(load_settings(Some(&path)).ui.theme, Theme::Amber);
    }
}
