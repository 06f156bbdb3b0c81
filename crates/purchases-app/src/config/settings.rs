//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use purchases_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "purchase-history";

const DEFAULT_CONFIG_CONTENT: &str = r#"# Purchase History Configuration

[ui]
# Icon style: "unicode" (works everywhere) or "nerd_fonts"
icons = "unicode"
# Show the product image reference next to each line item
show_item_images = true

[display]
currency_symbol = "$"
# chrono strftime pattern, e.g. "%Y-%m-%d"
date_format = "%B %-d, %Y"

[behavior]
# Open every order's details on start-up
start_expanded = false
"#;

/// Default config file location: `<config_dir>/purchase-history/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`default_config_path`] when `None`
///
/// Never fails: a missing file yields defaults, an unreadable or invalid one
/// logs a warning and yields defaults.
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
        debug!(
            "{}, using defaults",
            Error::ConfigNotFound { path: config_path }
        );
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file at `path`
///
/// Returns `Ok(false)` without touching anything if the file already exists.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    std::fs::write(path, DEFAULT_CONFIG_CONTENT)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Wrote default config to {:?}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("config.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[ui]
icons = "nerd_fonts"
show_item_images = false

[display]
currency_symbol = "€"

[behavior]
start_expanded = true
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(!settings.ui.show_item_images);
        assert_eq!(settings.display.currency_symbol, "€");
        assert_eq!(settings.display.date_format, "%B %-d, %Y");
        assert!(settings.behavior.start_expanded);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file_creates_parsable_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[display]\ncurrency_symbol = \"£\"\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings(Some(&path)).display.currency_symbol, "£");
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("purchase-history/config.toml"));
        }
    }
}
