use crate::corpus::CleanOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "mushaf-index";
const CONFIG_FILE: &str = "config.json";

/// Application configuration
///
/// Every field falls back to its default, so a config file only needs the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Relative page index to convert
    #[serde(default = "default_pages_path")]
    pub pages_path: PathBuf,

    /// Where the absolute page index is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Raw Uthmani text, one ayah per line
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// Cleaned corpus text, written from `source_path`
    #[serde(default = "default_text_path")]
    pub text_path: PathBuf,

    /// Strip sukoon and small-zero marks the app cannot render
    #[serde(default = "default_true")]
    pub clean_glyphs: bool,

    /// Glue small pause marks to the preceding word
    #[serde(default)]
    pub join_small_stops: bool,

    /// Colored console output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_pages_path() -> PathBuf {
    PathBuf::from("pages.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("pages_absolute.json")
}

fn default_source_path() -> PathBuf {
    PathBuf::from("/tmp/quran-uthmani.txt")
}

fn default_text_path() -> PathBuf {
    PathBuf::from("quran_text.txt")
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pages_path: default_pages_path(),
            output_path: default_output_path(),
            source_path: default_source_path(),
            text_path: default_text_path(),
            clean_glyphs: default_true(),
            join_small_stops: false,
            color: default_true(),
        }
    }
}

impl AppConfig {
    /// Load config from the app config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            clean_glyphs: self.clean_glyphs,
            join_small_stops: self.join_small_stops,
        }
    }
}

/// Get the path to the default config file
///
/// `None` when the platform has no config directory.
pub fn get_config_path() -> Option<PathBuf> {
    get_app_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the application config directory (not created)
pub fn get_app_config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else {
        // Linux/Unix: XDG_CONFIG_HOME or ~/.config, Windows: roaming AppData
        dirs::config_dir()
    };
    base.map(|b| b.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"pages_path": "layout/pages.json", "color": false}"#).unwrap();
        assert_eq!(config.pages_path, PathBuf::from("layout/pages.json"));
        assert_eq!(config.output_path, PathBuf::from("pages_absolute.json"));
        assert!(config.clean_glyphs);
        assert!(!config.join_small_stops);
        assert!(!config.color);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("mushaf_config_{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE);

        let config = AppConfig {
            join_small_stops: true,
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_bad_config_is_error() {
        let dir = std::env::temp_dir().join(format!("mushaf_badconfig_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, r#"{"color": "yes"}"#).unwrap();
        assert!(AppConfig::load_from(&path).is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_config_path_ends_with_app_name() {
        if let Some(path) = get_config_path() {
            assert!(path.ends_with("mushaf-index/config.json"));
        }
    }
}
