//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for demo settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::effect::CameraSetup;
use crate::input::InputConfig;

const CONFIG_FILE: &str = "config.toml";

/// Errors from reading or writing a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Demo configuration.
///
/// Every section and field has a default, so partial files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,
    /// Fixed camera
    #[serde(default)]
    pub camera: CameraSetup,
    /// Key bindings and stick deadzone
    #[serde(default)]
    pub input: InputConfig,
    /// Text overlay settings
    #[serde(default)]
    pub overlay: OverlayConfig,
    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title (default: "BasicEffect Fog")
    #[serde(default = "default_title")]
    pub title: String,
    /// Initial client width in pixels (default: 800)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Initial client height in pixels (default: 480)
    #[serde(default = "default_height")]
    pub height: u32,
    /// Whether to start in borderless fullscreen (default: false)
    #[serde(default)]
    pub fullscreen: bool,
    /// Whether to enable vertical sync (default: true)
    #[serde(default = "default_true")]
    pub vsync: bool,
}

/// Text overlay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Font size in pixels (default: 16)
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// TTF/OTF file replacing the built-in font
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Background color as sRGB bytes (default: cornflower blue)
    #[serde(default = "default_clear_color")]
    pub clear_color: [u8; 3],
}

fn default_title() -> String {
    "BasicEffect Fog".to_string()
}
fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    480
}
fn default_true() -> bool {
    true
}
fn default_font_size() -> f32 {
    16.0
}
fn default_clear_color() -> [u8; 3] {
    [100, 149, 237]
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            fullscreen: false,
            vsync: default_true(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            font_path: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: default_clear_color(),
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\BasicFog\config`
/// On macOS: `~/Library/Application Support/io.basic-fog.BasicFog`
/// On Linux: `~/.config/BasicFog`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.basic-fog", "", "BasicFog")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the platform config directory.
///
/// A missing file yields defaults silently; an unreadable or malformed one
/// yields defaults with a warning.
pub fn load() -> Config {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }

    match load_from(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("{}; using defaults", e);
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves the configuration to the platform config directory.
///
/// Creates the directory if it doesn't exist. Returns the written path.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(CONFIG_FILE);
    save_to(config, &path)?;
    Ok(path)
}

/// Saves the configuration as pretty TOML to an explicit file.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)
}

/// Validate that no keybindings conflict with each other.
///
/// Returns a list of warning messages for any conflicts found.
pub fn validate_keybindings(config: &Config) -> Vec<String> {
    let mapping = &config.input.keyboard;
    let bindings = [
        (mapping.menu_up, "input.keyboard.menu_up"),
        (mapping.menu_down, "input.keyboard.menu_down"),
        (mapping.value_decrease, "input.keyboard.value_decrease"),
        (mapping.value_increase, "input.keyboard.value_increase"),
        (mapping.exit, "input.keyboard.exit"),
    ];

    let mut warnings = Vec::new();
    for (i, (key, name)) in bindings.iter().enumerate() {
        if let Some((_, other)) = bindings[..i].iter().find(|(k, _)| k == key) {
            warnings.push(format!(
                "{} key '{}' conflicts with {}",
                name,
                crate::input::keycode_serde::keycode_to_string(key),
                other
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use winit::keyboard::KeyCode;

    // =============================================================
    // Default value tests
    // =============================================================

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 480);
        assert!(!config.window.fullscreen);
        assert!(config.window.vsync);
        assert_eq!(config.render.clear_color, [100, 149, 237]);
        assert!(config.overlay.font_path.is_none());
        assert_eq!(config.camera.fov_degrees, 45.0);
    }

    // =============================================================
    // TOML serialization tests
    // =============================================================

    #[test]
    fn test_config_serialize_roundtrip() {
        let mut config = Config::default();
        config.window.fullscreen = true;
        config.window.vsync = false;
        config.camera.position = Vec3::new(1.0, 2.0, 3.0);
        config.overlay.font_path = Some(PathBuf::from("fonts/demo.ttf"));
        config.render.clear_color = [0, 0, 0];

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_deserialize_partial_sections() {
        let toml_str = r#"
[window]
width = 1280

[camera]
target = [0.0, 0.0, 0.0]

[input.keyboard]
exit = "Q"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 480); // default
        assert_eq!(config.camera.target, Vec3::ZERO);
        assert_eq!(config.camera.position, Vec3::new(0.0, 30.0, 50.0)); // default
        assert_eq!(config.input.keyboard.exit, KeyCode::KeyQ);
        assert_eq!(config.input.keyboard.menu_up, KeyCode::ArrowUp); // default
    }

    // =============================================================
    // File IO tests
    // =============================================================

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.overlay.font_size = 22.0;
        save_to(&config, &path).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window\nwidth = ").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    // =============================================================
    // Keybinding validation tests
    // =============================================================

    #[test]
    fn test_default_keybindings_have_no_conflicts() {
        assert!(validate_keybindings(&Config::default()).is_empty());
    }

    #[test]
    fn test_keybinding_conflict_reported() {
        let mut config = Config::default();
        config.input.keyboard.exit = KeyCode::ArrowUp;

        let warnings = validate_keybindings(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("input.keyboard.exit"));
        assert!(warnings[0].contains("menu_up"));
    }
}
