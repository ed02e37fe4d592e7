//! Demo entry point used by the `basic-fog` binary

use std::path::PathBuf;

use anyhow::{Context, Result};
use basic_fog_core::Config;
use basic_fog_core::config::{self, validate_keybindings};

use crate::app::FogDemoApp;

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// glTF/GLB file to show; `None` uses the procedural scene
    pub model_path: Option<PathBuf>,
    /// Config file overriding the platform default location
    pub config_path: Option<PathBuf>,
    pub fullscreen: bool,
    pub no_vsync: bool,
    /// Write the resolved config and exit instead of opening a window
    pub save_config: bool,
}

/// Merge command-line overrides into the loaded config.
pub fn resolve_config(player: &PlayerConfig) -> Result<Config> {
    let mut config = match &player.config_path {
        // Saving may create the file
        Some(path) if player.save_config && !path.exists() => Config::default(),
        Some(path) => config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load(),
    };

    if player.fullscreen {
        config.window.fullscreen = true;
    }
    if player.no_vsync {
        config.window.vsync = false;
    }
    Ok(config)
}

/// Write the resolved config to `--config` or the platform config file.
pub fn write_config(player: &PlayerConfig, config: &Config) -> Result<PathBuf> {
    match &player.config_path {
        Some(path) => {
            config::save_to(config, path)
                .with_context(|| format!("Failed to save config {}", path.display()))?;
            Ok(path.clone())
        }
        None => config::save(config).context("Failed to save config"),
    }
}

/// Run the demo until the window closes or the user exits
pub fn run(player: PlayerConfig) -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting basic fog demo");
    match &player.model_path {
        Some(path) => tracing::info!("Model: {}", path.display()),
        None => tracing::info!("Model: procedural scene"),
    }

    let config = resolve_config(&player)?;
    for warning in validate_keybindings(&config) {
        tracing::warn!("{}", warning);
    }

    if player.save_config {
        let path = write_config(&player, &config)?;
        tracing::info!("Saved config to {}", path.display());
        return Ok(());
    }

    let app = FogDemoApp::new(config, player.model_path);
    basic_fog_core::app::run(app)
}
