//! Basic Fog - interactive linear fog demo
//!
//! # Usage
//!
//! ```bash
//! basic-fog
//! basic-fog path/to/model.glb
//! basic-fog model.gltf --fullscreen --no-vsync
//! basic-fog --config demo.toml
//! basic-fog --fullscreen --save-config
//! ```
//!
//! # Controls
//!
//! - Up/Down, stick up/down, left click: select menu item
//! - Left/Right, left stick, drag with left button: change value
//! - ESC or gamepad Back: quit

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use basic_fog::player::{PlayerConfig, run};

#[derive(Parser)]
#[command(name = "basic-fog")]
#[command(author, version, about = "Basic effect fog demo")]
struct Args {
    /// Model to show (.gltf or .glb); omit for the built-in scene
    model: Option<PathBuf>,

    /// Config file to use instead of the platform default
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start in fullscreen mode (borderless window)
    #[arg(long, short = 'f')]
    fullscreen: bool,

    /// Present without waiting for vertical sync
    #[arg(long)]
    no_vsync: bool,

    /// Write the resolved config (defaults plus flags) and exit
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(model) = &args.model
        && !model.exists()
    {
        anyhow::bail!("Model file not found: {}", model.display());
    }

    run(PlayerConfig {
        model_path: args.model,
        config_path: args.config,
        fullscreen: args.fullscreen,
        no_vsync: args.no_vsync,
        save_config: args.save_config,
    })
}
