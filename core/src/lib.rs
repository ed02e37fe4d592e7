//! Basic Fog Core - window-independent demo framework
//!
//! This crate holds everything of the fog demo that does not need a GPU:
//! the fog parameter set and its menu, input snapshots with edge detection,
//! the per-frame demo controller, the basic-effect parameter block and the
//! overlay layout. The wgpu backend lives in the `basic-fog` crate.
//!
//! # Architecture
//!
//! - [`DemoController`] - Per-frame update over [`FogParameters`] and [`MenuCursor`]
//! - [`InputManager`] - Polls keyboard, mouse and gamepad into an [`InputSnapshot`]
//! - [`BasicEffect`] / [`EffectHost`] - Seam between the controller and the renderer
//! - [`Overlay`] - Text draw list for the menu overlay
//! - [`app::run`] - Generic winit event loop driving a [`app::DemoApp`]

pub mod app;
pub mod config;
pub mod controller;
pub mod effect;
pub mod fog;
pub mod input;
pub mod menu;
pub mod overlay;

pub use config::Config;
pub use controller::{DemoController, UpdateOutcome};
pub use effect::{
    BasicEffect, CameraSetup, DirectionalLight, EffectHost, configure_effects, update_aspect,
};
pub use fog::FogParameters;
pub use input::{
    GamePadState, InputFrame, InputManager, InputSnapshot, Key, KeyboardState, MouseState,
};
pub use menu::{MenuCursor, MenuItem};
pub use overlay::{Overlay, TextColor, TextItem};
