//! Basic Fog - wgpu backend and application
//!
//! Renders a model with the basic effect and lets the user edit its linear
//! fog through a small text menu. Window-independent logic lives in
//! `basic-fog-core`; this crate owns the GPU side.

pub mod app;
pub mod graphics;
pub mod model;
pub mod player;
pub mod text;
