//! Application framework types and utilities
//!
//! Window-system plumbing that is independent of what the demo draws.

pub mod event_loop;
pub mod frame_clock;

pub use event_loop::{AppEventHandler, DemoApp, run};
pub use frame_clock::{FrameClock, MAX_FRAME_SECONDS, TARGET_FPS};
