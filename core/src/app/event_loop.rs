//! Generic application event loop
//!
//! This module provides the winit plumbing shared by any demo implementing
//! [`DemoApp`]: window creation, event forwarding and frame scheduling.

use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

/// Trait for demo-specific application behavior.
///
/// The generic event loop calls these methods at the appropriate times.
///
/// # Example
///
/// ```rust,ignore
/// use basic_fog_core::app::event_loop::DemoApp;
///
/// struct MyDemo {
///     graphics: Option<Graphics>,
/// }
///
/// impl DemoApp for MyDemo {
///     fn on_window_created(&mut self, window: Arc<Window>, _: &ActiveEventLoop) -> Result<()> {
///         self.graphics = Some(Graphics::new(window)?);
///         Ok(())
///     }
///
///     fn update_and_render(&mut self) -> Result<()> {
///         // Poll input, update state, draw
///         Ok(())
///     }
///
///     // ... implement other methods
/// }
/// ```
pub trait DemoApp {
    /// Attributes of the window created on startup.
    fn window_attributes(&self) -> WindowAttributes;

    /// Called once when the window has been created.
    ///
    /// Initialize graphics and any window-dependent resources here.
    fn on_window_created(
        &mut self,
        window: Arc<Window>,
        event_loop: &ActiveEventLoop,
    ) -> anyhow::Result<()>;

    /// Handle a window event.
    ///
    /// Return `true` if the event was consumed (prevents default handling).
    fn on_window_event(&mut self, event: &WindowEvent) -> bool;

    /// Poll input, update, and draw one frame.
    fn update_and_render(&mut self) -> anyhow::Result<()>;

    /// Check if application should exit.
    fn should_exit(&self) -> bool;

    /// Request a redraw from the event loop.
    fn request_redraw(&self);

    /// When is the next frame due? `None` waits for events.
    fn next_frame_time(&self) -> Option<Instant>;
}

/// Event loop handler wrapping a [`DemoApp`].
pub struct AppEventHandler<A: DemoApp> {
    app: A,
    window_created: bool,
}

impl<A: DemoApp> AppEventHandler<A> {
    /// Create a new event handler with the given app.
    pub fn new(app: A) -> Self {
        Self {
            app,
            window_created: false,
        }
    }
}

impl<A: DemoApp> ApplicationHandler for AppEventHandler<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_created {
            return;
        }

        match event_loop.create_window(self.app.window_attributes()) {
            Ok(window) => {
                self.window_created = true;
                let window = Arc::new(window);
                if let Err(e) = self.app.on_window_created(window, event_loop) {
                    tracing::error!("Failed to initialize window: {:#}", e);
                    event_loop.exit();
                }
            }
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        // Let app handle the event first
        if self.app.on_window_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.app.update_and_render() {
                    tracing::error!("Frame error: {:#}", e);
                }

                if self.app.should_exit() {
                    tracing::info!("Exit requested");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.app.next_frame_time() {
            Some(next_time) if Instant::now() >= next_time => {
                event_loop.set_control_flow(ControlFlow::Poll);
                self.app.request_redraw();
            }
            Some(next_time) => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(next_time));
            }
            None => {
                event_loop.set_control_flow(ControlFlow::Wait);
            }
        }
    }
}

/// Run the event loop with a demo application.
///
/// Returns once the window is closed or the app asks to exit.
pub fn run<A: DemoApp>(app: A) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;

    let mut handler = AppEventHandler::new(app);
    event_loop.run_app(&mut handler)?;

    Ok(())
}
