//! The fog demo application
//!
//! Wires the input manager and [`DemoController`] to the wgpu backend and
//! plugs into the generic event loop through [`DemoApp`].

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use basic_fog_core::app::{DemoApp, FrameClock};
use basic_fog_core::{
    Config, DemoController, InputManager, UpdateOutcome, configure_effects, update_aspect,
};
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Fullscreen, Window, WindowAttributes};

use crate::graphics::{EffectPipeline, Graphics};
use crate::model::Model;
use crate::text::TextRenderer;

/// Everything that needs the window to exist
struct Renderer {
    window: Arc<Window>,
    graphics: Graphics,
    pipeline: EffectPipeline,
    model: Model,
    text: TextRenderer,
}

pub struct FogDemoApp {
    config: Config,
    model_path: Option<PathBuf>,
    input: InputManager,
    controller: DemoController,
    clock: FrameClock,
    renderer: Option<Renderer>,
    should_exit: bool,
}

impl FogDemoApp {
    /// `model_path` of `None` shows the procedural scene.
    pub fn new(config: Config, model_path: Option<PathBuf>) -> Self {
        let input = InputManager::new(config.input.clone());
        Self {
            config,
            model_path,
            input,
            controller: DemoController::new(),
            clock: FrameClock::default(),
            renderer: None,
            should_exit: false,
        }
    }

    fn render(&mut self) -> Result<()> {
        let Some(renderer) = &mut self.renderer else {
            return Ok(());
        };

        let surface_texture = match renderer.graphics.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("Surface lost, reconfiguring");
                renderer.graphics.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface texture timed out, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to acquire surface texture"),
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            renderer
                .graphics
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        renderer.model.prepare(renderer.graphics.queue());

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(
                            renderer.graphics.clear_color(self.config.render.clear_color),
                        ),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: renderer.graphics.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(0),
                        store: wgpu::StoreOp::Store,
                    }),
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            renderer.model.draw(&mut render_pass, &renderer.pipeline);
        }

        let overlay = self.controller.overlay();
        renderer.text.render(
            &renderer.window,
            &renderer.graphics,
            &mut encoder,
            &view,
            overlay.items(),
        );

        renderer
            .graphics
            .queue()
            .submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }
}

impl DemoApp for FogDemoApp {
    fn window_attributes(&self) -> WindowAttributes {
        let window = &self.config.window;
        let mut attributes = Window::default_attributes()
            .with_title(window.title.clone())
            .with_inner_size(LogicalSize::new(window.width, window.height));
        if window.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        attributes
    }

    fn on_window_created(
        &mut self,
        window: Arc<Window>,
        _event_loop: &ActiveEventLoop,
    ) -> Result<()> {
        let graphics = Graphics::new(window.clone(), self.config.window.vsync)?;
        let pipeline = EffectPipeline::new(graphics.device(), graphics.surface_format());

        let mut model = match &self.model_path {
            Some(path) => Model::load_gltf(graphics.device(), &pipeline, path)
                .with_context(|| format!("Failed to load model {}", path.display()))?,
            None => Model::demo_scene(graphics.device(), &pipeline)
                .context("Failed to build demo scene")?,
        };
        configure_effects(&mut model, &self.config.camera, graphics.aspect_ratio());

        let text = TextRenderer::new(
            &window,
            &graphics,
            self.config.overlay.font_size,
            self.config.overlay.font_path.as_deref(),
        )?;

        self.renderer = Some(Renderer {
            window,
            graphics,
            pipeline,
            model,
            text,
        });
        Ok(())
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> bool {
        if let Some(renderer) = &mut self.renderer {
            renderer.text.on_window_event(&renderer.window, event);
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.graphics.resize(size.width, size.height);
                    if size.width > 0 && size.height > 0 {
                        update_aspect(
                            &mut renderer.model,
                            &self.config.camera,
                            renderer.graphics.aspect_ratio(),
                        );
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.update_keyboard(code, event.state.is_pressed());
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input
                    .update_cursor(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.update_mouse_button(*button, state.is_pressed());
            }
            WindowEvent::Focused(false) => {
                self.input.release_all();
                self.controller.release_held_input();
            }
            _ => {}
        }
        false
    }

    fn update_and_render(&mut self) -> Result<()> {
        let Some(renderer) = &mut self.renderer else {
            return Ok(());
        };

        let elapsed = self.clock.tick();
        self.input.update();
        let snapshot = self.input.snapshot();

        if self.controller.update(snapshot, elapsed, &mut renderer.model) == UpdateOutcome::Exit {
            self.should_exit = true;
            return Ok(());
        }

        self.render()
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn request_redraw(&self) {
        if let Some(renderer) = &self.renderer {
            renderer.window.request_redraw();
        }
    }

    fn next_frame_time(&self) -> Option<Instant> {
        Some(self.clock.next_frame_time())
    }
}
