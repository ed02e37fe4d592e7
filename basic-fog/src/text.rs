//! Text overlay rendering through egui
//!
//! egui is used only as a font rasterizer and batcher: each frame the overlay
//! items are painted onto a foreground layer at fixed pixel positions.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use basic_fog_core::TextItem;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::graphics::Graphics;

const OVERLAY_FONT: &str = "overlay";

pub struct TextRenderer {
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    /// Font size in physical pixels
    font_size: f32,
}

impl TextRenderer {
    pub fn new(
        window: &Window,
        graphics: &Graphics,
        font_size: f32,
        font_path: Option<&Path>,
    ) -> Result<Self> {
        let egui_ctx = egui::Context::default();
        if let Some(path) = font_path {
            load_font(&egui_ctx, path)?;
        }

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            graphics.device(),
            graphics.surface_format(),
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            egui_ctx,
            egui_state,
            egui_renderer,
            font_size,
        })
    }

    /// Keep egui's view of the window (size, scale factor) current.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        // The overlay is not interactive, so consumption is ignored
        let _ = self.egui_state.on_window_event(window, event);
    }

    /// Paint `items` over the already rendered frame in `view`.
    pub fn render(
        &mut self,
        window: &Window,
        graphics: &Graphics,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        items: &[TextItem],
    ) {
        let pixels_per_point = window.scale_factor() as f32;
        let font_id = egui::FontId::proportional(self.font_size / pixels_per_point);

        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("text_overlay"),
            ));
            for item in items {
                let [r, g, b, a] = item.color.to_rgba8();
                painter.text(
                    egui::pos2(
                        item.position.x / pixels_per_point,
                        item.position.y / pixels_per_point,
                    ),
                    egui::Align2::LEFT_TOP,
                    &item.text,
                    font_id.clone(),
                    egui::Color32::from_rgba_unmultiplied(r, g, b, a),
                );
            }
        });

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [graphics.width(), graphics.height()],
            pixels_per_point,
        };

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(graphics.device(), graphics.queue(), *id, delta);
        }

        self.egui_renderer.update_buffers(
            graphics.device(),
            graphics.queue(),
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Text Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut render_pass_static = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass_static, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

/// Make the font at `path` the first choice for proportional text.
fn load_font(ctx: &egui::Context, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read overlay font {}", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        OVERLAY_FONT.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, OVERLAY_FONT.to_owned());
    ctx.set_fonts(fonts);

    tracing::info!("Overlay font: {}", path.display());
    Ok(())
}
