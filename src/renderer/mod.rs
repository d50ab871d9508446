//! wgpu renderer for the game window.
//!
//! All drawing happens in egui; the renderer only owns the GPU surface,
//! uploads egui textures and submits the tessellated paint jobs.

pub mod gallows;
pub mod gpu;

use std::sync::Arc;

use egui_wgpu::ScreenDescriptor;
use winit::window::Window;

use crate::core::error::Result;
use gpu::GpuContext;

/// Main renderer struct.
pub struct Renderer {
    ctx: GpuContext,
    egui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    /// Create a new renderer for the given window.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let ctx = GpuContext::new(window).await?;
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.format(), None, 1);
        Ok(Self { ctx, egui_renderer })
    }

    /// Handle window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    /// Get current surface size.
    pub fn size(&self) -> (u32, u32) {
        self.ctx.size()
    }

    /// Render one finished egui frame onto a white background.
    pub fn render(
        &mut self,
        egui_ctx: &egui::Context,
        output: egui::FullOutput,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let paint_jobs = egui_ctx.tessellate(output.shapes, output.pixels_per_point);
        let (width, height) = self.size();
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: output.pixels_per_point,
        };

        let device = &self.ctx.device;
        let queue = &self.ctx.queue;

        for (id, image_delta) in &output.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let frame = self.ctx.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        let egui_commands = self.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        // Free textures marked for removal
        for id in &output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        queue.submit(
            egui_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        frame.present();

        Ok(())
    }
}

pub use gallows::{GallowsImages, GallowsSource};
