use crate::controllers::viewport::data::frame_data::FrameData;
use crate::controllers::viewport::ports::frame_sink::FrameSink;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::viewport::Viewport;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

/// Values shown in the overlay for the frame currently on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayValues {
    pub zoom_factor: f64,
    pub max_iterations: u32,
}

/// Presents rendered frames through a `pixels` surface, with egui drawn on top.
/// The pixel buffer always has the viewport's size; `pixels` scales it to whatever
/// surface the window ended up with.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    viewport: Viewport,
    surface_width: u32,
    surface_height: u32,
    overlay: Option<OverlayValues>,
    frame_pending: bool,
}

impl FrameSink for PixelsPresenter {
    fn present(&mut self, frame: FrameData) {
        if !copy_frame(self.pixels.frame_mut(), self.viewport, &frame.pixel_buffer) {
            let viewport = frame.pixel_buffer.viewport();
            log::error!(
                "Dropping {}x{} frame for {}x{} buffer",
                viewport.width(),
                viewport.height(),
                self.viewport.width(),
                self.viewport.height()
            );
            return;
        }

        self.overlay = Some(OverlayValues {
            zoom_factor: frame.zoom_factor,
            max_iterations: frame.max_iterations,
        });
        self.frame_pending = true;
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, viewport: Viewport) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        if size.width != viewport.width() || size.height != viewport.height() {
            log::warn!(
                "Window is {}x{} instead of {}x{}; frames will be scaled",
                size.width,
                size.height,
                viewport.width(),
                viewport.height()
            );
        }

        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(viewport.width(), viewport.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            viewport,
            surface_width: size.width,
            surface_height: size.height,
            overlay: None,
            frame_pending: false,
        })
    }

    #[must_use]
    pub fn overlay(&self) -> Option<OverlayValues> {
        self.overlay
    }

    /// True once after each presented frame.
    pub fn take_frame_pending(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("overlay"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

/// Copies a rendered frame into a `pixels` RGBA buffer laid out for `viewport`.
/// Returns false, leaving `dest` untouched, when the frame was rendered for a
/// different viewport.
fn copy_frame(dest: &mut [u8], viewport: Viewport, frame: &PixelBuffer) -> bool {
    let expected_len = viewport.pixel_count() * BYTES_PER_PIXEL;

    if frame.viewport() != viewport || dest.len() != expected_len {
        return false;
    }

    dest.copy_from_slice(frame.buffer());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height).unwrap()
    }

    #[test]
    fn test_copy_frame_fills_buffer_sized_from_viewport() {
        let mut frame = PixelBuffer::new(viewport(3, 2));
        frame.set_pixel(2, 1, Colour::opaque(1, 2, 3)).unwrap();
        let mut dest = vec![0; 3 * 2 * BYTES_PER_PIXEL];

        assert!(copy_frame(&mut dest, viewport(3, 2), &frame));
        assert_eq!(dest, frame.buffer());
    }

    #[test]
    fn test_copy_frame_rejects_other_viewport() {
        let frame = PixelBuffer::new(viewport(4, 2));
        let mut dest = vec![7; 3 * 2 * BYTES_PER_PIXEL];

        assert!(!copy_frame(&mut dest, viewport(3, 2), &frame));
        assert!(dest.iter().all(|&b| b == 7));
    }
}
