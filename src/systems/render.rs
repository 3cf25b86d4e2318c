//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Scene and overlay pipelines
//! - Mesh buffers (primitives and the boat)
//! - Frame submission from a [`FramePlan`]

use std::sync::Arc;
use winit::window::Window;
use shipdock_math::TriangleMesh;
use shipdock_render::{
    context::{ContextError, RenderContext},
    overlay::layout_text,
    pipeline::{OverlayPipeline, ScenePipeline},
    FramePlan, GpuMeshes, Viewport,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    scene_pipeline: ScenePipeline,
    overlay_pipeline: OverlayPipeline,
    meshes: GpuMeshes,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
        boat: &TriangleMesh,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut scene_pipeline = ScenePipeline::new(
            &context.device,
            context.config.format,
            render_config.cull_back_faces,
        );
        let (width, height) = context.surface_size();
        scene_pipeline.ensure_depth_texture(&context.device, width, height);

        let overlay_pipeline = OverlayPipeline::new(&context.device, context.config.format);
        let meshes = GpuMeshes::new(&context.device, render_config.cylinder_segments, boat);

        Ok(Self {
            context,
            scene_pipeline,
            overlay_pipeline,
            meshes,
        })
    }

    /// Handle window resize
    ///
    /// A minimized window keeps the previous surface and depth texture, so the
    /// two attachments always match.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self
            .context
            .resize(winit::dpi::PhysicalSize::new(width, height))
        {
            self.sync_depth_texture();
        }
    }

    fn sync_depth_texture(&mut self) {
        let (width, height) = self.context.surface_size();
        self.scene_pipeline
            .ensure_depth_texture(&self.context.device, width, height);
    }

    /// Swap the boat mesh after a model reload
    pub fn replace_boat(&mut self, boat: &TriangleMesh) {
        self.meshes.replace_boat(&self.context.device, boat);
    }

    /// Current surface size as a viewport
    pub fn viewport(&self) -> Viewport {
        let (width, height) = self.context.surface_size();
        Viewport::new(width, height)
    }

    /// Render a single frame
    pub fn render_frame(&mut self, plan: &FramePlan) -> Result<(), RenderError> {
        self.scene_pipeline
            .update_scene(&self.context.queue, &plan.scene_uniforms());
        self.scene_pipeline.update_draws(
            &self.context.device,
            &self.context.queue,
            &plan.draw_uniforms(),
        );

        let overlay_vertices = plan
            .overlay
            .as_ref()
            .map(|overlay| layout_text(overlay, self.viewport()))
            .unwrap_or_default();
        self.overlay_pipeline.upload(
            &self.context.device,
            &self.context.queue,
            &overlay_vertices,
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.sync_depth_texture();
        let bg = plan.clear_color;
        self.scene_pipeline.render(
            &mut encoder,
            &view,
            &self.meshes,
            &plan.draws,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );
        self.overlay_pipeline.render(&mut encoder, &view);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
        self.sync_depth_texture();
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        self.context.surface_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
