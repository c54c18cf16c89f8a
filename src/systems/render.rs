//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Shape batch and pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};
use lifegrid_core::Grid;
use lifegrid_render::{
    context::{ContextError, RenderContext},
    draw_grid,
    pipeline::ShapePipeline,
    GridStyle, ShapeBatch,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost or outdated and must be reconfigured
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(err) => write!(f, "Render setup failed: {}", err),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Build the grid view style from the rendering config
pub fn grid_style(config: &RenderingConfig) -> GridStyle {
    GridStyle {
        alive_color: config.alive_color,
        line_color: config.grid_line_color,
        line_thickness: config.grid_line_thickness,
        show_lines: config.show_grid_lines,
    }
}

/// Convert a config colour to a wgpu clear colour
pub fn clear_color(color: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: color[0] as f64,
        g: color[1] as f64,
        b: color[2] as f64,
        a: color[3] as f64,
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ShapePipeline,
    batch: ShapeBatch,
    style: GridStyle,
    background: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = ShapePipeline::new(&context.device, context.config.format);
        pipeline.update_screen_size(&context.queue, context.size.width, context.size.height);

        Ok(Self {
            context,
            pipeline,
            batch: ShapeBatch::new(),
            style: grid_style(render_config),
            background: clear_color(render_config.background_color),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(PhysicalSize::new(width, height));
        self.pipeline.update_screen_size(
            &self.context.queue,
            self.context.size.width,
            self.context.size.height,
        );
    }

    /// Reconfigure the surface at its current size after a loss
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.resize(size.width, size.height);
    }

    /// Render a single frame of the grid
    pub fn render_frame(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self.batch.clear();
        draw_grid(grid, &mut self.batch, &self.style);
        self.pipeline
            .upload(&self.context.device, &self.context.queue, &self.batch);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
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

        self.pipeline.render(&mut encoder, &view, self.background);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
