use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub surface_size: Option<Viewport>,
    pub render_count: usize,
    pub last_polygon_count: usize,
    pub last_polyline_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    /// Renderer reporting a fixed surface size to the engine.
    #[must_use]
    pub fn with_surface_size(width: u32, height: u32) -> Self {
        Self {
            surface_size: Some(Viewport::new(width, height)),
            ..Self::default()
        }
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_polygon_count = frame.polygons.len();
        self.last_polyline_count = frame.polylines.len();
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn surface_size(&self) -> Option<Viewport> {
        self.surface_size
    }
}
