use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    TextPrimitive,
};

/// Scrollbar strip drawn below the chart, in its own strip coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarFrame {
    pub width: f64,
    pub height: f64,
    pub track: RectPrimitive,
    pub thumb: RectPrimitive,
}

impl ScrollbarFrame {
    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "scrollbar strip size must be finite and > 0".to_owned(),
            ));
        }
        self.track.validate()?;
        self.thumb.validate()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are listed in paint order: polygons, polylines, lines, rects,
/// circles, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub polygons: Vec<PolygonPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub scrollbar: Option<ScrollbarFrame>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            polygons: Vec::new(),
            polylines: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            scrollbar: None,
        }
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_scrollbar(mut self, scrollbar: ScrollbarFrame) -> Self {
        self.scrollbar = Some(scrollbar);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(scrollbar) = self.scrollbar {
            scrollbar.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.polylines.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
            && self.scrollbar.is_none()
    }
}
