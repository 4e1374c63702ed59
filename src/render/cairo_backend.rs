use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, ScrollbarFrame, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub polylines_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub scrollbar_drawn: bool,
}

/// Renderers that can draw into an external Cairo context, such as a toolkit
/// draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;

    /// Draws only the scrollbar strip; the host places it below the chart.
    fn render_scrollbar_on_cairo_context(
        &mut self,
        context: &Context,
        scrollbar: ScrollbarFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Offscreen rendering paints the chart into `surface` and, when the frame
/// carries one, the scrollbar strip into a separate `scrollbar_surface`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    scrollbar_surface: Option<ImageSurface>,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            scrollbar_surface: None,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn scrollbar_surface(&self) -> Option<&ImageSurface> {
        self.scrollbar_surface.as_ref()
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for polygon in &frame.polygons {
            append_point_path(context, &polygon.points);
            context.close_path();
            apply_color(context, polygon.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            stats.polygons_drawn += 1;
        }

        for polyline in &frame.polylines {
            append_point_path(context, &polyline.points);
            if let Some(fill) = polyline.fill_color {
                apply_color(context, fill);
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill polyline", err))?;
            }
            apply_color(context, polyline.color);
            context.set_line_width(polyline.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for rect in &frame.rects {
            fill_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
            apply_color(context, circle.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn render_scrollbar_offscreen(&mut self, scrollbar: ScrollbarFrame) -> ChartResult<()> {
        let width = scrollbar.width.ceil() as i32;
        let height = scrollbar.height.ceil().max(1.0) as i32;
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create scrollbar surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        draw_scrollbar(&context, scrollbar)?;
        self.scrollbar_surface = Some(surface);
        self.last_stats.scrollbar_drawn = true;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)?;
        match frame.scrollbar {
            Some(scrollbar) => self.render_scrollbar_offscreen(scrollbar),
            None => {
                self.scrollbar_surface = None;
                Ok(())
            }
        }
    }

    fn surface_size(&self) -> Option<Viewport> {
        let width = u32::try_from(self.surface.width()).ok()?;
        let height = u32::try_from(self.surface.height()).ok()?;
        Some(Viewport::new(width, height))
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }

    fn render_scrollbar_on_cairo_context(
        &mut self,
        context: &Context,
        scrollbar: ScrollbarFrame,
    ) -> ChartResult<()> {
        scrollbar.validate()?;
        draw_scrollbar(context, scrollbar)?;
        self.last_stats.scrollbar_drawn = true;
        Ok(())
    }
}

fn draw_scrollbar(context: &Context, scrollbar: ScrollbarFrame) -> ChartResult<()> {
    fill_rect(context, scrollbar.track)?;
    fill_rect(context, scrollbar.thumb)
}

fn fill_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn append_point_path(context: &Context, points: &[(f64, f64)]) {
    context.new_path();
    let mut iter = points.iter();
    if let Some((x, y)) = iter.next() {
        context.move_to(*x, *y);
    }
    for (x, y) in iter {
        context.line_to(*x, *y);
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
