use tracing::warn;

use crate::core::{
    GeometryContext, PixelPoint, SeriesGeometry, SignalKind, project_series_geometry, time_ticks,
    value_ticks,
};
use crate::error::ChartResult;
use crate::interaction::{TooltipContent, TooltipLayout};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer, ScrollbarFrame, TextHAlign, TextPrimitive,
};

use super::ChartEngine;
use super::cursor_controller::CURSOR_KNOB_RADIUS;

const AXIS_COLOR: Color = Color::rgb(0.45, 0.45, 0.45);
const AXIS_LABEL_FONT_PX: f64 = 10.0;
const AXIS_LABEL_GAP_PX: f64 = 4.0;
const BAND_LABEL_FONT_PX: f64 = 11.0;
const CURSOR_STROKE_WIDTH: f64 = 1.5;
const TOOLTIP_FONT_PX: f64 = 11.0;
const TOOLTIP_OUTER_RADIUS: f64 = 10.0;
const TOOLTIP_INNER_RADIUS: f64 = 4.0;
const SCROLLBAR_TRACK_COLOR: Color = Color::rgb(0.92, 0.92, 0.92);
const SCROLLBAR_THUMB_COLOR: Color = Color::rgb(0.62, 0.62, 0.62);

fn tooltip_accent() -> Color {
    Color::rgb8(0x34, 0x98, 0xdb)
}

fn tooltip_halo() -> Color {
    Color::rgb8(0xcc, 0xe5, 0xf6)
}

/// Resolves a sanitized style color; anything unparsable draws black.
fn resolve_color(series: &str, css: &str) -> Color {
    Color::from_css(css).unwrap_or_else(|err| {
        warn!(series, color = css, error = %err, "unparsable color, drawing black");
        Color::BLACK
    })
}

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    /// Geometry of every windowed series in plot-space pixels.
    pub fn series_geometry(&self) -> ChartResult<Vec<SeriesGeometry>> {
        let context = GeometryContext {
            time_scale: self.time_scale,
            value_scale: self.value_scale,
            plot: self.plot,
            peak_size: self.config.peak_size,
            band_label_min_width: self.config.band_label_min_width,
        };
        project_series_geometry(&self.windowed, &context)
    }

    /// Materializes the full scene for the current state.
    ///
    /// Plot geometry is translated by the configured margins; the scrollbar
    /// strip keeps its own coordinates.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        let origin = (self.config.margins.left, self.config.margins.top);

        for geometry in self.series_geometry()? {
            self.push_series_geometry(&mut frame, &geometry, origin);
        }
        self.push_axes(&mut frame, origin)?;
        self.push_cursor(&mut frame, origin)?;
        if let Some(content) = self.interaction.tooltip().content() {
            self.push_tooltip(&mut frame, content, origin);
        }
        if let Some(geometry) = self.scrollbar_geometry() {
            frame = frame.with_scrollbar(ScrollbarFrame {
                width: geometry.track_width,
                height: geometry.track_height,
                track: RectPrimitive::new(
                    0.0,
                    0.0,
                    geometry.track_width,
                    geometry.track_height,
                    SCROLLBAR_TRACK_COLOR,
                ),
                thumb: RectPrimitive::new(
                    geometry.thumb_offset,
                    0.0,
                    geometry.thumb_width.max(0.0),
                    geometry.track_height,
                    SCROLLBAR_THUMB_COLOR,
                ),
            });
        }

        frame.validate()?;
        Ok(frame)
    }

    fn push_series_geometry(
        &self,
        frame: &mut RenderFrame,
        geometry: &SeriesGeometry,
        origin: (f64, f64),
    ) {
        let translate = |point: &PixelPoint| (point.x + origin.0, point.y + origin.1);
        match geometry {
            SeriesGeometry::Line(path) => {
                if path.points.len() < 2 {
                    return;
                }
                frame.polylines.push(PolylinePrimitive::new(
                    path.points.iter().map(translate).collect(),
                    path.stroke_width,
                    resolve_color(&path.series, &path.color),
                ));
            }
            SeriesGeometry::Pulses { series, polygons }
            | SeriesGeometry::Bands {
                series, polygons, ..
            } => {
                for polygon in polygons {
                    frame.polygons.push(PolygonPrimitive::new(
                        polygon.name.clone(),
                        polygon.points.iter().map(translate).collect(),
                        resolve_color(series, &polygon.fill),
                    ));
                }
            }
        }

        for label in geometry.labels() {
            frame.texts.push(TextPrimitive::new(
                label.text.clone(),
                label.x + origin.0,
                label.y + origin.1,
                BAND_LABEL_FONT_PX,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }
    }

    fn push_axes(&self, frame: &mut RenderFrame, origin: (f64, f64)) -> ChartResult<()> {
        let (left, top) = origin;
        let bottom = top + self.plot.height;
        let right = left + self.plot.width;
        frame
            .lines
            .push(LinePrimitive::new(left, bottom, right, bottom, 1.0, AXIS_COLOR));
        frame
            .lines
            .push(LinePrimitive::new(left, top, left, bottom, 1.0, AXIS_COLOR));

        if self.has_data() {
            for tick in time_ticks(self.view_range(), self.plot.width) {
                let x = left + self.time_scale.time_to_pixel(tick.time, self.plot)?;
                frame.texts.push(TextPrimitive::new(
                    tick.label,
                    x,
                    bottom + AXIS_LABEL_GAP_PX,
                    AXIS_LABEL_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
        }

        for value in value_ticks(self.value_domain(), self.discrete) {
            let y = top + self.value_scale.value_to_pixel(value, self.plot)?;
            frame.texts.push(TextPrimitive::new(
                format!("{}", (value * 100.0).round() / 100.0),
                left - AXIS_LABEL_GAP_PX,
                y - AXIS_LABEL_FONT_PX / 2.0,
                AXIS_LABEL_FONT_PX,
                AXIS_COLOR,
                TextHAlign::Right,
            ));
        }
        Ok(())
    }

    fn push_cursor(&self, frame: &mut RenderFrame, origin: (f64, f64)) -> ChartResult<()> {
        if !self.is_cursor_marker_visible() {
            return Ok(());
        }
        let x = origin.0 + self.time_scale.time_to_pixel(self.current_time, self.plot)?;
        frame.lines.push(LinePrimitive::new(
            x,
            origin.1,
            x,
            origin.1 + self.plot.height,
            CURSOR_STROKE_WIDTH,
            Color::RED,
        ));
        if let Some((knob_x, knob_y)) = self.cursor_knob_position() {
            frame.circles.push(CirclePrimitive::new(
                knob_x,
                knob_y,
                CURSOR_KNOB_RADIUS,
                Color::RED,
            ));
        }
        Ok(())
    }

    fn push_tooltip(&self, frame: &mut RenderFrame, content: &TooltipContent, origin: (f64, f64)) {
        let layout = TooltipLayout::for_mode(self.interaction.tooltip_mode());
        let anchor_x = origin.0 + content.x;
        let anchor_y = origin.1 + content.y;

        frame.circles.push(CirclePrimitive::new(
            anchor_x,
            anchor_y,
            TOOLTIP_OUTER_RADIUS,
            tooltip_halo(),
        ));
        frame.circles.push(CirclePrimitive::new(
            anchor_x,
            anchor_y,
            TOOLTIP_INNER_RADIUS,
            tooltip_accent(),
        ));
        frame.polylines.push(
            PolylinePrimitive::new(
                layout
                    .outline
                    .iter()
                    .map(|(x, y)| (anchor_x + x, anchor_y + y))
                    .collect(),
                1.0,
                tooltip_accent(),
            )
            .with_fill(Color::WHITE),
        );
        for (text, row) in [&content.time_text, &content.value_text]
            .into_iter()
            .zip(layout.text_rows)
        {
            if text.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                text.clone(),
                anchor_x + layout.text_x,
                anchor_y + row,
                TOOLTIP_FONT_PX,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }
    }
}
