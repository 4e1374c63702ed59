use crate::core::{
    BooleanSignal, EnumSignal, NumberSignal, PlotArea, Series, SignalKind, TimeScale, ValueScale,
    Viewport, WindowedSeries, ZoomState,
};
use crate::error::ChartResult;
use crate::extensions::{ChartEvent, ChartPlugin};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::ViewConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// One engine drives one chart: it owns the series, the zoom and view-range
/// state, the windowed copies and interaction state, and hands a complete
/// `RenderFrame` to the renderer. The signal kind `K` supplies every
/// per-kind behavior.
pub struct ChartEngine<K: SignalKind, R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ViewConfig,
    pub(super) viewport: Viewport,
    pub(super) plot: PlotArea,
    pub(super) series: Vec<Series<K>>,
    pub(super) windowed: Vec<WindowedSeries<K>>,
    pub(super) time_scale: TimeScale,
    pub(super) value_scale: ValueScale,
    pub(super) discrete: bool,
    pub(super) zoom: ZoomState,
    pub(super) current_time: f64,
    pub(super) interaction: InteractionState,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) pending_events: Vec<ChartEvent>,
}

pub type NumberChart<R> = ChartEngine<NumberSignal, R>;
pub type BooleanChart<R> = ChartEngine<BooleanSignal, R>;
pub type EnumChart<R> = ChartEngine<EnumSignal, R>;

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.emit_event(ChartEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_event(ChartEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }
}
