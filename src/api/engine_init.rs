use tracing::debug;

use crate::core::{PlotArea, SignalKind, TimeScale, ValueScale, ZoomState};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::cursor_controller::requested_current_time;
use super::{ChartEngine, ViewConfig, ViewConfigPatch};

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    /// Creates an engine with no series loaded.
    ///
    /// The renderer's surface size, when known, takes precedence over the
    /// configured width and height.
    pub fn new(renderer: R, config: ViewConfig) -> ChartResult<Self> {
        let config = config.normalized();
        config.validate()?;
        let viewport = renderer.surface_size().unwrap_or_else(|| config.viewport());
        let plot = PlotArea::from_viewport(viewport, config.margins)?;
        debug!(
            kind = ?K::KIND,
            width = viewport.width,
            height = viewport.height,
            "chart engine created"
        );

        Ok(Self {
            renderer,
            current_time: requested_current_time(config.current_time),
            config,
            viewport,
            plot,
            series: Vec::new(),
            windowed: Vec::new(),
            time_scale: TimeScale::default(),
            value_scale: ValueScale::default(),
            discrete: true,
            zoom: ZoomState::default(),
            interaction: InteractionState::default(),
            plugins: Vec::new(),
            pending_events: Vec::new(),
        })
    }

    /// Creates an engine from a host patch merged over the defaults.
    pub fn with_patch(renderer: R, patch: &ViewConfigPatch) -> ChartResult<Self> {
        Self::new(renderer, ViewConfig::from_patch(patch))
    }
}
