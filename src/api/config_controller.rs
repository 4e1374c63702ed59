use tracing::{debug, warn};

use crate::core::{PlotArea, SignalKind, UNSET_RANGE, ValueScale, value_domain};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::cursor_controller::{requested_current_time, resolve_current_time};
use super::{ChartEngine, ViewConfig, ViewConfigPatch};

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    /// Replaces the configuration with `patch` merged over the defaults.
    ///
    /// Fields the patch omits return to their defaults, not to their previous
    /// values. Only the state touched by changed fields is recomputed. On
    /// error the engine keeps its previous configuration.
    pub fn update_config(&mut self, patch: &ViewConfigPatch) -> ChartResult<()> {
        let config = ViewConfig::from_patch(patch).normalized();
        config.validate()?;
        let viewport = self
            .renderer
            .surface_size()
            .unwrap_or_else(|| config.viewport());
        let plot = PlotArea::from_viewport(viewport, config.margins)?;
        let value_scale = if config.domain_y == self.config.domain_y {
            None
        } else {
            let domain = value_domain(&self.series, config.domain_y);
            Some(ValueScale::new(domain.0, domain.1)?)
        };

        let previous = std::mem::replace(&mut self.config, config);
        self.viewport = viewport;
        self.plot = plot;
        if let Some(value_scale) = value_scale {
            self.value_scale = value_scale;
        }

        let speed_changed = previous.speed_zoom != self.config.speed_zoom;
        if previous.range != self.config.range
            || (speed_changed && self.config.range != UNSET_RANGE)
        {
            if let Err(err) = self.apply_external_range(self.config.range) {
                warn!(error = %err, "configured range ignored, showing full extent");
                self.zoom.level = 0;
                self.time_scale.reset_visible_range_to_full();
            }
        } else if speed_changed && self.zoom.level != 0 {
            // Keep the wheel-zoomed window; only its level moves to the new step size.
            let visible = self.view_range();
            if let Err(err) = self.apply_external_range(visible) {
                warn!(error = %err, "zoom level could not be re-derived");
            }
        }
        if previous.current_time != self.config.current_time {
            self.current_time = resolve_current_time(
                requested_current_time(self.config.current_time),
                self.full_extent(),
                self.has_data(),
            );
        }

        let mode = self.interaction.mode();
        if (mode == InteractionMode::DraggingScrollbar && !self.config.scroll_bar)
            || (mode == InteractionMode::DraggingCursor && !self.config.knob_current_time)
        {
            self.interaction.end_drag();
        }
        self.interaction.hide_tooltip();
        self.rewindow();

        debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            "config updated"
        );
        self.emit_event(ChartEvent::ConfigUpdated);
        Ok(())
    }

    /// Re-reads the renderer's surface size. Returns `true` when the plot
    /// area changed.
    pub fn sync_surface_size(&mut self) -> ChartResult<bool> {
        let Some(viewport) = self.renderer.surface_size() else {
            return Ok(false);
        };
        if viewport == self.viewport {
            return Ok(false);
        }
        self.plot = PlotArea::from_viewport(viewport, self.config.margins)?;
        self.viewport = viewport;
        self.interaction.hide_tooltip();
        debug!(
            width = viewport.width,
            height = viewport.height,
            "surface resized"
        );
        Ok(true)
    }
}
