use tracing::warn;

use crate::core::{SignalKind, bisect_right, format_time_ms};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::interaction::{InteractionMode, TooltipContent, TooltipLayout, TooltipMode, TooltipState};
use crate::render::Renderer;

use super::ChartEngine;

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn tooltip_mode(&self) -> TooltipMode {
        self.interaction.tooltip_mode()
    }

    #[must_use]
    pub fn tooltip_layout(&self) -> TooltipLayout {
        TooltipLayout::for_mode(self.interaction.tooltip_mode())
    }

    /// Bumped each time a placement change forces a tooltip rebuild.
    #[must_use]
    pub fn tooltip_layout_generation(&self) -> u64 {
        self.interaction.tooltip_generation()
    }

    pub(super) fn update_tooltip(&mut self, pointer_x: f64) {
        let series_count = self.windowed.len();
        if series_count != 1 {
            let state = if series_count == 0 {
                TooltipState::Hidden
            } else {
                TooltipState::Unsupported { series_count }
            };
            let mode = self.interaction.tooltip_mode();
            self.interaction.set_tooltip(state, mode);
            return;
        }

        match self.resolve_tooltip(pointer_x) {
            Ok(Some((content, mode))) => {
                if self
                    .interaction
                    .set_tooltip(TooltipState::Visible(content), mode)
                {
                    self.emit_event(ChartEvent::TooltipModeChanged { mode });
                }
            }
            Ok(None) => self.interaction.hide_tooltip(),
            Err(err) => {
                warn!(error = %err, "tooltip lookup failed");
                self.interaction.hide_tooltip();
            }
        }
    }

    /// Re-resolves a visible tooltip against the current transform. Hidden
    /// when no idle pointer is left to follow.
    pub(super) fn refresh_tooltip(&mut self) {
        if !matches!(self.interaction.tooltip(), TooltipState::Visible(_)) {
            return;
        }
        match self.interaction.pointer() {
            Some((x, _)) if self.interaction.mode() == InteractionMode::Idle => {
                self.update_tooltip(x);
            }
            _ => self.interaction.hide_tooltip(),
        }
    }

    /// Sample following the pointer time (clamped to the last sample) and the
    /// placement that keeps its box on screen.
    fn resolve_tooltip(
        &self,
        pointer_x: f64,
    ) -> ChartResult<Option<(TooltipContent, TooltipMode)>> {
        let Some(series) = self.windowed.first() else {
            return Ok(None);
        };
        if series.samples.is_empty() {
            return Ok(None);
        }

        let time = self
            .time_scale
            .pixel_to_time(pointer_x - self.config.margins.left, self.plot)?;
        let index = bisect_right(&series.samples, time).min(series.samples.len() - 1);
        let sample = &series.samples[index];

        let x = self.time_scale.time_to_pixel(sample.time, self.plot)?;
        let y = self
            .value_scale
            .value_to_pixel(K::axis_value(&sample.value), self.plot)?;
        let mode = TooltipMode::for_point(y, self.windowed.len());

        let content = TooltipContent {
            series: series.label.clone(),
            sample_index: index,
            time: sample.time,
            time_text: format_time_ms(sample.time, &self.config.tooltip_time_format),
            value_text: K::display_value(&sample.value, &series.style),
            x,
            y,
        };
        Ok(Some((content, mode)))
    }
}
