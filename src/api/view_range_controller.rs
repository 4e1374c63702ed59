use tracing::{trace, warn};

use crate::core::{
    SignalKind, UNSET_RANGE, WindowedSeries, control_range, level_for_range, window_series,
    windowed_extent,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    #[must_use]
    pub fn view_range(&self) -> (f64, f64) {
        self.time_scale.visible_range()
    }

    #[must_use]
    pub fn zoom_level(&self) -> u32 {
        self.zoom.level
    }

    #[must_use]
    pub fn windowed_series(&self) -> &[WindowedSeries<K>] {
        &self.windowed
    }

    /// Time range covered by the windowed samples.
    #[must_use]
    pub fn windowed_extent(&self) -> Option<(f64, f64)> {
        windowed_extent(&self.windowed)
    }

    /// Applies a view-range requested by the host.
    ///
    /// The zoom level is re-derived from the range length, the range is
    /// clamped into the extent and the series are re-windowed. `(0, 0)`
    /// resets to the full extent. No `RangeChanged` event is emitted since the
    /// host already knows the range it asked for.
    pub fn set_view_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        self.apply_external_range((start, end))?;
        self.rewindow();
        Ok(())
    }

    pub fn reset_view_range(&mut self) {
        self.zoom.level = 0;
        self.time_scale.reset_visible_range_to_full();
        self.rewindow();
    }

    pub(super) fn apply_external_range(&mut self, range: (f64, f64)) -> ChartResult<()> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "view range must be finite".to_owned(),
            ));
        }
        if range == UNSET_RANGE || !self.has_data() {
            self.zoom.level = 0;
            self.time_scale.reset_visible_range_to_full();
            return Ok(());
        }

        let (start, end) = (range.0.min(range.1), range.0.max(range.1));
        let length = end - start;
        if length <= 0.0 {
            return Err(ChartError::InvalidData(
                "view range must have a positive length".to_owned(),
            ));
        }

        let length_time = self.time_scale.full_length();
        let level = level_for_range(length_time, length, self.config.speed_zoom);
        self.zoom.level = level;
        if level == 0 {
            self.time_scale.reset_visible_range_to_full();
        } else {
            let (min, max) = control_range(start, length, self.full_extent());
            self.time_scale.set_visible_range(min, max)?;
        }
        trace!(start, end, level, "applied external view range");
        Ok(())
    }

    /// Clamps `(min, min + length)`, re-windows and emits `RangeChanged`.
    ///
    /// Returns `false` when the range could not be applied.
    pub(super) fn apply_view_range(&mut self, min: f64, length: f64) -> bool {
        if self.zoom.level == 0 {
            self.time_scale.reset_visible_range_to_full();
        } else {
            let (start, end) = control_range(min, length, self.full_extent());
            if let Err(err) = self.time_scale.set_visible_range(start, end) {
                warn!(error = %err, "rejecting non-finite view range");
                return false;
            }
        }

        self.rewindow();
        let (start, end) = self.view_range();
        self.emit_event(ChartEvent::RangeChanged { start, end });
        true
    }

    /// Rebuilds every windowed series from the source series and re-anchors
    /// a visible tooltip to the new transform.
    pub(super) fn rewindow(&mut self) {
        let (min, max) = self.view_range();
        self.windowed = self
            .series
            .iter()
            .map(|entry| window_series(entry, min, max))
            .collect();
        trace!(
            min,
            max,
            windowed_count = self.windowed.len(),
            "rewindowed series"
        );
        self.refresh_tooltip();
    }
}
