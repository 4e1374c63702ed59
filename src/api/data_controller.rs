use tracing::{debug, warn};

use crate::core::{Series, SignalKind, TimeScale, ValueScale, full_extent, value_domain};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;
use super::cursor_controller::resolve_current_time;

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    /// Replaces every series.
    ///
    /// Styles are sanitized, the extent and value domain are recomputed, the
    /// configured view-range is re-applied and every series is re-windowed.
    /// On error the previous series stay in place.
    pub fn set_series(&mut self, series: Vec<Series<K>>) -> ChartResult<()> {
        for entry in &series {
            entry.validate()?;
        }
        let series: Vec<Series<K>> = series
            .into_iter()
            .map(|mut entry| {
                entry.style = K::sanitize_style(&entry.label, entry.style);
                entry
            })
            .collect();

        let extent = full_extent(&series);
        let time_scale = TimeScale::new(extent.0, extent.1)?;
        let domain = value_domain(&series, self.config.domain_y);
        let value_scale = ValueScale::new(domain.0, domain.1)?;

        debug!(
            series_count = series.len(),
            sample_count = series.iter().map(Series::len).sum::<usize>(),
            extent_start = extent.0,
            extent_end = extent.1,
            "set series"
        );

        self.discrete = K::is_discrete(&series);
        self.series = series;
        self.time_scale = time_scale;
        self.value_scale = value_scale;
        if let Err(err) = self.apply_external_range(self.config.range) {
            warn!(error = %err, "configured range ignored, showing full extent");
            self.reset_view_range();
        }
        self.current_time =
            resolve_current_time(self.current_time, self.full_extent(), self.has_data());
        self.interaction.hide_tooltip();
        self.rewindow();

        self.emit_event(ChartEvent::SeriesUpdated {
            series_count: self.series.len(),
        });
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &[Series<K>] {
        &self.series
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|entry| !entry.is_empty())
    }

    /// `(min_time, max_time)` over all series; `(0, 0)` without data.
    #[must_use]
    pub fn full_extent(&self) -> (f64, f64) {
        self.time_scale.full_range()
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.value_scale.domain()
    }

    /// Whether the value axis is treated as discrete (no value ticks).
    #[must_use]
    pub fn is_discrete(&self) -> bool {
        self.discrete
    }
}
