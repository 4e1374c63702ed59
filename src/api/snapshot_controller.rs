use crate::core::SignalKind;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EngineSnapshot};

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    /// Builds a deterministic snapshot useful for regression tests.
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        Ok(EngineSnapshot {
            kind: K::KIND,
            viewport: self.viewport,
            plot: self.plot,
            full_extent: self.full_extent(),
            view_range: self.view_range(),
            value_domain: self.value_domain(),
            discrete: self.discrete,
            zoom_level: self.zoom.level,
            current_time: self.current_time,
            interaction_mode: self.interaction.mode(),
            tooltip: self.interaction.tooltip().clone(),
            tooltip_mode: self.interaction.tooltip_mode(),
            windowed_counts: self
                .windowed
                .iter()
                .map(|series| (series.label.clone(), series.samples.len()))
                .collect(),
            geometry: self.series_geometry()?,
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
