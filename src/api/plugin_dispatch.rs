use tracing::trace;

use crate::core::SignalKind;
use crate::extensions::{ChartEvent, PluginContext};
use crate::render::Renderer;

use super::ChartEngine;

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    #[must_use]
    pub fn plugin_context(&self) -> PluginContext {
        PluginContext {
            kind: K::KIND,
            viewport: self.viewport,
            full_extent: self.full_extent(),
            view_range: self.view_range(),
            value_domain: self.value_domain(),
            zoom_level: self.zoom.level,
            current_time: self.current_time,
            series_count: self.series.len(),
            interaction_mode: self.interaction.mode(),
        }
    }

    /// Queues `event` for the host and delivers it to every plugin.
    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        trace!(?event, "chart event");
        self.pending_events.push(event);
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }

    /// Events emitted since the previous drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<ChartEvent> {
        std::mem::take(&mut self.pending_events)
    }

    #[must_use]
    pub fn pending_event_count(&self) -> usize {
        self.pending_events.len()
    }
}
