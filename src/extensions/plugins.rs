use serde::{Deserialize, Serialize};

use crate::core::{SeriesKind, Viewport};
use crate::interaction::{InteractionMode, TooltipMode};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub kind: SeriesKind,
    pub viewport: Viewport,
    pub full_extent: (f64, f64),
    pub view_range: (f64, f64),
    pub value_domain: (f64, f64),
    pub zoom_level: u32,
    pub current_time: f64,
    pub series_count: usize,
    pub interaction_mode: InteractionMode,
}

/// Events emitted by the engine, both to plugins and to the host outbox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// The view-range moved because of a wheel zoom or a scrollbar drag.
    RangeChanged { start: f64, end: f64 },
    /// The cursor was dragged to a new time.
    CurrentTimeChanged { time: f64 },
    SeriesUpdated { series_count: usize },
    ConfigUpdated,
    TooltipModeChanged { mode: TooltipMode },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating core
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: PluginContext);
}
