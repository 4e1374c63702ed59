use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, SeriesGeometry, SeriesKind, Viewport};
use crate::interaction::{InteractionMode, TooltipMode, TooltipState};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub kind: SeriesKind,
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub full_extent: (f64, f64),
    pub view_range: (f64, f64),
    pub value_domain: (f64, f64),
    pub discrete: bool,
    pub zoom_level: u32,
    pub current_time: f64,
    pub interaction_mode: InteractionMode,
    pub tooltip: TooltipState,
    pub tooltip_mode: TooltipMode,
    /// Windowed sample count per series label, in series order.
    pub windowed_counts: IndexMap<String, usize>,
    pub geometry: Vec<SeriesGeometry>,
}
