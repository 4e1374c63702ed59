//! Host-facing engine facade.
//!
//! `ChartEngine` is split across controller files, each adding one concern
//! through its own `impl` block.

mod config_controller;
mod cursor_controller;
mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod scrollbar_controller;
mod snapshot_controller;
mod tooltip_controller;
mod view_range_controller;
mod zoom_controller;

pub use cursor_controller::{CURSOR_KNOB_OFFSET_Y, CURSOR_KNOB_RADIUS};
pub use engine::{BooleanChart, ChartEngine, EnumChart, NumberChart};
pub use engine_config::{CURRENT_TIME_UNSET, ViewConfig, ViewConfigPatch, normalize_speed_zoom};
pub use engine_snapshot::EngineSnapshot;
