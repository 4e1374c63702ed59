//! linechart-rs: time-windowed line charts for number, boolean and
//! enumeration signals.
//!
//! The engine owns series, zoom and view-range state, re-windows samples on
//! every pan or zoom and hands a backend-agnostic `RenderFrame` to a
//! `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    BooleanChart, ChartEngine, EngineSnapshot, EnumChart, NumberChart, ViewConfig,
    ViewConfigPatch,
};
pub use error::{ChartError, ChartResult};
