//! Host-facing hooks: event types and the plugin trait.

pub mod plugins;

pub use plugins::{ChartEvent, ChartPlugin, PluginContext};
