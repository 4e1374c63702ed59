pub mod axis;
pub mod domain;
pub mod geometry;
pub mod scale;
pub mod scrollbar;
pub mod series;
pub mod signal_kind;
pub mod time_scale;
pub mod types;
pub mod value_scale;
pub mod windowing;
pub mod zoom;

pub use axis::{TimeLabelPattern, TimeTick, format_time_ms, time_ticks, value_ticks};
pub use domain::{UNSET_RANGE, all_values_are_integers, full_extent, value_domain, value_extent};
pub use geometry::{
    BandLabel, GeometryContext, LinePath, Polygon, SeriesGeometry, project_band_polygons,
    project_line_path, project_pulse_polygons, project_series_geometry, pulse_slope,
};
pub use scale::LinearScale;
pub use scrollbar::{ScrollbarGeometry, drag_delta_time, thumb_geometry};
pub use series::{BandStyle, Interpolation, LineStyle, PulseStyle, Sample, Series};
pub use signal_kind::{BooleanSignal, EnumSignal, NumberSignal, SeriesKind, SignalKind};
pub use time_scale::TimeScale;
pub use types::{PixelPoint, PlotArea, PlotMargins, Viewport};
pub use value_scale::ValueScale;
pub use windowing::{
    WindowedSeries, bisect_left, bisect_right, window_samples, window_series, windowed_extent,
};
pub use zoom::{
    ZoomDirection, ZoomState, anchored_min, control_range, level_for_range, window_length,
};
