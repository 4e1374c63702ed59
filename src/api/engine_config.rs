use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlotMargins, Viewport};
use crate::error::{ChartError, ChartResult};

/// `current_time` value meaning "no cursor time requested".
pub const CURRENT_TIME_UNSET: f64 = 1.0;

/// Full chart view configuration.
///
/// Values are immutable snapshots. Hosts describe changes with a
/// [`ViewConfigPatch`]; every field the patch omits falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Explicit value domain; `(0, 0)` selects the auto domain.
    #[serde(default)]
    pub domain_y: (f64, f64),
    #[serde(default = "default_speed_zoom")]
    pub speed_zoom: f64,
    /// Requested view-range; `(0, 0)` shows the full extent.
    #[serde(default)]
    pub range: (f64, f64),
    #[serde(default = "default_current_time")]
    pub current_time: f64,
    #[serde(default)]
    pub scroll_bar: bool,
    #[serde(default)]
    pub knob_current_time: bool,
    #[serde(default = "default_peak_size")]
    pub peak_size: f64,
    /// Zoom steps producing a window at or below this length are rejected.
    #[serde(default = "default_min_window_length")]
    pub min_window_length: f64,
    #[serde(default)]
    pub margins: PlotMargins,
    /// chrono pattern used for the tooltip timestamp.
    #[serde(default = "default_tooltip_time_format")]
    pub tooltip_time_format: String,
    /// Enumeration bands narrower than this get no label.
    #[serde(default = "default_band_label_min_width")]
    pub band_label_min_width: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            domain_y: (0.0, 0.0),
            speed_zoom: default_speed_zoom(),
            range: (0.0, 0.0),
            current_time: default_current_time(),
            scroll_bar: false,
            knob_current_time: false,
            peak_size: default_peak_size(),
            min_window_length: default_min_window_length(),
            margins: PlotMargins::default(),
            tooltip_time_format: default_tooltip_time_format(),
            band_label_min_width: default_band_label_min_width(),
        }
    }
}

impl ViewConfig {
    /// Defaults overlaid with every field present in `patch`.
    #[must_use]
    pub fn from_patch(patch: &ViewConfigPatch) -> Self {
        Self::default().merged(patch)
    }

    /// `self` overlaid with every field present in `patch`.
    #[must_use]
    pub fn merged(&self, patch: &ViewConfigPatch) -> Self {
        Self {
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
            domain_y: patch.domain_y.unwrap_or(self.domain_y),
            speed_zoom: patch.speed_zoom.unwrap_or(self.speed_zoom),
            range: patch.range.unwrap_or(self.range),
            current_time: patch.current_time.unwrap_or(self.current_time),
            scroll_bar: patch.scroll_bar.unwrap_or(self.scroll_bar),
            knob_current_time: patch.knob_current_time.unwrap_or(self.knob_current_time),
            peak_size: patch.peak_size.unwrap_or(self.peak_size),
            min_window_length: patch.min_window_length.unwrap_or(self.min_window_length),
            margins: patch.margins.unwrap_or(self.margins),
            tooltip_time_format: patch
                .tooltip_time_format
                .clone()
                .unwrap_or_else(|| self.tooltip_time_format.clone()),
            band_label_min_width: patch
                .band_label_min_width
                .unwrap_or(self.band_label_min_width),
        }
    }

    /// Repairs out-of-range tuning values instead of rejecting them.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let speed_zoom = normalize_speed_zoom(self.speed_zoom);
        if speed_zoom != self.speed_zoom {
            debug!(
                requested = self.speed_zoom,
                applied = speed_zoom,
                "normalized speed_zoom"
            );
            self.speed_zoom = speed_zoom;
        }
        if !self.peak_size.is_finite() || self.peak_size < 0.0 {
            self.peak_size = default_peak_size();
        }
        if !self.min_window_length.is_finite() || self.min_window_length < 0.0 {
            self.min_window_length = default_min_window_length();
        }
        if !self.band_label_min_width.is_finite() || self.band_label_min_width < 0.0 {
            self.band_label_min_width = default_band_label_min_width();
        }
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport().is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        for (name, (start, end)) in [("domain_y", self.domain_y), ("range", self.range)] {
            if !start.is_finite() || !end.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` bounds must be finite"
                )));
            }
        }
        if !self.current_time.is_finite() {
            return Err(ChartError::InvalidConfig(
                "`current_time` must be finite".to_owned(),
            ));
        }
        self.margins.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_domain_y(mut self, min: f64, max: f64) -> Self {
        self.domain_y = (min, max);
        self
    }

    #[must_use]
    pub fn with_speed_zoom(mut self, speed_zoom: f64) -> Self {
        self.speed_zoom = speed_zoom;
        self
    }

    #[must_use]
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    #[must_use]
    pub fn with_current_time(mut self, current_time: f64) -> Self {
        self.current_time = current_time;
        self
    }

    #[must_use]
    pub fn with_scroll_bar(mut self, enabled: bool) -> Self {
        self.scroll_bar = enabled;
        self
    }

    #[must_use]
    pub fn with_knob_current_time(mut self, enabled: bool) -> Self {
        self.knob_current_time = enabled;
        self
    }

    #[must_use]
    pub fn with_peak_size(mut self, peak_size: f64) -> Self {
        self.peak_size = peak_size;
        self
    }

    #[must_use]
    pub fn with_min_window_length(mut self, min_window_length: f64) -> Self {
        self.min_window_length = min_window_length;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Partial configuration supplied by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfigPatch {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub domain_y: Option<(f64, f64)>,
    pub speed_zoom: Option<f64>,
    pub range: Option<(f64, f64)>,
    pub current_time: Option<f64>,
    pub scroll_bar: Option<bool>,
    pub knob_current_time: Option<bool>,
    pub peak_size: Option<f64>,
    pub min_window_length: Option<f64>,
    pub margins: Option<PlotMargins>,
    pub tooltip_time_format: Option<String>,
    pub band_label_min_width: Option<f64>,
}

impl ViewConfigPatch {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config patch: {e}")))
    }
}

/// Clamps zoom speed into `(0, 1]`: non-positive becomes `0.1`, above one
/// becomes `1`.
#[must_use]
pub fn normalize_speed_zoom(speed_zoom: f64) -> f64 {
    if speed_zoom.is_nan() || speed_zoom <= 0.0 {
        0.1
    } else if speed_zoom > 1.0 {
        1.0
    } else {
        speed_zoom
    }
}

fn default_width() -> u32 {
    900
}

fn default_height() -> u32 {
    80
}

fn default_speed_zoom() -> f64 {
    0.2
}

fn default_current_time() -> f64 {
    CURRENT_TIME_UNSET
}

fn default_peak_size() -> f64 {
    5.0
}

fn default_min_window_length() -> f64 {
    200.0
}

fn default_tooltip_time_format() -> String {
    "%d %B %Y %H:%M:%S".to_owned()
}

fn default_band_label_min_width() -> f64 {
    40.0
}
