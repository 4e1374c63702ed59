use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::SignalKind;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Color substituted for any style color that fails to parse.
pub const FALLBACK_COLOR: &str = "black";

/// One `(time, value)` observation. `time` is a millisecond timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample<V> {
    pub time: f64,
    pub value: V,
}

impl<V> Sample<V> {
    #[must_use]
    pub fn new(time: f64, value: V) -> Self {
        Self { time, value }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: V) -> Self {
        Self {
            time: time.timestamp_millis() as f64,
            value,
        }
    }
}

/// Ordered samples of one signal plus its per-kind style.
///
/// Samples are ascending by time; equal timestamps are allowed and mark
/// instantaneous transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Series<K: SignalKind> {
    pub label: String,
    pub samples: Vec<Sample<K::Value>>,
    #[serde(default)]
    pub style: K::Style,
}

impl<K: SignalKind> Series<K> {
    /// Builds a validated series.
    ///
    /// Invariants:
    /// - every timestamp is finite
    /// - timestamps never decrease
    /// - values pass the signal kind's own validation
    pub fn new(
        label: impl Into<String>,
        samples: Vec<Sample<K::Value>>,
        style: K::Style,
    ) -> ChartResult<Self> {
        let series = Self {
            label: label.into(),
            samples,
            style,
        };
        series.validate()?;
        Ok(series)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let mut previous = f64::NEG_INFINITY;
        for sample in &self.samples {
            if !sample.time.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` has a non-finite timestamp",
                    self.label
                )));
            }
            if sample.time < previous {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` timestamps must be ascending",
                    self.label
                )));
            }
            K::validate_value(&sample.value)?;
            previous = sample.time;
        }
        Ok(())
    }

    #[must_use]
    pub fn with_style(mut self, style: K::Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn first_time(&self) -> Option<f64> {
        self.samples.first().map(|sample| sample.time)
    }

    #[must_use]
    pub fn last_time(&self) -> Option<f64> {
        self.samples.last().map(|sample| sample.time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    #[default]
    Linear,
    /// Holds each value until the next sample (step-after).
    Step,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default = "default_series_color")]
    pub color: String,
    #[serde(default)]
    pub interpolation: Interpolation,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: default_series_color(),
            interpolation: Interpolation::Linear,
            stroke_width: default_stroke_width(),
        }
    }
}

impl LineStyle {
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseStyle {
    #[serde(default = "default_series_color")]
    pub color: String,
}

impl Default for PulseStyle {
    fn default() -> Self {
        Self {
            color: default_series_color(),
        }
    }
}

impl PulseStyle {
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Band colors and optional label glyphs keyed by enumeration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandStyle {
    #[serde(default)]
    pub colors: IndexMap<String, String>,
    #[serde(default = "default_band_glyphs")]
    pub glyphs: IndexMap<String, String>,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            colors: IndexMap::new(),
            glyphs: default_band_glyphs(),
        }
    }
}

impl BandStyle {
    #[must_use]
    pub fn with_color(mut self, key: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(key.into(), color.into());
        self
    }

    #[must_use]
    pub fn with_glyph(mut self, key: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(key.into(), glyph.into());
        self
    }

    /// Label shown inside a wide enough band: the glyph, or the raw key.
    #[must_use]
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.glyphs.get(key).map_or(key, String::as_str)
    }
}

/// Returns `color` when it parses, otherwise logs and returns [`FALLBACK_COLOR`].
#[must_use]
pub fn sanitize_color(series: &str, color: &str) -> String {
    match Color::from_css(color) {
        Ok(_) => color.to_owned(),
        Err(err) => {
            warn!(series, color, error = %err, "invalid series color, using fallback");
            FALLBACK_COLOR.to_owned()
        }
    }
}

fn default_series_color() -> String {
    "steelblue".to_owned()
}

fn default_stroke_width() -> f64 {
    1.5
}

fn default_band_glyphs() -> IndexMap<String, String> {
    IndexMap::from([
        ("SUNNY".to_owned(), "☀️".to_owned()),
        ("RAINY".to_owned(), "🌧️".to_owned()),
        ("CLOUDY".to_owned(), "☁️".to_owned()),
    ])
}

#[cfg(test)]
mod tests {
    use super::{BandStyle, FALLBACK_COLOR, Sample, Series, sanitize_color};
    use crate::core::{NumberSignal, SignalKind};
    use crate::error::ChartError;
    use chrono::{TimeZone, Utc};

    #[test]
    fn descending_timestamps_are_rejected() {
        let err = Series::<NumberSignal>::new(
            "temp",
            vec![Sample::new(10.0, 1.0), Sample::new(5.0, 2.0)],
            Default::default(),
        )
        .expect_err("descending");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn duplicate_timestamps_are_kept() {
        let series = Series::<NumberSignal>::new(
            "temp",
            vec![Sample::new(10.0, 1.0), Sample::new(10.0, 2.0)],
            Default::default(),
        )
        .expect("duplicates allowed");
        assert_eq!(series.len(), 2);
        assert_eq!(NumberSignal::KIND, crate::core::SeriesKind::Number);
    }

    #[test]
    fn datetime_samples_use_millisecond_timestamps() {
        let time = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 1)
            .single()
            .expect("valid date");
        let sample = Sample::from_datetime(time, true);
        assert_eq!(sample.time, 1_704_067_201_000.0);
    }

    #[test]
    fn invalid_colors_fall_back_to_black() {
        assert_eq!(sanitize_color("s", "#12ab3f"), "#12ab3f");
        assert_eq!(sanitize_color("s", "not-a-color"), FALLBACK_COLOR);
    }

    #[test]
    fn every_css_color_form_is_kept() {
        for color in [
            "darkorange",
            "darkgreen",
            "orangered",
            "rebeccapurple",
            "hsl(120, 50%, 50%)",
            "transparent",
        ] {
            assert_eq!(sanitize_color("s", color), color);
        }
    }

    #[test]
    fn band_labels_prefer_glyphs() {
        let style = BandStyle::default();
        assert_eq!(style.label_for("SUNNY"), "☀️");
        assert_eq!(style.label_for("FOGGY"), "FOGGY");
    }
}
