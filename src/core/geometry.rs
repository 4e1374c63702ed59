use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::warn;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{
    BandStyle, Interpolation, PixelPoint, PlotArea, Sample, SignalKind, TimeScale, ValueScale,
    WindowedSeries,
};
use crate::error::{ChartError, ChartResult};

/// Fill used in release builds for enumeration keys with no mapped color.
pub const UNMAPPED_ENUM_FILL: &str = "#9e9e9e";

/// Horizontal offset of a band label from the band's left edge.
pub const BAND_LABEL_INSET_PX: f64 = 4.0;
/// Vertical offset of a band label below the band's mid-height.
pub const BAND_LABEL_BASELINE_OFFSET_PX: f64 = 10.0;

/// Scales and tuning shared by every series projection of one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryContext {
    pub time_scale: TimeScale,
    pub value_scale: ValueScale,
    pub plot: PlotArea,
    pub peak_size: f64,
    pub band_label_min_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub series: String,
    pub points: Vec<PixelPoint>,
    pub color: String,
    pub stroke_width: f64,
}

/// Closed filled polygon in plot-space pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub name: String,
    pub points: SmallVec<[PixelPoint; 6]>,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Geometry of one windowed series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesGeometry {
    Line(LinePath),
    Pulses {
        series: String,
        polygons: Vec<Polygon>,
    },
    Bands {
        series: String,
        polygons: Vec<Polygon>,
        labels: Vec<BandLabel>,
    },
}

impl SeriesGeometry {
    #[must_use]
    pub fn series(&self) -> &str {
        match self {
            Self::Line(path) => &path.series,
            Self::Pulses { series, .. } | Self::Bands { series, .. } => series,
        }
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Self::Line(_) => &[],
            Self::Pulses { polygons, .. } | Self::Bands { polygons, .. } => polygons,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[BandLabel] {
        match self {
            Self::Bands { labels, .. } => labels,
            _ => &[],
        }
    }
}

/// Projects every windowed series. Order of the output matches the input.
pub fn project_series_geometry<K: SignalKind>(
    windowed: &[WindowedSeries<K>],
    context: &GeometryContext,
) -> ChartResult<Vec<SeriesGeometry>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ChartResult<SeriesGeometry>> = windowed
            .par_iter()
            .map(|series| K::build_geometry(series, context))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        windowed
            .iter()
            .map(|series| K::build_geometry(series, context))
            .collect()
    }
}

/// Maps number samples to a polyline.
///
/// `Step` inserts a horizontal-then-vertical corner before each new value.
pub fn project_line_path(
    samples: &[Sample<f64>],
    interpolation: Interpolation,
    context: &GeometryContext,
) -> ChartResult<Vec<PixelPoint>> {
    let capacity = match interpolation {
        Interpolation::Linear => samples.len(),
        Interpolation::Step => samples.len() * 2,
    };
    let mut points: Vec<PixelPoint> = Vec::with_capacity(capacity);
    for sample in samples {
        let x = context.time_scale.time_to_pixel(sample.time, context.plot)?;
        let y = context
            .value_scale
            .value_to_pixel(sample.value, context.plot)?;
        if interpolation == Interpolation::Step {
            if let Some(previous) = points.last().copied() {
                points.push(PixelPoint::new(x, previous.y));
            }
        }
        points.push(PixelPoint::new(x, y));
    }
    Ok(points)
}

/// Slanted-edge width for a pulse spanning `[x0, x1]`.
///
/// Starts at `peak_size` and shrinks to half the pulse width when the two
/// slants would otherwise cross.
#[must_use]
pub fn pulse_slope(x0: f64, x1: f64, peak_size: f64) -> f64 {
    let overlap = (x1 - peak_size) - (x0 + peak_size);
    if overlap < 0.0 {
        peak_size + overlap / 2.0
    } else {
        peak_size
    }
}

/// Builds one hexagonal pulse for every `false` sample followed by a later
/// sample.
pub fn project_pulse_polygons(
    samples: &[Sample<bool>],
    fill: &str,
    context: &GeometryContext,
) -> ChartResult<Vec<Polygon>> {
    let half_height = context.plot.height / 2.0;
    let mut polygons = Vec::new();
    for pair in samples.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.value || current.time == next.time {
            continue;
        }

        let x0 = context.time_scale.time_to_pixel(current.time, context.plot)?;
        let x1 = context.time_scale.time_to_pixel(next.time, context.plot)?;
        let y = context
            .value_scale
            .value_to_pixel(bool_axis_value(current.value), context.plot)?;
        let slope = pulse_slope(x0, x1, context.peak_size);

        polygons.push(Polygon {
            name: polygon_name(polygons.len()),
            points: smallvec![
                PixelPoint::new(x0, half_height),
                PixelPoint::new(x0 + slope, 0.0),
                PixelPoint::new(x1 - slope, 0.0),
                PixelPoint::new(x1, half_height),
                PixelPoint::new(x1 - slope, y),
                PixelPoint::new(x0 + slope, y),
            ],
            fill: fill.to_owned(),
        });
    }
    Ok(polygons)
}

/// Builds one full-height band per adjacent sample pair, plus labels for the
/// bands wide enough to hold one.
pub fn project_band_polygons(
    series: &str,
    samples: &[Sample<String>],
    style: &BandStyle,
    context: &GeometryContext,
) -> ChartResult<(Vec<Polygon>, Vec<BandLabel>)> {
    let height = context.plot.height;
    let mut polygons = Vec::with_capacity(samples.len().saturating_sub(1));
    let mut labels = Vec::new();
    for pair in samples.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        let x0 = context.time_scale.time_to_pixel(current.time, context.plot)?;
        let x1 = context.time_scale.time_to_pixel(next.time, context.plot)?;
        let fill = band_fill(series, &current.value, style)?;

        polygons.push(Polygon {
            name: polygon_name(polygons.len()),
            points: smallvec![
                PixelPoint::new(x0, 0.0),
                PixelPoint::new(x1, 0.0),
                PixelPoint::new(x1, height),
                PixelPoint::new(x0, height),
            ],
            fill,
        });

        if x1 - x0 >= context.band_label_min_width {
            labels.push(BandLabel {
                text: style.label_for(&current.value).to_owned(),
                x: x0 + BAND_LABEL_INSET_PX,
                y: height / 2.0 + BAND_LABEL_BASELINE_OFFSET_PX,
            });
        }
    }
    Ok((polygons, labels))
}

fn band_fill(series: &str, key: &str, style: &BandStyle) -> ChartResult<String> {
    if let Some(color) = style.colors.get(key) {
        return Ok(color.clone());
    }
    if cfg!(debug_assertions) {
        return Err(ChartError::UnmappedEnumKey {
            series: series.to_owned(),
            key: key.to_owned(),
        });
    }
    warn!(series, key, "enumeration key has no mapped color");
    Ok(UNMAPPED_ENUM_FILL.to_owned())
}

fn bool_axis_value(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

fn polygon_name(index: usize) -> String {
    format!("polygon {index}")
}
