use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::domain::{all_values_are_integers, value_extent};
use crate::core::geometry::{
    GeometryContext, LinePath, SeriesGeometry, project_band_polygons, project_line_path,
    project_pulse_polygons,
};
use crate::core::series::{BandStyle, LineStyle, PulseStyle, Series, sanitize_color};
use crate::core::windowing::WindowedSeries;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Number,
    Boolean,
    Enumeration,
}

/// Per-kind capabilities the generic engine relies on.
///
/// Each chart variant is a zero-sized marker implementing this trait; the
/// engine itself never branches on the kind.
pub trait SignalKind:
    Debug + Clone + Copy + PartialEq + Default + Send + Sync + 'static
{
    type Value: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync;
    type Style: Debug + Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync;

    const KIND: SeriesKind;

    /// Position of a value on the value axis domain.
    fn axis_value(value: &Self::Value) -> f64;

    fn validate_value(_value: &Self::Value) -> ChartResult<()> {
        Ok(())
    }

    /// Discrete series always use the auto-computed value domain.
    fn is_discrete(_series: &[Series<Self>]) -> bool {
        true
    }

    fn auto_value_domain(_series: &[Series<Self>]) -> Option<(f64, f64)> {
        Some((0.0, 1.0))
    }

    fn sanitize_style(series: &str, style: Self::Style) -> Self::Style;

    fn build_geometry(
        series: &WindowedSeries<Self>,
        context: &GeometryContext,
    ) -> ChartResult<SeriesGeometry>;

    /// Text shown in the tooltip for one value.
    fn display_value(value: &Self::Value, style: &Self::Style) -> String;
}

/// Continuous numeric signal drawn as a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberSignal;

/// Boolean signal drawn as pulse glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BooleanSignal;

/// Enumeration signal drawn as full-height colored bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnumSignal;

impl SignalKind for NumberSignal {
    type Value = f64;
    type Style = LineStyle;

    const KIND: SeriesKind = SeriesKind::Number;

    fn axis_value(value: &f64) -> f64 {
        *value
    }

    fn validate_value(value: &f64) -> ChartResult<()> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "number sample values must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    fn is_discrete(series: &[Series<Self>]) -> bool {
        all_values_are_integers(series_values(series))
    }

    fn auto_value_domain(series: &[Series<Self>]) -> Option<(f64, f64)> {
        value_extent(series_values(series))
    }

    fn sanitize_style(series: &str, mut style: LineStyle) -> LineStyle {
        style.color = sanitize_color(series, &style.color);
        if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
            style.stroke_width = LineStyle::default().stroke_width;
        }
        style
    }

    fn build_geometry(
        series: &WindowedSeries<Self>,
        context: &GeometryContext,
    ) -> ChartResult<SeriesGeometry> {
        let points = project_line_path(&series.samples, series.style.interpolation, context)?;
        Ok(SeriesGeometry::Line(LinePath {
            series: series.label.clone(),
            points,
            color: series.style.color.clone(),
            stroke_width: series.style.stroke_width,
        }))
    }

    fn display_value(value: &f64, _style: &LineStyle) -> String {
        let rounded = (value * 100.0).round() / 100.0;
        format!("{rounded}")
    }
}

impl SignalKind for BooleanSignal {
    type Value = bool;
    type Style = PulseStyle;

    const KIND: SeriesKind = SeriesKind::Boolean;

    fn axis_value(value: &bool) -> f64 {
        if *value { 1.0 } else { 0.0 }
    }

    fn sanitize_style(series: &str, mut style: PulseStyle) -> PulseStyle {
        style.color = sanitize_color(series, &style.color);
        style
    }

    fn build_geometry(
        series: &WindowedSeries<Self>,
        context: &GeometryContext,
    ) -> ChartResult<SeriesGeometry> {
        let polygons = project_pulse_polygons(&series.samples, &series.style.color, context)?;
        Ok(SeriesGeometry::Pulses {
            series: series.label.clone(),
            polygons,
        })
    }

    fn display_value(value: &bool, _style: &PulseStyle) -> String {
        value.to_string()
    }
}

impl SignalKind for EnumSignal {
    type Value = String;
    type Style = BandStyle;

    const KIND: SeriesKind = SeriesKind::Enumeration;

    /// Bands span the full height; point markers sit at mid-height.
    fn axis_value(_value: &String) -> f64 {
        0.5
    }

    fn sanitize_style(series: &str, mut style: BandStyle) -> BandStyle {
        for color in style.colors.values_mut() {
            *color = sanitize_color(series, color);
        }
        style
    }

    fn build_geometry(
        series: &WindowedSeries<Self>,
        context: &GeometryContext,
    ) -> ChartResult<SeriesGeometry> {
        let (polygons, labels) =
            project_band_polygons(&series.label, &series.samples, &series.style, context)?;
        Ok(SeriesGeometry::Bands {
            series: series.label.clone(),
            polygons,
            labels,
        })
    }

    fn display_value(value: &String, _style: &BandStyle) -> String {
        value.clone()
    }
}

fn series_values(series: &[Series<NumberSignal>]) -> impl Iterator<Item = f64> + '_ {
    series
        .iter()
        .flat_map(|entry| entry.samples.iter().map(|sample| sample.value))
}

#[cfg(test)]
mod tests {
    use super::{BooleanSignal, EnumSignal, NumberSignal, SignalKind};
    use crate::core::series::{BandStyle, LineStyle, PulseStyle, Sample, Series};

    fn numbers(values: &[f64]) -> Vec<Series<NumberSignal>> {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample::new(i as f64, *v))
            .collect();
        vec![Series::new("n", samples, LineStyle::default()).expect("series")]
    }

    #[test]
    fn integer_numbers_are_discrete() {
        assert!(NumberSignal::is_discrete(&numbers(&[1.0, 2.0, 3.0])));
        assert!(!NumberSignal::is_discrete(&numbers(&[1.0, 2.5])));
    }

    #[test]
    fn number_display_rounds_to_two_decimals() {
        let style = LineStyle::default();
        assert_eq!(NumberSignal::display_value(&3.14159, &style), "3.14");
        assert_eq!(NumberSignal::display_value(&2.5, &style), "2.5");
        assert_eq!(NumberSignal::display_value(&3.0, &style), "3");
    }

    #[test]
    fn boolean_and_enum_domains_are_unit() {
        let bools: Vec<Series<BooleanSignal>> = Vec::new();
        assert_eq!(BooleanSignal::auto_value_domain(&bools), Some((0.0, 1.0)));
        assert_eq!(BooleanSignal::axis_value(&true), 1.0);
        assert_eq!(
            BooleanSignal::display_value(&false, &PulseStyle::default()),
            "false"
        );
        assert_eq!(EnumSignal::axis_value(&"SUNNY".to_owned()), 0.5);
        assert_eq!(
            EnumSignal::display_value(&"SUNNY".to_owned(), &BandStyle::default()),
            "SUNNY"
        );
    }

    #[test]
    fn sanitizing_replaces_invalid_band_colors() {
        let style = BandStyle::default()
            .with_color("SUNNY", "gold")
            .with_color("RAINY", "#zzz");
        let sanitized = EnumSignal::sanitize_style("weather", style);
        assert_eq!(sanitized.colors["SUNNY"], "gold");
        assert_eq!(sanitized.colors["RAINY"], "black");
    }
}
