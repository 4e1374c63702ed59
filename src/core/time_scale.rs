use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Time axis model with separate full and visible ranges.
///
/// `full_*` is the extent of the loaded data.
/// `visible_*` is the current view-range produced by zoom and pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    full_start: f64,
    full_end: f64,
    visible_start: f64,
    visible_end: f64,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            full_start: 0.0,
            full_end: 0.0,
            visible_start: 0.0,
            visible_end: 0.0,
        }
    }
}

impl TimeScale {
    /// Creates a scale whose visible range equals the full extent.
    pub fn new(full_start: f64, full_end: f64) -> ChartResult<Self> {
        let (start, end) = ordered_finite(full_start, full_end)?;
        Ok(Self {
            full_start: start,
            full_end: end,
            visible_start: start,
            visible_end: end,
        })
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    /// `length_time`: width of the full extent.
    #[must_use]
    pub fn full_length(self) -> f64 {
        self.full_end - self.full_start
    }

    #[must_use]
    pub fn visible_length(self) -> f64 {
        self.visible_end - self.visible_start
    }

    #[must_use]
    pub fn is_full_range(self) -> bool {
        self.visible_start == self.full_start && self.visible_end == self.full_end
    }

    /// Overrides the visible range without modifying the full extent.
    pub fn set_visible_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        let (start, end) = ordered_finite(start, end)?;
        self.visible_start = start;
        self.visible_end = end;
        Ok(())
    }

    pub fn reset_visible_range_to_full(&mut self) {
        self.visible_start = self.full_start;
        self.visible_end = self.full_end;
    }

    pub fn time_to_pixel(self, time: f64, plot: PlotArea) -> ChartResult<f64> {
        self.visible_linear(plot)?.domain_to_pixel(time)
    }

    pub fn pixel_to_time(self, pixel: f64, plot: PlotArea) -> ChartResult<f64> {
        self.visible_linear(plot)?.pixel_to_domain(pixel)
    }

    pub fn visible_linear(self, plot: PlotArea) -> ChartResult<LinearScale> {
        LinearScale::new((self.visible_start, self.visible_end), (0.0, plot.width))
    }
}

fn ordered_finite(start: f64, end: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "time range must be finite".to_owned(),
        ));
    }
    Ok((start.min(end), start.max(end)))
}

#[cfg(test)]
mod tests {
    use super::TimeScale;
    use crate::core::PlotArea;

    #[test]
    fn visible_range_drives_pixel_mapping() {
        let plot = PlotArea {
            width: 100.0,
            height: 40.0,
        };
        let mut scale = TimeScale::new(0.0, 1_000.0).expect("scale");
        scale.set_visible_range(200.0, 300.0).expect("visible");
        assert_eq!(scale.time_to_pixel(250.0, plot).expect("px"), 50.0);
        assert_eq!(scale.pixel_to_time(100.0, plot).expect("time"), 300.0);
        assert!(!scale.is_full_range());

        scale.reset_visible_range_to_full();
        assert!(scale.is_full_range());
        assert_eq!(scale.full_length(), 1_000.0);
    }

    #[test]
    fn empty_extent_still_maps_without_dividing_by_zero() {
        let plot = PlotArea {
            width: 100.0,
            height: 40.0,
        };
        let scale = TimeScale::default();
        let px = scale.time_to_pixel(0.0, plot).expect("px");
        assert!(px.is_finite());
    }
}
