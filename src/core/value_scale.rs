use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Vertical value axis. Maps `[min, max]` onto `[plot.height, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    min: f64,
    max: f64,
}

impl Default for ValueScale {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl ValueScale {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "value domain must be finite".to_owned(),
            ));
        }
        Ok(Self {
            min: min.min(max),
            max: min.max(max),
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn value_to_pixel(self, value: f64, plot: PlotArea) -> ChartResult<f64> {
        self.linear(plot)?.domain_to_pixel(value)
    }

    pub fn pixel_to_value(self, pixel: f64, plot: PlotArea) -> ChartResult<f64> {
        self.linear(plot)?.pixel_to_domain(pixel)
    }

    fn linear(self, plot: PlotArea) -> ChartResult<LinearScale> {
        LinearScale::new((self.min, self.max), (plot.height, 0.0))
    }
}
