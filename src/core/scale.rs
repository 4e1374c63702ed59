use crate::error::{ChartError, ChartResult};

/// Minimum domain span used when a caller hands over a zero-width domain.
pub const DEGENERATE_DOMAIN_SPAN: f64 = 1.0;

/// Linear mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how value
/// axes map larger values to smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) =
            normalize_range(domain.0, domain.1, DEGENERATE_DOMAIN_SPAN)?;
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

/// Orders a range and widens it symmetrically by `min_span` when degenerate.
pub fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, normalize_range};

    #[test]
    fn inverted_range_maps_domain_max_to_top() {
        let scale = LinearScale::new((0.0, 10.0), (40.0, 0.0)).expect("scale");
        assert_eq!(scale.domain_to_pixel(10.0).expect("px"), 0.0);
        assert_eq!(scale.domain_to_pixel(0.0).expect("px"), 40.0);
        assert_eq!(scale.pixel_to_domain(20.0).expect("value"), 5.0);
    }

    #[test]
    fn degenerate_domain_is_widened_around_its_value() {
        assert_eq!(normalize_range(5.0, 5.0, 1.0).expect("range"), (4.5, 5.5));
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0)).expect("scale");
        assert_eq!(scale.domain_to_pixel(5.0).expect("px"), 50.0);
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
        let scale = LinearScale::new((0.0, 1.0), (0.0, 1.0)).expect("scale");
        assert!(scale.domain_to_pixel(f64::INFINITY).is_err());
        assert!(scale.pixel_to_domain(f64::NAN).is_err());
    }
}
