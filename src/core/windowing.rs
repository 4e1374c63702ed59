use serde::{Deserialize, Serialize};

use crate::core::{Sample, Series, SignalKind};

/// Windowed copy of one series restricted to a view-range.
///
/// Boundary samples are injected at the range edges so lines continue to the
/// plot borders instead of stopping at the first/last sample inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct WindowedSeries<K: SignalKind> {
    pub label: String,
    pub samples: Vec<Sample<K::Value>>,
    pub style: K::Style,
}

impl<K: SignalKind> WindowedSeries<K> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time range covered by the windowed samples.
    #[must_use]
    pub fn extent(&self) -> Option<(f64, f64)> {
        Some((self.samples.first()?.time, self.samples.last()?.time))
    }
}

/// Index of the first sample with `time >= target`.
#[must_use]
pub fn bisect_left<V>(samples: &[Sample<V>], target: f64) -> usize {
    samples.partition_point(|sample| sample.time < target)
}

/// Index of the first sample with `time > target`.
#[must_use]
pub fn bisect_right<V>(samples: &[Sample<V>], target: f64) -> usize {
    samples.partition_point(|sample| sample.time <= target)
}

/// Restricts `samples` to `[min, max]` and injects edge samples.
///
/// 1. keeps samples with `min <= time <= max`;
/// 2. when a sample precedes `min`, prepends `(min, value of that sample)`;
/// 3. appends `(max, last value of the list)`.
///
/// If nothing precedes or falls inside the window the result stays empty.
#[must_use]
pub fn window_samples<V: Clone>(samples: &[Sample<V>], min: f64, max: f64) -> Vec<Sample<V>> {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    let start = bisect_left(samples, min);
    let end = bisect_right(samples, max).max(start);
    let mut out = Vec::with_capacity(end - start + 2);

    if let Some(before) = start.checked_sub(1).and_then(|index| samples.get(index)) {
        out.push(Sample::new(min, before.value.clone()));
    }
    out.extend_from_slice(&samples[start..end]);

    if let Some(last) = out.last() {
        let value = last.value.clone();
        out.push(Sample::new(max, value));
    }
    out
}

#[must_use]
pub fn window_series<K: SignalKind>(series: &Series<K>, min: f64, max: f64) -> WindowedSeries<K> {
    WindowedSeries {
        label: series.label.clone(),
        samples: window_samples(&series.samples, min, max),
        style: series.style.clone(),
    }
}

/// Time range covered by all non-empty windowed series.
#[must_use]
pub fn windowed_extent<K: SignalKind>(windowed: &[WindowedSeries<K>]) -> Option<(f64, f64)> {
    windowed
        .iter()
        .filter_map(WindowedSeries::extent)
        .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
}
