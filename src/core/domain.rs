use ordered_float::OrderedFloat;

use crate::core::{Series, SignalKind};

/// Auto-scale sentinel for the value domain and the view-range.
pub const UNSET_RANGE: (f64, f64) = (0.0, 0.0);

/// First and last timestamp across every series; `(0, 0)` when all are empty.
///
/// Series are assumed ascending, so only their ends are inspected.
#[must_use]
pub fn full_extent<K: SignalKind>(series: &[Series<K>]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for entry in series {
        if let (Some(first), Some(last)) = (entry.first_time(), entry.last_time()) {
            min = min.min(first);
            max = max.max(last);
        }
    }

    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        UNSET_RANGE
    }
}

/// Value domain used by the vertical scale.
///
/// Auto-computed when `explicit` is the `(0, 0)` sentinel or when the data is
/// discrete; `explicit` otherwise.
#[must_use]
pub fn value_domain<K: SignalKind>(series: &[Series<K>], explicit: (f64, f64)) -> (f64, f64) {
    if explicit == UNSET_RANGE || K::is_discrete(series) {
        return K::auto_value_domain(series).unwrap_or(UNSET_RANGE);
    }
    explicit
}

#[must_use]
pub fn all_values_are_integers(values: impl IntoIterator<Item = f64>) -> bool {
    values
        .into_iter()
        .all(|value| value.is_finite() && value.fract() == 0.0)
}

/// Single-pass `[min, max]` scan. `None` for an empty input.
#[must_use]
pub fn value_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
        .map(|(min, max)| (min.into_inner(), max.into_inner()))
}
