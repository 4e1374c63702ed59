use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const AXIS_TIME_TARGET_SPACING_PX: f64 = 72.0;
pub const AXIS_TIME_MIN_TICKS: usize = 2;
pub const AXIS_TIME_MAX_TICKS: usize = 12;

const SECOND_MS: f64 = 1_000.0;
const MINUTE_MS: f64 = 60.0 * SECOND_MS;
const HOUR_MS: f64 = 60.0 * MINUTE_MS;
const DAY_MS: f64 = 24.0 * HOUR_MS;

/// Candidate tick steps in milliseconds, ascending.
const TIME_TICK_STEPS_MS: [f64; 26] = [
    1.0,
    2.0,
    5.0,
    10.0,
    20.0,
    50.0,
    100.0,
    200.0,
    500.0,
    SECOND_MS,
    2.0 * SECOND_MS,
    5.0 * SECOND_MS,
    15.0 * SECOND_MS,
    30.0 * SECOND_MS,
    MINUTE_MS,
    5.0 * MINUTE_MS,
    15.0 * MINUTE_MS,
    30.0 * MINUTE_MS,
    HOUR_MS,
    3.0 * HOUR_MS,
    6.0 * HOUR_MS,
    12.0 * HOUR_MS,
    DAY_MS,
    2.0 * DAY_MS,
    7.0 * DAY_MS,
    30.0 * DAY_MS,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTick {
    pub time: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeLabelPattern {
    Second,
    DateMinute,
    Date,
}

impl TimeLabelPattern {
    /// Picks a label precision from the visible span in milliseconds.
    #[must_use]
    pub fn for_span(visible_span_ms: f64) -> Self {
        if visible_span_ms <= 10.0 * MINUTE_MS {
            Self::Second
        } else if visible_span_ms <= 2.0 * DAY_MS {
            Self::DateMinute
        } else {
            Self::Date
        }
    }

    #[must_use]
    pub fn chrono_format(self) -> &'static str {
        match self {
            Self::Second => "%H:%M:%S",
            Self::DateMinute => "%d/%m %H:%M",
            Self::Date => "%d/%m/%Y",
        }
    }
}

#[must_use]
pub fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Formats a millisecond timestamp as UTC with a chrono pattern.
#[must_use]
pub fn format_time_ms(time_ms: f64, pattern: &str) -> String {
    if !time_ms.is_finite() {
        return "nan".to_owned();
    }
    match DateTime::<Utc>::from_timestamp_millis(time_ms.round() as i64) {
        Some(datetime) => datetime.format(pattern).to_string(),
        None => format!("{time_ms}"),
    }
}

/// Ticks at a "nice" step aligned to multiples of that step.
#[must_use]
pub fn time_ticks(visible: (f64, f64), plot_width_px: f64) -> Vec<TimeTick> {
    let (start, end) = visible;
    let span = end - start;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    let target = axis_tick_target_count(
        plot_width_px,
        AXIS_TIME_TARGET_SPACING_PX,
        AXIS_TIME_MIN_TICKS,
        AXIS_TIME_MAX_TICKS,
    );
    let raw_step = span / target as f64;
    let step = TIME_TICK_STEPS_MS
        .iter()
        .copied()
        .find(|step| *step >= raw_step)
        .unwrap_or_else(|| (raw_step / DAY_MS).ceil() * DAY_MS);

    let pattern = TimeLabelPattern::for_span(span).chrono_format();
    let mut ticks = Vec::new();
    let mut time = (start / step).ceil() * step;
    while time <= end && ticks.len() <= AXIS_TIME_MAX_TICKS {
        ticks.push(TimeTick {
            time,
            label: format_time_ms(time, pattern),
        });
        time += step;
    }
    ticks
}

/// Value-axis ticks: both domain ends for continuous data, none for discrete.
#[must_use]
pub fn value_ticks(domain: (f64, f64), discrete: bool) -> Vec<f64> {
    if discrete || !domain.0.is_finite() || !domain.1.is_finite() {
        return Vec::new();
    }
    if domain.0 == domain.1 {
        return vec![domain.0];
    }
    vec![domain.0, domain.1]
}

#[cfg(test)]
mod tests {
    use super::{TimeLabelPattern, format_time_ms, time_ticks, value_ticks};

    #[test]
    fn ticks_fall_on_round_steps_inside_the_range() {
        let ticks = time_ticks((0.0, 60_000.0), 850.0);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 13);
        for pair in ticks.windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
        assert!(ticks.iter().all(|tick| (0.0..=60_000.0).contains(&tick.time)));
        assert_eq!(ticks[0].label, "00:00:00");
    }

    #[test]
    fn label_pattern_widens_with_span() {
        assert_eq!(TimeLabelPattern::for_span(1_000.0), TimeLabelPattern::Second);
        assert_eq!(
            TimeLabelPattern::for_span(3_600_000.0),
            TimeLabelPattern::DateMinute
        );
        assert_eq!(
            TimeLabelPattern::for_span(30.0 * 86_400_000.0),
            TimeLabelPattern::Date
        );
    }

    #[test]
    fn timestamps_format_in_utc() {
        assert_eq!(format_time_ms(86_400_000.0, "%Y-%m-%d"), "1970-01-02");
    }

    #[test]
    fn discrete_values_have_no_ticks() {
        assert_eq!(value_ticks((1.0, 3.0), false), vec![1.0, 3.0]);
        assert!(value_ticks((1.0, 3.0), true).is_empty());
    }
}
