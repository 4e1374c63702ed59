use serde::{Deserialize, Serialize};

/// Discrete zoom state. Level `0` always means the full extent is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoomState {
    pub level: u32,
    /// Wheel zoom is only honored while the modifier key is held.
    pub modifier_held: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Maps a wheel delta to a direction. Zooming out at level `0` and a zero
    /// delta are no-ops.
    #[must_use]
    pub fn from_wheel(delta_y: f64, level: u32) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 && level > 0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    #[must_use]
    pub fn apply(self, level: u32) -> u32 {
        match self {
            Self::In => level.saturating_add(1),
            Self::Out => level.saturating_sub(1),
        }
    }
}

/// View-range length at `level`: `length_time / (1 + speed_zoom)^level`.
#[must_use]
pub fn window_length(length_time: f64, speed_zoom: f64, level: u32) -> f64 {
    let exponent = i32::try_from(level).unwrap_or(i32::MAX);
    length_time / (1.0 + speed_zoom).powi(exponent)
}

/// Keeps the point under the pointer fixed while the window length changes.
#[must_use]
pub fn anchored_min(old_min: f64, anchor: f64, old_length: f64, new_length: f64) -> f64 {
    if old_length == 0.0 {
        return old_min;
    }
    (old_min - anchor) * (new_length / old_length) + anchor
}

/// Clamps a `(min, min + length)` window into `extent`.
///
/// Guarantees `extent.0 <= min <= max <= extent.1`. When `length` exceeds the
/// extent the whole extent is returned.
#[must_use]
pub fn control_range(min: f64, length: f64, extent: (f64, f64)) -> (f64, f64) {
    let (min_time, max_time) = extent;
    let mut start = min.max(min_time);
    let mut end = start + length;
    if end > max_time {
        end = max_time;
        start = end - length;
    }
    start = start.max(min_time);
    (start, end.max(start))
}

/// Zoom level whose window length best matches `range_length`.
#[must_use]
pub fn level_for_range(length_time: f64, range_length: f64, speed_zoom: f64) -> u32 {
    if length_time <= 0.0 || range_length <= 0.0 || speed_zoom <= 0.0 {
        return 0;
    }
    let level = ((length_time / range_length).ln() / (1.0 + speed_zoom).ln()).round();
    if level.is_finite() && level > 0.0 {
        level.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}
