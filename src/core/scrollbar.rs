use serde::{Deserialize, Serialize};

/// Height of the scrollbar strip below the plot.
pub const SCROLLBAR_TRACK_HEIGHT_PX: f64 = 15.0;

/// Thumb placement inside the scrollbar track, in track pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarGeometry {
    pub track_width: f64,
    pub track_height: f64,
    pub thumb_offset: f64,
    pub thumb_width: f64,
}

/// Thumb geometry for `range` inside `extent`. `None` for an empty extent.
#[must_use]
pub fn thumb_geometry(
    range: (f64, f64),
    extent: (f64, f64),
    track_width: f64,
) -> Option<ScrollbarGeometry> {
    let length_time = extent.1 - extent.0;
    if !(length_time > 0.0) || !(track_width > 0.0) {
        return None;
    }

    Some(ScrollbarGeometry {
        track_width,
        track_height: SCROLLBAR_TRACK_HEIGHT_PX,
        thumb_offset: track_width * (range.0 - extent.0) / length_time,
        thumb_width: track_width * (range.1 - range.0) / length_time,
    })
}

/// Converts a pointer travel along the track into a time delta.
#[must_use]
pub fn drag_delta_time(position: f64, last_position: f64, length_time: f64, track_width: f64) -> f64 {
    if !(track_width > 0.0) {
        return 0.0;
    }
    (position - last_position) * length_time / track_width
}

#[cfg(test)]
mod tests {
    use super::{drag_delta_time, thumb_geometry};

    #[test]
    fn thumb_tracks_view_range_proportionally() {
        let geometry = thumb_geometry((250.0, 500.0), (0.0, 1_000.0), 800.0).expect("thumb");
        assert_eq!(geometry.thumb_offset, 200.0);
        assert_eq!(geometry.thumb_width, 200.0);
        assert_eq!(geometry.track_height, 15.0);
    }

    #[test]
    fn empty_extent_has_no_thumb() {
        assert!(thumb_geometry((0.0, 0.0), (0.0, 0.0), 800.0).is_none());
    }

    #[test]
    fn drag_distance_scales_with_extent() {
        assert_eq!(drag_delta_time(110.0, 100.0, 1_000.0, 500.0), 20.0);
        assert_eq!(drag_delta_time(90.0, 100.0, 1_000.0, 500.0), -20.0);
    }
}
