use tracing::{trace, warn};

use crate::core::{SignalKind, ZoomDirection, anchored_min, window_length};
use crate::render::Renderer;

use super::ChartEngine;

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    pub fn modifier_key_down(&mut self) {
        self.zoom.modifier_held = true;
    }

    pub fn modifier_key_up(&mut self) {
        self.zoom.modifier_held = false;
    }

    #[must_use]
    pub fn is_modifier_held(&self) -> bool {
        self.zoom.modifier_held
    }

    /// Handles a wheel step at surface x `pointer_x`.
    ///
    /// Negative `delta_y` zooms in and positive zooms out. The point under
    /// the pointer stays fixed. Steps are ignored unless the modifier key is
    /// held and data is loaded, and a step whose window would not exceed
    /// `min_window_length` is rejected with the level unchanged. Returns
    /// `true` when the view-range changed.
    pub fn wheel(&mut self, delta_y: f64, pointer_x: f64) -> bool {
        if !self.zoom.modifier_held || !self.has_data() || !pointer_x.is_finite() {
            return false;
        }
        let Some(direction) = ZoomDirection::from_wheel(delta_y, self.zoom.level) else {
            return false;
        };

        let length_time = self.time_scale.full_length();
        let speed_zoom = self.config.speed_zoom;
        let old_level = self.zoom.level;
        let new_level = direction.apply(old_level);
        let old_length = self.time_scale.visible_length();
        let new_length = window_length(length_time, speed_zoom, new_level);
        if new_length <= self.config.min_window_length {
            trace!(
                new_level,
                new_length,
                floor = self.config.min_window_length,
                "zoom step rejected"
            );
            return false;
        }

        let anchor = match self
            .time_scale
            .pixel_to_time(pointer_x - self.config.margins.left, self.plot)
        {
            Ok(anchor) => anchor,
            Err(err) => {
                warn!(error = %err, "zoom anchor could not be resolved");
                return false;
            }
        };
        let (old_min, _) = self.view_range();
        let new_min = anchored_min(old_min, anchor, old_length, new_length);

        self.zoom.level = new_level;
        trace!(old_level, new_level, anchor, new_min, new_length, "zoom step");
        self.apply_view_range(new_min, new_length)
    }
}
