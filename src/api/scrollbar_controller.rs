use tracing::trace;

use crate::core::{ScrollbarGeometry, SignalKind, drag_delta_time, thumb_geometry};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::ChartEngine;

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    /// Thumb geometry in strip pixels; `None` when the scrollbar is disabled
    /// or no data is loaded.
    #[must_use]
    pub fn scrollbar_geometry(&self) -> Option<ScrollbarGeometry> {
        if !self.config.scroll_bar || !self.has_data() {
            return None;
        }
        thumb_geometry(self.view_range(), self.full_extent(), self.plot.width)
    }

    /// Starts a scrollbar drag. Only possible while zoomed in.
    pub fn scrollbar_pointer_down(&mut self, pointer_x: f64) -> bool {
        if self.scrollbar_geometry().is_none() || self.zoom.level == 0 || !pointer_x.is_finite() {
            return false;
        }
        let position = pointer_x - self.config.margins.left;
        self.interaction.start_scrollbar_drag(position);
        trace!(position, "scrollbar drag started");
        true
    }

    /// Pans the view-range by the pointer travel since the previous move.
    pub(super) fn drag_scrollbar_to(&mut self, pointer_x: f64) {
        if self.interaction.mode() != InteractionMode::DraggingScrollbar {
            return;
        }
        let Some(last_position) = self.interaction.scrollbar_last_pos() else {
            return;
        };
        let position = pointer_x - self.config.margins.left;
        let delta_time = drag_delta_time(
            position,
            last_position,
            self.time_scale.full_length(),
            self.plot.width,
        );
        let (window_min, _) = self.view_range();
        let window_length = self.time_scale.visible_length();
        self.apply_view_range(window_min + delta_time, window_length);
        self.interaction.set_scrollbar_last_pos(position);
    }
}
