use tracing::{trace, warn};

use crate::core::SignalKind;
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::{CURRENT_TIME_UNSET, ChartEngine};

/// Knob center above the plot's top edge, in plot pixels.
pub const CURSOR_KNOB_OFFSET_Y: f64 = -13.0;
pub const CURSOR_KNOB_RADIUS: f64 = 7.0;

/// Maps the configured `current_time` to engine state: the unset sentinel
/// becomes `0`.
#[must_use]
pub(super) fn requested_current_time(configured: f64) -> f64 {
    if configured == CURRENT_TIME_UNSET {
        0.0
    } else {
        configured
    }
}

/// `0` snaps to the first timestamp; anything else is clamped to the extent.
#[must_use]
pub(super) fn resolve_current_time(time: f64, extent: (f64, f64), has_data: bool) -> f64 {
    if !has_data {
        return time;
    }
    if time == 0.0 {
        return extent.0;
    }
    time.clamp(extent.0, extent.1)
}

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Moves the cursor from the host side. Clamped to the extent; no event
    /// is emitted.
    pub fn set_current_time(&mut self, time: f64) -> ChartResult<()> {
        if !time.is_finite() {
            return Err(ChartError::InvalidData(
                "current time must be finite".to_owned(),
            ));
        }
        self.current_time = resolve_current_time(time, self.full_extent(), self.has_data());
        Ok(())
    }

    /// The marker is drawn only while the current time is inside the window.
    #[must_use]
    pub fn is_cursor_marker_visible(&self) -> bool {
        self.windowed_extent()
            .is_some_and(|(min, max)| (min..=max).contains(&self.current_time))
    }

    /// Surface position of the cursor knob when it is shown.
    #[must_use]
    pub fn cursor_knob_position(&self) -> Option<(f64, f64)> {
        if !self.config.knob_current_time || !self.is_cursor_marker_visible() {
            return None;
        }
        let x = self
            .time_scale
            .time_to_pixel(self.current_time, self.plot)
            .ok()?;
        Some((
            x + self.config.margins.left,
            self.config.margins.top + CURSOR_KNOB_OFFSET_Y,
        ))
    }

    /// Starts a cursor drag when the press lands on the knob.
    pub fn cursor_knob_pointer_down(&mut self, x: f64, y: f64) -> bool {
        let Some((knob_x, knob_y)) = self.cursor_knob_position() else {
            return false;
        };
        if (x - knob_x).hypot(y - knob_y) > CURSOR_KNOB_RADIUS {
            return false;
        }
        self.interaction.start_cursor_drag();
        trace!(x, y, "cursor drag started");
        true
    }

    /// Moves the cursor under the pointer, clamped to the windowed data.
    pub(super) fn drag_cursor_to(&mut self, pointer_x: f64) {
        let time = match self
            .time_scale
            .pixel_to_time(pointer_x - self.config.margins.left, self.plot)
        {
            Ok(time) => time,
            Err(err) => {
                warn!(error = %err, "cursor position could not be resolved");
                return;
            }
        };
        let (min, max) = self.windowed_extent().unwrap_or_else(|| self.view_range());
        self.current_time = time.clamp(min, max);
        self.emit_event(ChartEvent::CurrentTimeChanged {
            time: self.current_time,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{requested_current_time, resolve_current_time};

    #[test]
    fn unset_sentinel_snaps_to_first_timestamp() {
        let time = requested_current_time(1.0);
        assert_eq!(time, 0.0);
        assert_eq!(resolve_current_time(time, (500.0, 900.0), true), 500.0);
    }

    #[test]
    fn explicit_times_are_clamped_to_extent() {
        assert_eq!(resolve_current_time(1_000.0, (500.0, 900.0), true), 900.0);
        assert_eq!(resolve_current_time(100.0, (500.0, 900.0), true), 500.0);
        assert_eq!(resolve_current_time(700.0, (500.0, 900.0), true), 700.0);
        assert_eq!(resolve_current_time(700.0, (0.0, 0.0), false), 700.0);
    }
}
