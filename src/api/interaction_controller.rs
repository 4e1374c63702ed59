use tracing::trace;

use crate::core::SignalKind;
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::ChartEngine;

impl<K: SignalKind, R: Renderer> ChartEngine<K, R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Handles pointer movement in surface coordinates.
    ///
    /// An active drag owns the move; otherwise the tooltip follows the
    /// pointer.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.interaction.on_pointer_move(x, y);
        match self.interaction.mode() {
            InteractionMode::DraggingCursor => self.drag_cursor_to(x),
            InteractionMode::DraggingScrollbar => self.drag_scrollbar_to(x),
            InteractionMode::Idle => self.update_tooltip(x),
        }
    }

    /// Ends whichever drag is active.
    pub fn pointer_up(&mut self) {
        let previous = self.interaction.end_drag();
        if previous != InteractionMode::Idle {
            trace!(mode = ?previous, "drag ended");
        }
    }

    /// Marks the pointer as outside the plot.
    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }
}
