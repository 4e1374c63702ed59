use serde::{Deserialize, Serialize};

/// Which drag, if any, currently owns pointer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    DraggingCursor,
    DraggingScrollbar,
}

/// Tooltip placement relative to the hovered point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TooltipMode {
    /// Box above the point, arrow pointing down.
    #[default]
    Normal,
    /// Box below the point, used when the point is too close to the top edge.
    Inverse,
}

/// Points within this many pixels of the top (per displayed series) flip the
/// tooltip below the point.
pub const TOOLTIP_INVERSE_THRESHOLD_PX: f64 = 40.0;

impl TooltipMode {
    #[must_use]
    pub fn for_point(point_y: f64, series_count: usize) -> Self {
        if point_y <= TOOLTIP_INVERSE_THRESHOLD_PX * series_count as f64 {
            Self::Inverse
        } else {
            Self::Normal
        }
    }
}

const TOOLTIP_OFFSET: (f64, f64) = (-80.0, -50.0);
const TOOLTIP_NORMAL_OUTLINE: [(f64, f64); 8] = [
    (0.0, 0.0),
    (0.0, 40.0),
    (75.0, 40.0),
    (80.0, 45.0),
    (85.0, 40.0),
    (160.0, 40.0),
    (160.0, 0.0),
    (0.0, 0.0),
];
const TOOLTIP_INVERSE_OUTLINE: [(f64, f64); 8] = [
    (0.0, 95.0),
    (0.0, 55.0),
    (75.0, 55.0),
    (80.0, 50.0),
    (85.0, 55.0),
    (160.0, 55.0),
    (160.0, 95.0),
    (0.0, 95.0),
];
const TOOLTIP_TEXT_INSET: (f64, f64) = (8.0, 4.0);
const TOOLTIP_LINE_HEIGHT: f64 = 16.0;

/// Tooltip box outline and text anchors, relative to the hovered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipLayout {
    pub mode: TooltipMode,
    pub outline: [(f64, f64); 8],
    pub text_x: f64,
    pub text_rows: [f64; 2],
}

impl TooltipLayout {
    #[must_use]
    pub fn for_mode(mode: TooltipMode) -> Self {
        let (dx, dy) = TOOLTIP_OFFSET;
        let base = match mode {
            TooltipMode::Normal => TOOLTIP_NORMAL_OUTLINE,
            TooltipMode::Inverse => TOOLTIP_INVERSE_OUTLINE,
        };
        let outline = base.map(|(x, y)| (x + dx, y + dy));
        let box_top = outline
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::INFINITY, f64::min);
        let first_row = box_top + TOOLTIP_TEXT_INSET.1;
        Self {
            mode,
            outline,
            text_x: dx + TOOLTIP_TEXT_INSET.0,
            text_rows: [first_row, first_row + TOOLTIP_LINE_HEIGHT],
        }
    }
}

/// Data shown by a visible tooltip. Coordinates are plot-space pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub series: String,
    pub sample_index: usize,
    pub time: f64,
    pub time_text: String,
    pub value_text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum TooltipState {
    #[default]
    Hidden,
    /// More than one series is displayed; tooltips are not supported then.
    Unsupported { series_count: usize },
    Visible(TooltipContent),
}

impl TooltipState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    #[must_use]
    pub fn content(&self) -> Option<&TooltipContent> {
        match self {
            Self::Visible(content) => Some(content),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    pointer: Option<(f64, f64)>,
    scrollbar_last_pos: Option<f64>,
    tooltip: TooltipState,
    tooltip_mode: TooltipMode,
    tooltip_generation: u64,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    #[must_use]
    pub fn tooltip_mode(&self) -> TooltipMode {
        self.tooltip_mode
    }

    /// Bumped every time the tooltip layout has to be rebuilt.
    #[must_use]
    pub fn tooltip_generation(&self) -> u64 {
        self.tooltip_generation
    }

    #[must_use]
    pub fn scrollbar_last_pos(&self) -> Option<f64> {
        self.scrollbar_last_pos
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn start_cursor_drag(&mut self) {
        self.mode = InteractionMode::DraggingCursor;
        self.scrollbar_last_pos = None;
    }

    pub fn start_scrollbar_drag(&mut self, position: f64) {
        self.mode = InteractionMode::DraggingScrollbar;
        self.scrollbar_last_pos = Some(position);
    }

    pub fn set_scrollbar_last_pos(&mut self, position: f64) {
        if self.mode == InteractionMode::DraggingScrollbar {
            self.scrollbar_last_pos = Some(position);
        }
    }

    /// Ends any drag. Returns the mode that was active.
    pub fn end_drag(&mut self) -> InteractionMode {
        let previous = self.mode;
        self.mode = InteractionMode::Idle;
        self.scrollbar_last_pos = None;
        previous
    }

    /// Leaving the plot hides the tooltip and drops a cursor drag; a scrollbar
    /// drag lives outside the plot and survives.
    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.tooltip = TooltipState::Hidden;
        if self.mode == InteractionMode::DraggingCursor {
            self.mode = InteractionMode::Idle;
        }
    }

    /// Stores new tooltip content. Returns `true` when the placement mode
    /// changed and the layout was rebuilt.
    pub fn set_tooltip(&mut self, tooltip: TooltipState, mode: TooltipMode) -> bool {
        self.tooltip = tooltip;
        if mode == self.tooltip_mode {
            return false;
        }
        self.tooltip_mode = mode;
        self.tooltip_generation += 1;
        true
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip = TooltipState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionMode, InteractionState, TooltipLayout, TooltipMode, TooltipState};

    #[test]
    fn points_near_the_top_flip_the_tooltip() {
        assert_eq!(TooltipMode::for_point(10.0, 1), TooltipMode::Inverse);
        assert_eq!(TooltipMode::for_point(40.0, 1), TooltipMode::Inverse);
        assert_eq!(TooltipMode::for_point(41.0, 1), TooltipMode::Normal);
    }

    #[test]
    fn layouts_place_the_box_on_opposite_sides() {
        let normal = TooltipLayout::for_mode(TooltipMode::Normal);
        assert_eq!(normal.outline[0], (-80.0, -50.0));
        assert_eq!(normal.outline[3], (0.0, -5.0));
        assert!(normal.text_rows.iter().all(|row| *row < 0.0));

        let inverse = TooltipLayout::for_mode(TooltipMode::Inverse);
        assert_eq!(inverse.outline[3], (0.0, 0.0));
        assert!(inverse.text_rows.iter().all(|row| *row > 0.0));
    }

    #[test]
    fn mode_change_bumps_generation_once() {
        let mut state = InteractionState::default();
        assert!(!state.set_tooltip(TooltipState::Hidden, TooltipMode::Normal));
        assert!(state.set_tooltip(TooltipState::Hidden, TooltipMode::Inverse));
        assert!(!state.set_tooltip(TooltipState::Hidden, TooltipMode::Inverse));
        assert_eq!(state.tooltip_generation(), 1);
    }

    #[test]
    fn leaving_ends_cursor_drag_but_not_scrollbar_drag() {
        let mut state = InteractionState::default();
        state.start_cursor_drag();
        state.on_pointer_leave();
        assert_eq!(state.mode(), InteractionMode::Idle);

        state.start_scrollbar_drag(12.0);
        state.on_pointer_leave();
        assert_eq!(state.mode(), InteractionMode::DraggingScrollbar);
        assert_eq!(state.end_drag(), InteractionMode::DraggingScrollbar);
        assert_eq!(state.scrollbar_last_pos(), None);
    }
}
