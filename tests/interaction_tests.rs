use approx::assert_abs_diff_eq;
use linechart_rs::api::{NumberChart, ViewConfig};
use linechart_rs::core::{LineStyle, NumberSignal, Sample, Series};
use linechart_rs::extensions::ChartEvent;
use linechart_rs::interaction::{InteractionMode, TooltipMode, TooltipState};
use linechart_rs::render::{Color, NullRenderer};

fn ramp(label: &str, step: f64, count: usize, slope: f64) -> Series<NumberSignal> {
    let samples = (0..count)
        .map(|index| Sample::new(index as f64 * step, index as f64 * slope))
        .collect();
    Series::new(label, samples, LineStyle::default()).expect("valid series")
}

fn engine_with(config: ViewConfig, series: Vec<Series<NumberSignal>>) -> NumberChart<NullRenderer> {
    let mut engine = NumberChart::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(series).expect("set series");
    engine.drain_events();
    engine
}

#[test]
fn knob_drag_moves_cursor_and_clamps_to_window() {
    let config = ViewConfig::default().with_knob_current_time(true);
    let mut engine = engine_with(config, vec![ramp("temp", 100.0, 11, 1.5)]);
    assert_eq!(engine.current_time(), 0.0);

    let (knob_x, knob_y) = engine.cursor_knob_position().expect("knob shown");
    assert_eq!((knob_x, knob_y), (30.0, 7.0));
    assert!(!engine.cursor_knob_pointer_down(knob_x + 20.0, knob_y));
    assert!(engine.cursor_knob_pointer_down(knob_x + 3.0, knob_y - 3.0));
    assert_eq!(engine.interaction_mode(), InteractionMode::DraggingCursor);

    engine.pointer_move(30.0 + 425.0, 40.0);
    assert_abs_diff_eq!(engine.current_time(), 500.0, epsilon = 1e-9);

    engine.pointer_move(5_000.0, 40.0);
    assert_eq!(engine.current_time(), 1_000.0);
    engine.pointer_move(-5_000.0, 40.0);
    assert_eq!(engine.current_time(), 0.0);

    let events = engine.drain_events();
    assert_eq!(events.len(), 3);
    assert!(matches!(events[2], ChartEvent::CurrentTimeChanged { time } if time == 0.0));

    engine.pointer_up();
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn knob_is_hidden_unless_enabled() {
    let mut engine = engine_with(ViewConfig::default(), vec![ramp("temp", 100.0, 11, 1.5)]);
    assert!(engine.is_cursor_marker_visible());
    assert_eq!(engine.cursor_knob_position(), None);
    assert!(!engine.cursor_knob_pointer_down(30.0, 7.0));
}

#[test]
fn configured_current_time_is_clamped_to_extent() {
    let config = ViewConfig::default().with_current_time(5_000.0);
    let mut engine = engine_with(config, vec![ramp("temp", 100.0, 11, 1.5)]);
    assert_eq!(engine.current_time(), 1_000.0);

    engine.set_current_time(-20.0).expect("finite time");
    assert_eq!(engine.current_time(), 0.0);
    engine.set_current_time(250.0).expect("finite time");
    assert_eq!(engine.current_time(), 250.0);
    assert!(engine.set_current_time(f64::NAN).is_err());
}

#[test]
fn scrollbar_drag_requires_zoom_and_pans_the_window() {
    let config = ViewConfig::default().with_scroll_bar(true);
    let mut engine = engine_with(config, vec![ramp("temp", 100.0, 11, 1.5)]);

    assert!(!engine.scrollbar_pointer_down(130.0));
    let geometry = engine.scrollbar_geometry().expect("scrollbar enabled");
    assert_eq!(geometry.thumb_offset, 0.0);
    assert_eq!(geometry.thumb_width, 850.0);

    engine.modifier_key_down();
    assert!(engine.wheel(-1.0, 30.0));
    let (start, end) = engine.view_range();
    assert_abs_diff_eq!(start, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(end, 1_000.0 / 1.2, epsilon = 1e-9);
    engine.drain_events();

    assert!(engine.scrollbar_pointer_down(130.0));
    engine.pointer_move(215.0, 5.0);
    let (start, end) = engine.view_range();
    assert_abs_diff_eq!(start, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(end, 100.0 + 1_000.0 / 1.2, epsilon = 1e-9);
    let geometry = engine.scrollbar_geometry().expect("scrollbar enabled");
    assert_abs_diff_eq!(geometry.thumb_offset, 85.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.thumb_width, 850.0 / 1.2, epsilon = 1e-9);

    engine.pointer_leave();
    assert_eq!(engine.interaction_mode(), InteractionMode::DraggingScrollbar);
    engine.pointer_move(5_000.0, 5.0);
    let (start, end) = engine.view_range();
    assert_eq!(end, 1_000.0);
    assert_abs_diff_eq!(start, 1_000.0 - 1_000.0 / 1.2, epsilon = 1e-9);
    assert_eq!(engine.zoom_level(), 1);

    let events = engine.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|event| matches!(event, ChartEvent::RangeChanged { .. })));

    engine.pointer_up();
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(engine.interaction().scrollbar_last_pos(), None);
}

#[test]
fn disabled_scrollbar_has_no_geometry() {
    let mut engine = engine_with(ViewConfig::default(), vec![ramp("temp", 100.0, 11, 1.5)]);
    assert_eq!(engine.scrollbar_geometry(), None);
    engine.modifier_key_down();
    assert!(engine.wheel(-1.0, 400.0));
    assert!(!engine.scrollbar_pointer_down(130.0));
}

#[test]
fn wheel_needs_modifier_and_never_drops_below_level_zero() {
    let mut engine = engine_with(ViewConfig::default(), vec![ramp("temp", 100.0, 11, 1.5)]);
    assert!(!engine.wheel(-1.0, 400.0));
    assert_eq!(engine.zoom_level(), 0);

    engine.modifier_key_down();
    assert!(!engine.wheel(1.0, 400.0));
    assert!(!engine.wheel(0.0, 400.0));
    assert!(engine.wheel(-1.0, 400.0));
    assert!(engine.wheel(1.0, 400.0));
    assert_eq!(engine.zoom_level(), 0);
    assert_eq!(engine.view_range(), engine.full_extent());

    engine.modifier_key_up();
    assert!(!engine.is_modifier_held());
    assert!(!engine.wheel(-1.0, 400.0));
}

#[test]
fn zoom_keeps_point_under_pointer_fixed() {
    let mut engine = engine_with(ViewConfig::default(), vec![ramp("temp", 100.0, 11, 1.5)]);
    engine.modifier_key_down();
    let pointer_x = 30.0 + 425.0;
    assert!(engine.wheel(-1.0, pointer_x));
    let (start, end) = engine.view_range();
    let anchor_ratio = (500.0 - start) / (end - start);
    assert_abs_diff_eq!(anchor_ratio, 0.5, epsilon = 1e-9);
}

#[test]
fn tooltip_follows_pointer_and_flips_near_top() {
    let config = ViewConfig::default().with_size(900, 300);
    let mut engine = engine_with(config, vec![ramp("temp", 10.0, 11, 1.5)]);

    engine.pointer_move(30.0 + 25.0 * 8.5, 100.0);
    let content = engine.tooltip().content().expect("tooltip visible").clone();
    assert_eq!(content.time, 30.0);
    assert_eq!(content.sample_index, 3);
    assert_eq!(content.value_text, "4.5");
    assert_eq!(content.time_text, "01 January 1970 00:00:00");
    assert_abs_diff_eq!(content.y, 182.0, epsilon = 1e-9);
    assert_eq!(engine.tooltip_mode(), TooltipMode::Normal);
    assert_eq!(engine.tooltip_layout_generation(), 0);

    engine.pointer_move(30.0 + 99.0 * 8.5, 100.0);
    let content = engine.tooltip().content().expect("tooltip visible").clone();
    assert_eq!(content.time, 100.0);
    assert_eq!(content.value_text, "15");
    assert_eq!(engine.tooltip_mode(), TooltipMode::Inverse);
    assert_eq!(engine.tooltip_layout_generation(), 1);
    assert_eq!(engine.tooltip_layout().mode, TooltipMode::Inverse);
    assert!(engine.drain_events().contains(&ChartEvent::TooltipModeChanged {
        mode: TooltipMode::Inverse
    }));

    engine.pointer_move(5_000.0, 100.0);
    let content = engine.tooltip().content().expect("tooltip visible");
    assert_eq!(content.time, 100.0);

    engine.pointer_leave();
    assert_eq!(engine.tooltip(), &TooltipState::Hidden);
}

#[test]
fn tooltip_tracks_the_transform_after_zoom_and_pan() {
    let config = ViewConfig::default().with_size(900, 300);
    let mut engine = engine_with(config, vec![ramp("temp", 100.0, 11, 1.5)]);
    let pointer_x = 30.0 + 25.0 * 8.5;
    engine.pointer_move(pointer_x, 100.0);
    let content = engine.tooltip().content().expect("tooltip visible");
    assert_eq!(content.time, 300.0);
    assert_abs_diff_eq!(content.x, 255.0, epsilon = 1e-9);

    engine.modifier_key_down();
    assert!(engine.wheel(-1.0, pointer_x));
    let (start, end) = engine.view_range();
    let width = engine.plot_area().width;
    let content = engine.tooltip().content().expect("tooltip follows zoom");
    assert_eq!(content.time, 300.0);
    assert_abs_diff_eq!(content.x, (300.0 - start) / (end - start) * width, epsilon = 1e-9);

    engine.set_view_range(400.0, 900.0).expect("host range");
    let content = engine.tooltip().content().expect("tooltip follows host range");
    assert_eq!(content.time, 600.0);
    let (start, end) = engine.view_range();
    assert_abs_diff_eq!(
        content.x,
        (content.time - start) / (end - start) * width,
        epsilon = 1e-9
    );
}

#[test]
fn scrollbar_drag_hides_the_tooltip() {
    let config = ViewConfig::default().with_size(900, 300).with_scroll_bar(true);
    let mut engine = engine_with(config, vec![ramp("temp", 100.0, 11, 1.5)]);
    engine.modifier_key_down();
    assert!(engine.wheel(-1.0, 30.0));
    engine.pointer_move(30.0 + 25.0 * 8.5, 100.0);
    assert!(engine.tooltip().content().is_some());

    assert!(engine.scrollbar_pointer_down(100.0));
    engine.pointer_move(150.0, 5.0);
    assert_eq!(engine.tooltip(), &TooltipState::Hidden);
}

#[test]
fn zoom_from_host_range_keeps_anchor_fixed() {
    let mut engine = engine_with(ViewConfig::default(), vec![ramp("temp", 100.0, 11, 1.5)]);
    engine.set_view_range(200.0, 700.0).expect("host range");
    assert_eq!(engine.zoom_level(), 4);

    engine.modifier_key_down();
    assert!(engine.wheel(-1.0, 30.0 + 425.0));
    let (start, end) = engine.view_range();
    assert_eq!(engine.zoom_level(), 5);
    assert_abs_diff_eq!((450.0 - start) / (end - start), 0.5, epsilon = 1e-9);
}

#[test]
fn tooltip_is_unsupported_with_several_series() {
    let mut engine = engine_with(
        ViewConfig::default(),
        vec![ramp("a", 10.0, 11, 1.5), ramp("b", 10.0, 11, 2.5)],
    );
    engine.pointer_move(200.0, 40.0);
    assert_eq!(
        engine.tooltip(),
        &TooltipState::Unsupported { series_count: 2 }
    );
}

#[test]
fn rendered_frame_carries_tooltip_and_cursor() {
    let config = ViewConfig::default()
        .with_size(900, 300)
        .with_knob_current_time(true);
    let mut engine = engine_with(config, vec![ramp("temp", 10.0, 11, 1.5)]);
    engine.pointer_move(30.0 + 25.0 * 8.5, 100.0);
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.polylines.len(), 2);
    assert_eq!(frame.circles.len(), 3);
    assert!(frame.texts.iter().any(|text| text.text == "4.5"));
    assert!(frame
        .lines
        .iter()
        .any(|line| line.color == Color::RED && line.x1 == 30.0 && line.y2 == 280.0));
    assert!(frame.scrollbar.is_none());
    assert_eq!(engine.drain_events(), vec![ChartEvent::Rendered]);
}
