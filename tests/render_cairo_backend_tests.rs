#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use linechart_rs::ChartError;
use linechart_rs::api::{BooleanChart, NumberChart, ViewConfig};
use linechart_rs::core::{LineStyle, PulseStyle, Sample, Series};
use linechart_rs::render::{CairoContextRenderer, CairoRenderer};

fn temperature() -> Series<linechart_rs::core::NumberSignal> {
    Series::new(
        "temp",
        vec![
            Sample::new(0.0, 10.5),
            Sample::new(500.0, 20.25),
            Sample::new(1_000.0, 15.0),
        ],
        LineStyle::default().with_color("#2ecc71"),
    )
    .expect("valid series")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_surface_size_drives_the_viewport() {
    let renderer = CairoRenderer::new(600, 120).expect("renderer");
    let engine = NumberChart::new(renderer, ViewConfig::default()).expect("engine init");
    assert_eq!(engine.viewport().width, 600);
    assert_eq!(engine.plot_area().height, 80.0);
}

#[test]
fn cairo_renderer_draws_line_and_scrollbar() {
    let renderer = CairoRenderer::new(900, 80).expect("renderer");
    let config = ViewConfig::default().with_scroll_bar(true);
    let mut engine = NumberChart::new(renderer, config).expect("engine init");
    engine.set_series(vec![temperature()]).expect("set series");

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();
    assert_eq!(stats.polylines_drawn, 1);
    assert!(stats.lines_drawn >= 2);
    assert!(stats.texts_drawn >= 2);
    assert!(stats.scrollbar_drawn);
    let strip = renderer.scrollbar_surface().expect("scrollbar surface");
    assert_eq!((strip.width(), strip.height()), (850, 15));
}

#[test]
fn cairo_renderer_can_draw_pulses_on_external_context() {
    let renderer = CairoRenderer::new(600, 80).expect("renderer");
    let mut engine = BooleanChart::new(renderer, ViewConfig::default()).expect("engine init");
    let series = Series::new(
        "door",
        vec![
            Sample::new(0.0, false),
            Sample::new(100.0, true),
            Sample::new(200.0, false),
            Sample::new(300.0, true),
        ],
        PulseStyle::default(),
    )
    .expect("valid series");
    engine.set_series(vec![series]).expect("set series");

    let surface = ImageSurface::create(Format::ARgb32, 600, 80).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");
    assert_eq!(engine.renderer().last_stats().polygons_drawn, 2);
}
