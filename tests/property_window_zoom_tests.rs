use linechart_rs::api::{NumberChart, ViewConfig};
use linechart_rs::core::{
    GeometryContext, LineStyle, PlotArea, Sample, Series, TimeScale, ValueScale, control_range,
    project_pulse_polygons, window_samples,
};
use linechart_rs::render::NullRenderer;
use proptest::prelude::*;

fn ascending_times(deltas: &[f64]) -> Vec<f64> {
    deltas
        .iter()
        .scan(0.0, |time, delta| {
            *time += delta;
            Some(*time)
        })
        .collect()
}

proptest! {
    #[test]
    fn control_range_stays_inside_extent(
        min_time in -1_000_000.0f64..1_000_000.0,
        span in 1.0f64..1_000_000.0,
        requested_min in -3_000_000.0f64..3_000_000.0,
        length_factor in 0.0f64..=2.0
    ) {
        let extent = (min_time, min_time + span);
        let (start, end) = control_range(requested_min, span * length_factor, extent);
        prop_assert!(extent.0 <= start);
        prop_assert!(start <= end);
        prop_assert!(end <= extent.1);
        prop_assert!(end - start <= span * length_factor + 1e-6);
    }

    #[test]
    fn windowed_samples_are_ordered_and_edge_pinned(
        deltas in prop::collection::vec(0.0f64..50.0, 1..64),
        window_start in 0.0f64..1_000.0,
        window_span in 0.0f64..1_000.0
    ) {
        let samples: Vec<Sample<u32>> = ascending_times(&deltas)
            .into_iter()
            .zip(0u32..)
            .map(|(time, value)| Sample::new(time, value))
            .collect();
        let (min, max) = (window_start, window_start + window_span);
        let windowed = window_samples(&samples, min, max);

        for pair in windowed.windows(2) {
            prop_assert!(pair[0].time <= pair[1].time);
        }
        prop_assert!(windowed.iter().all(|sample| (min..=max).contains(&sample.time)));

        if let Some(last) = windowed.last() {
            prop_assert_eq!(last.time, max);
        }
        if samples[0].time < min && !windowed.is_empty() {
            prop_assert_eq!(windowed[0].time, min);
        }
        prop_assert_eq!(&window_samples(&samples, min, max), &windowed);
    }

    #[test]
    fn pulse_slants_never_cross(
        deltas in prop::collection::vec(0.0f64..40.0, 2..40),
        peak_size in 0.0f64..20.0
    ) {
        let samples: Vec<Sample<bool>> = ascending_times(&deltas)
            .into_iter()
            .enumerate()
            .map(|(index, time)| Sample::new(time, index % 2 == 1))
            .collect();
        let last_time = samples.last().map_or(1.0, |sample| sample.time.max(1.0));
        let context = GeometryContext {
            time_scale: TimeScale::new(0.0, last_time).expect("time scale"),
            value_scale: ValueScale::new(0.0, 1.0).expect("value scale"),
            plot: PlotArea { width: 600.0, height: 40.0 },
            peak_size,
            band_label_min_width: 40.0,
        };

        let polygons = project_pulse_polygons(&samples, "red", &context).expect("pulses");
        for polygon in &polygons {
            let points = &polygon.points;
            prop_assert_eq!(points.len(), 6);
            prop_assert!(points[1].x <= points[2].x + 1e-9);
            prop_assert!(points[5].x <= points[4].x + 1e-9);
            prop_assert!(points[0].x <= points[1].x + 1e-9);
            prop_assert!(points[2].x <= points[3].x + 1e-9);
        }
    }

    #[test]
    fn zoom_level_tracks_full_extent(
        steps in prop::collection::vec(prop_oneof![Just(-1.0f64), Just(1.0f64)], 0..24),
        pointer_x in 30.0f64..880.0
    ) {
        let mut engine = NumberChart::new(NullRenderer::default(), ViewConfig::default())
            .expect("engine init");
        let samples = (0..=100)
            .map(|index| Sample::new(f64::from(index) * 100.0, f64::from(index % 7)))
            .collect();
        engine
            .set_series(vec![Series::new("temp", samples, LineStyle::default()).expect("series")])
            .expect("set series");
        engine.modifier_key_down();

        for delta in steps {
            engine.wheel(delta, pointer_x);
            let (start, end) = engine.view_range();
            let (min_time, max_time) = engine.full_extent();
            prop_assert!(min_time <= start && start <= end && end <= max_time);
            prop_assert_eq!(engine.zoom_level() == 0, (start, end) == (min_time, max_time));
            prop_assert!(end - start > engine.config().min_window_length);
        }
    }
}
