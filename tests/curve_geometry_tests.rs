use approx::assert_relative_eq;
use spark_chart::ChartError;
use spark_chart::core::{
    CurveGeometryBuilder, CurvePoint, DataPoint, PathCommand, Viewport, build_curve_geometry,
};

fn values(values: &[f64]) -> Vec<DataPoint> {
    values.iter().copied().map(DataPoint::new).collect()
}

fn assert_point(actual: CurvePoint, x: f64, y: f64) {
    assert_relative_eq!(actual.x, x, epsilon = 1e-9);
    assert_relative_eq!(actual.y, y, epsilon = 1e-9);
}

#[test]
fn empty_series_yields_no_geometry() {
    let geometry =
        build_curve_geometry(&[], Viewport::new(100.0, 50.0), 0.0).expect("empty is not an error");
    assert!(geometry.is_none());
}

#[test]
fn four_point_series_maps_extremes_to_bottom_and_top() {
    let points = values(&[4.0, 12.0, 8.0, 16.0]);
    let geometry = build_curve_geometry(&points, Viewport::new(100.0, 50.0), 0.0)
        .expect("build")
        .expect("non-empty series");

    assert_eq!(geometry.range.lower_index, 0);
    assert_eq!(geometry.range.upper_index, 3);
    assert_relative_eq!(geometry.range.lower, 4.0);
    assert_relative_eq!(geometry.range.upper, 16.0);
    assert_relative_eq!(geometry.space_per_sample, 25.0);
    assert_eq!(geometry.point_xs, vec![0.0, 25.0, 50.0, 75.0]);

    let segments = &geometry.stroke_segments;
    assert_eq!(segments.len(), 4);

    assert_point(segments[0].start, 0.0, 50.0);
    assert_point(segments[0].control, 0.0, 50.0);
    assert_point(segments[0].end, 12.5, 100.0 / 3.0);

    assert_point(segments[1].start, 12.5, 100.0 / 3.0);
    assert_point(segments[1].control, 25.0, 50.0 / 3.0);
    assert_point(segments[1].end, 37.5, 25.0);

    assert_point(segments[2].control, 50.0, 100.0 / 3.0);
    assert_point(segments[2].end, 62.5, 50.0 / 3.0);

    // The value-16 sample is the top edge; the tail runs flat past it.
    assert_point(segments[3].start, 62.5, 50.0 / 3.0);
    assert_point(segments[3].control, 75.0, 0.0);
    assert_point(segments[3].end, 87.5, 0.0);

    assert_relative_eq!(geometry.first_point_pixel_y, 50.0);
    assert_relative_eq!(geometry.last_point_pixel_x, 87.5);
    assert_relative_eq!(geometry.baseline_y, 50.0);
}

#[test]
fn segments_chain_from_previous_midpoint() {
    let points = values(&[3.0, 9.0, 1.0, 7.0, 5.0]);
    let geometry = build_curve_geometry(&points, Viewport::new(320.0, 120.0), 4.0)
        .expect("build")
        .expect("geometry");

    for pair in geometry.stroke_segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn single_point_degenerates_to_one_flat_segment() {
    let points = values(&[5.0]);
    let geometry = build_curve_geometry(&points, Viewport::new(10.0, 10.0), 0.0)
        .expect("build")
        .expect("geometry");

    assert_eq!(geometry.segment_count(), 1);
    let segment = geometry.stroke_segments[0];
    assert_eq!(segment.start, segment.control);
    assert_point(segment.start, 0.0, 5.0);
    assert_point(segment.end, 5.0, 5.0);
    assert_relative_eq!(geometry.space_per_sample, 10.0);
    assert_relative_eq!(geometry.last_point_pixel_x, 5.0);
}

#[test]
fn last_segment_ends_half_a_sample_past_the_last_point() {
    let points = values(&[3.0, 9.0, 1.0, 7.0, 5.0]);
    let geometry = build_curve_geometry(&points, Viewport::new(204.0, 80.0), 4.0)
        .expect("build")
        .expect("geometry");

    let last_x = geometry.point_xs[points.len() - 1];
    let last = geometry.stroke_segments[points.len() - 1];
    assert_relative_eq!(last.control.x, last_x);
    assert_relative_eq!(last.end.y, last.control.y);
    assert_relative_eq!(
        geometry.last_point_pixel_x,
        last_x + geometry.space_per_sample / 2.0
    );
    assert!(geometry.last_point_pixel_x <= 204.0);
}

#[test]
fn range_wider_than_f64_max_stays_finite() {
    let points = values(&[-1e308, 1e308]);
    let geometry = build_curve_geometry(&points, Viewport::new(100.0, 50.0), 0.0)
        .expect("build")
        .expect("geometry");

    assert_relative_eq!(geometry.range.ratio(1e308), 1.0);
    assert_relative_eq!(geometry.range.ratio(-1e308), 0.0);
    assert_point(geometry.stroke_segments[0].control, 0.0, 50.0);
    assert_point(geometry.stroke_segments[1].control, 50.0, 0.0);
    assert!(
        geometry
            .fill_contour
            .points()
            .iter()
            .all(|point| point.is_finite())
    );
}

#[test]
fn flat_series_sits_at_half_height() {
    let points = vec![
        DataPoint::with_labels(1.0, "a", "1"),
        DataPoint::with_labels(1.0, "b", "1"),
    ];
    let geometry = build_curve_geometry(&points, Viewport::new(80.0, 40.0), 0.0)
        .expect("build")
        .expect("geometry");

    assert!(geometry.range.is_flat());
    for segment in &geometry.stroke_segments {
        assert_relative_eq!(segment.control.y, 20.0);
        assert_relative_eq!(segment.end.y, 20.0);
    }

    let padded = build_curve_geometry(&points, Viewport::new(80.0, 40.0), 2.0)
        .expect("build")
        .expect("geometry");
    assert_relative_eq!(padded.first_point_pixel_y, 18.0);
}

#[test]
fn padding_offsets_x_and_baseline() {
    let points = values(&[0.0, 10.0]);
    let geometry = build_curve_geometry(&points, Viewport::new(110.0, 60.0), 10.0)
        .expect("build")
        .expect("geometry");

    assert_relative_eq!(geometry.space_per_sample, 50.0);
    assert_eq!(geometry.point_xs, vec![10.0, 60.0]);
    assert_relative_eq!(geometry.baseline_y, 50.0);
    assert_point(geometry.stroke_segments[0].start, 10.0, 50.0);
    assert_point(geometry.stroke_segments[1].end, 85.0, -10.0);
}

#[test]
fn fill_contour_closes_against_baseline() {
    let points = values(&[2.0, 6.0, 4.0]);
    let geometry = build_curve_geometry(&points, Viewport::new(90.0, 30.0), 0.0)
        .expect("build")
        .expect("geometry");

    let commands = geometry.fill_contour.commands();
    // move_to + one quad per point + three closing vertices + close
    assert_eq!(commands.len(), 1 + points.len() + 3 + 1);
    assert!(geometry.fill_contour.is_closed());
    assert_eq!(
        geometry.fill_contour.first_point(),
        geometry.fill_contour.last_point()
    );

    let tail = &commands[commands.len() - 4..];
    assert_eq!(
        tail[0],
        PathCommand::LineTo {
            to: CurvePoint::new(geometry.last_point_pixel_x, 30.0)
        }
    );
    assert_eq!(
        tail[1],
        PathCommand::LineTo {
            to: CurvePoint::new(0.0, 30.0)
        }
    );
    assert_eq!(tail[3], PathCommand::Close);
}

#[test]
fn stroke_path_replays_segments() {
    let points = values(&[1.0, 2.0, 3.0]);
    let geometry = build_curve_geometry(&points, Viewport::new(60.0, 30.0), 0.0)
        .expect("build")
        .expect("geometry");

    let path = geometry.stroke_path();
    assert_eq!(path.commands().len(), points.len() + 1);
    assert_eq!(path.first_point(), Some(geometry.stroke_segments[0].start));
    assert!(!path.is_closed());
}

#[test]
fn invalid_viewport_is_rejected() {
    let points = values(&[1.0, 2.0]);
    for viewport in [
        Viewport::new(0.0, 10.0),
        Viewport::new(10.0, -1.0),
        Viewport::new(f64::NAN, 10.0),
    ] {
        let err = build_curve_geometry(&points, viewport, 0.0).expect_err("invalid viewport");
        assert!(matches!(err, ChartError::InvalidViewport { .. }));
    }
}

#[test]
fn invalid_viewport_is_rejected_even_for_empty_series() {
    let err = build_curve_geometry(&[], Viewport::new(0.0, 0.0), 0.0).expect_err("invalid");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn non_finite_values_and_padding_are_rejected() {
    let viewport = Viewport::new(100.0, 50.0);
    let err = build_curve_geometry(&values(&[1.0, f64::INFINITY]), viewport, 0.0)
        .expect_err("infinite value");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = build_curve_geometry(&values(&[1.0, 2.0]), viewport, -1.0)
        .expect_err("negative padding");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn builder_matches_free_function() {
    let points = values(&[8.0, 3.0, 5.0]);
    let viewport = Viewport::new(200.0, 100.0);
    let from_builder = CurveGeometryBuilder::new()
        .with_padding(6.0)
        .build(&points, viewport)
        .expect("build");
    let from_function = build_curve_geometry(&points, viewport, 6.0).expect("build");
    assert_eq!(from_builder, from_function);
}
