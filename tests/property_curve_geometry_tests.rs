use proptest::prelude::*;
use spark_chart::core::{DataPoint, Viewport, build_curve_geometry};

fn series() -> impl Strategy<Value = Vec<DataPoint>> {
    proptest::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64)
        .prop_map(|values| values.into_iter().map(DataPoint::new).collect())
}

proptest! {
    #[test]
    fn geometry_is_deterministic(
        points in series(),
        width in 1.0f64..2_000.0,
        height in 1.0f64..2_000.0,
        padding_fraction in 0.0f64..0.9,
    ) {
        let viewport = Viewport::new(width, height);
        let padding = width * padding_fraction;
        let first = build_curve_geometry(&points, viewport, padding).expect("build");
        let second = build_curve_geometry(&points, viewport, padding).expect("build");
        prop_assert_eq!(&first, &second);

        let first_json = serde_json::to_string(&first).expect("json");
        let second_json = serde_json::to_string(&second).expect("json");
        prop_assert_eq!(first_json, second_json);
    }

    #[test]
    fn one_segment_per_point_with_increasing_x(
        points in series(),
        width in 1.0f64..2_000.0,
        height in 1.0f64..2_000.0,
        padding_fraction in 0.0f64..0.9,
    ) {
        let viewport = Viewport::new(width, height);
        let padding = width * padding_fraction;
        let geometry = build_curve_geometry(&points, viewport, padding)
            .expect("build")
            .expect("non-empty");

        prop_assert_eq!(geometry.stroke_segments.len(), points.len());
        prop_assert_eq!(geometry.point_xs.len(), points.len());
        prop_assert!(geometry.space_per_sample > 0.0);
        for pair in geometry.stroke_segments.windows(2) {
            prop_assert!(pair[1].end.x > pair[0].end.x);
        }
    }

    #[test]
    fn every_y_stays_inside_the_drawing_band(
        points in series(),
        width in 1.0f64..2_000.0,
        height in 1.0f64..2_000.0,
        padding in 0.0f64..50.0,
    ) {
        let viewport = Viewport::new(width, height);
        let geometry = build_curve_geometry(&points, viewport, padding)
            .expect("build")
            .expect("non-empty");

        let bottom = height - padding;
        let top = bottom - height;
        for point in geometry.fill_contour.points() {
            prop_assert!(point.x.is_finite());
            prop_assert!(point.y >= top - 1e-9);
            prop_assert!(point.y <= bottom + 1e-9);
        }
    }

    #[test]
    fn fill_contour_is_always_closed(
        points in series(),
        width in 1.0f64..2_000.0,
        height in 1.0f64..2_000.0,
    ) {
        let geometry = build_curve_geometry(&points, Viewport::new(width, height), 0.0)
            .expect("build")
            .expect("non-empty");
        prop_assert!(geometry.fill_contour.is_closed());
        prop_assert_eq!(
            geometry.fill_contour.first_point(),
            geometry.fill_contour.last_point()
        );
    }

    #[test]
    fn flat_series_maps_to_half_height(
        value in -1_000.0f64..1_000.0,
        count in 1usize..32,
        height in 1.0f64..1_000.0,
    ) {
        let points = vec![DataPoint::new(value); count];
        let geometry = build_curve_geometry(&points, Viewport::new(400.0, height), 0.0)
            .expect("build")
            .expect("non-empty");
        for segment in &geometry.stroke_segments {
            prop_assert!((segment.control.y - height / 2.0).abs() <= 1e-9);
        }
    }
}
