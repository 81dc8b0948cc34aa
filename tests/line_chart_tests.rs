use spark_chart::api::{LineChart, LineChartOptions};
use spark_chart::core::{DataPoint, Viewport};
use spark_chart::render::NullRenderer;
use spark_chart::ChartError;

fn chart(options: LineChartOptions) -> LineChart<NullRenderer> {
    LineChart::new(NullRenderer::default(), Viewport::new(300.0, 120.0), options)
        .expect("chart init")
}

#[test]
fn new_rejects_invalid_viewport() {
    let result = LineChart::new(
        NullRenderer::default(),
        Viewport::new(0.0, 120.0),
        LineChartOptions::new(),
    );
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn render_skips_backend_for_empty_series() {
    let mut chart = chart(LineChartOptions::new());
    let drawn = chart.render().expect("render");
    assert!(!drawn);
    assert_eq!(chart.renderer().frames_rendered, 0);
}

#[test]
fn render_draws_all_requested_layers() {
    let mut chart = chart(
        LineChartOptions::new()
            .with_reference_line(true)
            .with_min_max_labels(true),
    );
    chart.set_data(vec![
        DataPoint::with_labels(10.0, "08", "10.0"),
        DataPoint::with_labels(14.0, "09", "14.0"),
        DataPoint::with_labels(9.0, "10", "9.0"),
    ]);

    assert!(chart.render().expect("render"));
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_fill_count, 1);
    assert_eq!(renderer.last_stroke_count, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 2);
}

#[test]
fn resize_recomputes_geometry() {
    let mut chart = chart(LineChartOptions::new());
    chart.set_data(vec![DataPoint::new(1.0), DataPoint::new(2.0)]);

    let before = chart.geometry().expect("geometry").expect("non-empty");
    chart
        .set_viewport(Viewport::new(600.0, 240.0))
        .expect("resize");
    let after = chart.geometry().expect("geometry").expect("non-empty");

    assert_eq!(before.space_per_sample * 2.0, after.space_per_sample);
    assert_eq!(before.baseline_y * 2.0, after.baseline_y);

    chart.render().expect("render");
    let frame = chart
        .renderer()
        .last_frame
        .as_ref()
        .expect("frame recorded");
    assert_eq!(frame.viewport, Viewport::new(600.0, 240.0));
}

#[test]
fn set_viewport_rejects_invalid_size_and_keeps_previous() {
    let mut chart = chart(LineChartOptions::new());
    let err = chart
        .set_viewport(Viewport::new(300.0, 0.0))
        .expect_err("zero height");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert_eq!(chart.viewport(), Viewport::new(300.0, 120.0));
}

#[test]
fn repeated_renders_produce_identical_frames() {
    let mut chart = chart(LineChartOptions::new().with_padding(4.0));
    chart.set_data(vec![
        DataPoint::new(3.0),
        DataPoint::new(1.0),
        DataPoint::new(4.0),
        DataPoint::new(1.0),
    ]);

    chart.render().expect("first render");
    let first = chart.renderer().last_frame.clone();
    chart.render().expect("second render");
    assert_eq!(first, chart.renderer().last_frame);
}

#[test]
fn set_options_validates_before_applying() {
    let mut chart = chart(LineChartOptions::new());
    let err = chart
        .set_options(LineChartOptions::new().with_padding(-3.0))
        .expect_err("negative padding");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(chart.options(), LineChartOptions::new());
}

#[test]
fn render_accepts_extreme_finite_values() {
    let mut chart = chart(LineChartOptions::new().with_reference_line(true));
    chart.set_data(vec![DataPoint::new(-1e308), DataPoint::new(1e308)]);

    assert!(chart.render().expect("render"));
    assert_eq!(chart.renderer().last_stroke_count, 1);
}
