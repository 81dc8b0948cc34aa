use smallvec::SmallVec;

use crate::core::{
    CurveGeometry, DataPoint, Viewport, build_curve_geometry, min_max_labels, reference_line,
};
use crate::error::ChartResult;
use crate::render::{
    FillPrimitive, LinePrimitive, RenderFrame, StrokePrimitive, StrokeStyle, TextHAlign,
    TextPrimitive, VerticalGradient,
};

use super::LineChartOptions;

/// Builds the complete draw list for one chart pass.
///
/// Returns `Ok(None)` for an empty series; the caller skips drawing.
pub fn build_line_chart_frame(
    points: &[DataPoint],
    viewport: Viewport,
    options: &LineChartOptions,
) -> ChartResult<Option<RenderFrame>> {
    options.validate()?;
    let Some(geometry) = build_curve_geometry(points, viewport, options.padding)? else {
        return Ok(None);
    };
    Ok(Some(frame_from_geometry(
        points, viewport, &geometry, options,
    )))
}

/// Converts precomputed geometry into primitives: fill, stroke, reference
/// line, then labels.
#[must_use]
pub fn frame_from_geometry(
    points: &[DataPoint],
    viewport: Viewport,
    geometry: &CurveGeometry,
    options: &LineChartOptions,
) -> RenderFrame {
    let style = options.style;
    let graph_color = style.graph_color;

    let mut frame = RenderFrame::new(viewport)
        .with_fill(FillPrimitive {
            path: geometry.fill_contour.clone(),
            gradient: VerticalGradient {
                top: graph_color.with_alpha(style.fill_alpha),
                bottom: graph_color.transparent(),
                start_y: 0.0,
                end_y: geometry.baseline_y,
            },
        })
        .with_stroke(StrokePrimitive {
            path: geometry.stroke_path(),
            style: StrokeStyle::solid(style.px(style.stroke_width_dp), graph_color),
        });

    if options.show_reference_line {
        let line = reference_line(geometry);
        frame = frame.with_line(LinePrimitive::new(
            line.x_start,
            line.y,
            line.x_end,
            line.y,
            StrokeStyle::dashed(
                style.px(style.reference_line_width_dp),
                graph_color.with_alpha(style.reference_line_alpha),
                style.reference_dash,
            ),
        ));
    }

    if options.show_min_max_labels {
        let labels = min_max_labels(points, geometry, viewport, style.density);
        let texts: SmallVec<[TextPrimitive; 2]> = [labels.max, labels.min]
            .into_iter()
            .map(|anchor| {
                TextPrimitive::new(
                    anchor.text,
                    anchor.x,
                    anchor.baseline_y,
                    style.px(style.label_size_dp),
                    style.label_color.with_alpha(style.label_alpha),
                    TextHAlign::Right,
                )
                .bold()
            })
            .collect();
        for text in texts {
            frame = frame.with_text(text);
        }
    }

    frame
}
