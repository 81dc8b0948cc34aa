use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CurvePath, CurvePoint, DataPoint, PathSink, QuadSegment, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};

/// Deterministic geometry for one smoothed line chart.
///
/// `stroke_segments` holds exactly one quadratic piece per input point.
/// `fill_contour` is the stroke closed against the baseline and explicitly
/// returns to its first vertex before `Close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGeometry {
    pub stroke_segments: Vec<QuadSegment>,
    pub fill_contour: CurvePath,
    pub point_xs: Vec<f64>,
    pub first_point_pixel_y: f64,
    pub last_point_pixel_x: f64,
    pub baseline_y: f64,
    pub space_per_sample: f64,
    pub range: ValueRange,
}

impl CurveGeometry {
    #[must_use]
    pub fn stroke_path(&self) -> CurvePath {
        CurvePath::from_segments(&self.stroke_segments)
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.stroke_segments.len()
    }

    #[must_use]
    pub fn upper_point<'a>(&self, points: &'a [DataPoint]) -> Option<&'a DataPoint> {
        points.get(self.range.upper_index)
    }

    #[must_use]
    pub fn lower_point<'a>(&self, points: &'a [DataPoint]) -> Option<&'a DataPoint> {
        points.get(self.range.lower_index)
    }
}

/// Reusable builder carrying the inset applied to the drawing area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveGeometryBuilder {
    pub padding: f64,
}

impl CurveGeometryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn build(
        self,
        points: &[DataPoint],
        viewport: Viewport,
    ) -> ChartResult<Option<CurveGeometry>> {
        build_curve_geometry(points, viewport, self.padding)
    }
}

/// Projects `points` into a smoothed stroke, its fill contour and layout anchors.
///
/// Each sample becomes the control point of a quadratic Bézier running from
/// the previous midpoint to the midpoint between the sample and its successor.
/// The last sample has no successor: its value is reused one slot to the
/// right, so the final piece ends in a flat tail half a sample past it.
///
/// Returns `Ok(None)` for an empty series.
pub fn build_curve_geometry(
    points: &[DataPoint],
    viewport: Viewport,
    padding: f64,
) -> ChartResult<Option<CurveGeometry>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(ChartError::InvalidData(
            "padding must be finite and >= 0".to_owned(),
        ));
    }
    if let Some(index) = points.iter().position(|point| !point.value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "point value at index {index} must be finite"
        )));
    }

    let Some(range) = ValueRange::from_points(points) else {
        debug!("curve geometry requested for empty series");
        return Ok(None);
    };

    let count = points.len();
    let space_per_sample = (viewport.width - padding) / count as f64;
    let baseline_y = viewport.height - padding;
    let x_at = |index: usize| padding + index as f64 * space_per_sample;
    let y_at = |index: usize| baseline_y - range.ratio(points[index].value) * viewport.height;
    let pixel_at = |index: usize| CurvePoint::new(x_at(index), y_at(index));

    let first = pixel_at(0);
    let mut cursor = first;
    let mut stroke_segments = Vec::with_capacity(count);
    for index in 0..count {
        let current = pixel_at(index);
        let next = CurvePoint::new(x_at(index + 1), y_at((index + 1).min(count - 1)));
        let end = current.midpoint(next);
        stroke_segments.push(QuadSegment {
            start: cursor,
            control: current,
            end,
        });
        cursor = end;
    }
    let last_point_pixel_x = cursor.x;

    let mut fill_contour = CurvePath::from_segments(&stroke_segments);
    for vertex in [
        CurvePoint::new(last_point_pixel_x, baseline_y),
        CurvePoint::new(padding, baseline_y),
        first,
    ] {
        fill_contour.line_to(vertex);
    }
    fill_contour.close();

    trace!(
        count,
        last_point_pixel_x,
        space_per_sample,
        flat = range.is_flat(),
        "built curve geometry"
    );

    Ok(Some(CurveGeometry {
        stroke_segments,
        fill_contour,
        point_xs: (0..count).map(x_at).collect(),
        first_point_pixel_y: first.y,
        last_point_pixel_x,
        baseline_y,
        space_per_sample,
        range,
    }))
}
