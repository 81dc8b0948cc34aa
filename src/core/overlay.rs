use serde::{Deserialize, Serialize};

use crate::core::{CurveGeometry, DataPoint, Viewport};

pub const LABEL_RIGHT_INSET_DP: f64 = 16.0;
pub const MAX_LABEL_BASELINE_DP: f64 = 8.0;
pub const MIN_LABEL_BOTTOM_INSET_DP: f64 = 4.0;

/// Horizontal guide at the first sample's height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
}

#[must_use]
pub fn reference_line(geometry: &CurveGeometry) -> ReferenceLine {
    ReferenceLine {
        y: geometry.first_point_pixel_y,
        x_start: 0.0,
        x_end: geometry.last_point_pixel_x,
    }
}

/// Text anchored by its right edge at `(x, baseline_y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub text: String,
    pub x: f64,
    pub baseline_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxLabels {
    pub max: LabelAnchor,
    pub min: LabelAnchor,
}

/// Lays out the "MAX"/"MIN" labels in the top-right and bottom-right corners.
///
/// `density` converts density-independent units to pixels. Missing y labels
/// render as empty strings.
#[must_use]
pub fn min_max_labels(
    points: &[DataPoint],
    geometry: &CurveGeometry,
    viewport: Viewport,
    density: f64,
) -> MinMaxLabels {
    let upper = geometry
        .upper_point(points)
        .map_or("", DataPoint::y_label_or_empty);
    let lower = geometry
        .lower_point(points)
        .map_or("", DataPoint::y_label_or_empty);
    let x = viewport.width - LABEL_RIGHT_INSET_DP * density;

    MinMaxLabels {
        max: LabelAnchor {
            text: format!("MAX {upper}"),
            x,
            baseline_y: MAX_LABEL_BASELINE_DP * density,
        },
        min: LabelAnchor {
            text: format!("MIN {lower}"),
            x,
            baseline_y: viewport.height - MIN_LABEL_BOTTOM_INSET_DP * density,
        },
    }
}
