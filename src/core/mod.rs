pub mod curve;
pub mod overlay;
pub mod path;
pub mod primitives;
pub mod types;
pub mod value_range;

pub use curve::{CurveGeometry, CurveGeometryBuilder, build_curve_geometry};
pub use overlay::{LabelAnchor, MinMaxLabels, ReferenceLine, min_max_labels, reference_line};
pub use path::{CurvePath, CurvePoint, PathCommand, PathSink, QuadSegment};
pub use types::{DataPoint, Viewport};
pub use value_range::{FLAT_SERIES_RATIO, ValueRange};
