mod json_contract;
mod line_chart;
mod line_chart_frame_builder;
mod options;

pub use json_contract::{CURVE_GEOMETRY_JSON_SCHEMA_V1, CurveGeometryJsonContractV1};
pub use line_chart::LineChart;
pub use line_chart_frame_builder::{build_line_chart_frame, frame_from_geometry};
pub use options::{ChartStyle, LineChartOptions};
