//! spark-chart: smoothed sparkline geometry and rendering.
//!
//! The `core` module turns an ordered series into a quadratic-Bézier stroke,
//! its baseline-closed fill contour and label anchors as a pure function of
//! `(points, viewport, padding)`. `render` materializes that geometry into a
//! backend-agnostic frame, and `api` ties both together for host applications.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartStyle, LineChart, LineChartOptions};
pub use error::{ChartError, ChartResult};
