use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DashPattern};

/// Visual parameters for one line chart.
///
/// Sizes suffixed with `_dp` are density-independent and multiplied by
/// `density` when the frame is built. Every field has a default so partial
/// JSON documents load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    #[serde(default = "default_graph_color")]
    pub graph_color: Color,
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f64,
    #[serde(default = "default_stroke_width_dp")]
    pub stroke_width_dp: f64,
    #[serde(default = "default_reference_line_alpha")]
    pub reference_line_alpha: f64,
    #[serde(default = "default_reference_line_width_dp")]
    pub reference_line_width_dp: f64,
    /// Dash lengths of the reference line, in pixels.
    #[serde(default = "default_reference_dash")]
    pub reference_dash: DashPattern,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    /// Opacity applied to `label_color` when the labels are drawn.
    #[serde(default = "default_label_alpha")]
    pub label_alpha: f64,
    #[serde(default = "default_label_size_dp")]
    pub label_size_dp: f64,
    #[serde(default = "default_density")]
    pub density: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            graph_color: default_graph_color(),
            fill_alpha: default_fill_alpha(),
            stroke_width_dp: default_stroke_width_dp(),
            reference_line_alpha: default_reference_line_alpha(),
            reference_line_width_dp: default_reference_line_width_dp(),
            reference_dash: default_reference_dash(),
            label_color: default_label_color(),
            label_alpha: default_label_alpha(),
            label_size_dp: default_label_size_dp(),
            density: default_density(),
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub fn with_graph_color(mut self, color: Color) -> Self {
        self.graph_color = color;
        self
    }

    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn px(self, dp: f64) -> f64 {
        dp * self.density
    }

    pub fn validate(self) -> ChartResult<()> {
        self.graph_color.validate()?;
        self.label_color.validate()?;
        self.reference_dash.validate()?;
        for (name, alpha) in [
            ("fill_alpha", self.fill_alpha),
            ("reference_line_alpha", self.reference_line_alpha),
            ("label_alpha", self.label_alpha),
        ] {
            if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and in [0, 1]"
                )));
            }
        }
        for (name, size) in [
            ("stroke_width_dp", self.stroke_width_dp),
            ("reference_line_width_dp", self.reference_line_width_dp),
            ("label_size_dp", self.label_size_dp),
            ("density", self.density),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Per-chart switches plus style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartOptions {
    #[serde(default)]
    pub padding: f64,
    #[serde(default)]
    pub show_reference_line: bool,
    #[serde(default)]
    pub show_min_max_labels: bool,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            padding: 0.0,
            show_reference_line: false,
            show_min_max_labels: false,
            style: ChartStyle::default(),
        }
    }
}

impl LineChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_reference_line(mut self, enabled: bool) -> Self {
        self.show_reference_line = enabled;
        self
    }

    #[must_use]
    pub fn with_min_max_labels(mut self, enabled: bool) -> Self {
        self.show_min_max_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}

fn default_graph_color() -> Color {
    Color::rgb(1.0, 0.0, 0.0)
}

fn default_fill_alpha() -> f64 {
    0.5
}

fn default_stroke_width_dp() -> f64 {
    2.0
}

fn default_reference_line_alpha() -> f64 {
    0.8
}

fn default_reference_line_width_dp() -> f64 {
    1.5
}

fn default_reference_dash() -> DashPattern {
    DashPattern::new(10.0, 20.0)
}

fn default_label_color() -> Color {
    Color::from_argb_u32(0xFFEB_EBEB)
}

fn default_label_alpha() -> f64 {
    192.0 / 255.0
}

fn default_label_size_dp() -> f64 {
    12.0
}

fn default_density() -> f64 {
    1.0
}
