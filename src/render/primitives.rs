use serde::{Deserialize, Serialize};

use crate::core::CurvePath;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Decodes a packed `0xAARRGGBB` value.
    #[must_use]
    pub fn from_argb_u32(argb: u32) -> Self {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xFF) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Same color with zero alpha, used as the far end of area gradients.
    #[must_use]
    pub fn transparent(self) -> Self {
        self.with_alpha(0.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
}

/// On/off dash lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub on: f64,
    pub off: f64,
    #[serde(default)]
    pub phase: f64,
}

impl DashPattern {
    #[must_use]
    pub const fn new(on: f64, off: f64) -> Self {
        Self { on, off, phase: 0.0 }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.on.is_finite() || !self.off.is_finite() || !self.phase.is_finite() {
            return Err(ChartError::InvalidData(
                "dash lengths must be finite".to_owned(),
            ));
        }
        if self.on <= 0.0 || self.off < 0.0 {
            return Err(ChartError::InvalidData(
                "dash `on` must be > 0 and `off` >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Color,
    pub cap: LineCap,
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    #[must_use]
    pub const fn solid(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            cap: LineCap::Round,
            dash: None,
        }
    }

    #[must_use]
    pub const fn dashed(width: f64, color: Color, dash: DashPattern) -> Self {
        Self {
            width,
            color,
            cap: LineCap::Round,
            dash: Some(dash),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = self.dash {
            dash.validate()?;
        }
        self.color.validate()
    }
}

/// Top-to-bottom linear gradient spanning `start_y..end_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalGradient {
    pub top: Color,
    pub bottom: Color,
    pub start_y: f64,
    pub end_y: f64,
}

impl VerticalGradient {
    pub fn validate(self) -> ChartResult<()> {
        if !self.start_y.is_finite() || !self.end_y.is_finite() {
            return Err(ChartError::InvalidData(
                "gradient bounds must be finite".to_owned(),
            ));
        }
        self.top.validate()?;
        self.bottom.validate()
    }
}

/// Stroke command for a recorded curve path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePrimitive {
    pub path: CurvePath,
    pub style: StrokeStyle,
}

impl StrokePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        validate_path(&self.path)?;
        self.style.validate()
    }
}

/// Gradient fill command for a closed curve path.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPrimitive {
    pub path: CurvePath,
    pub gradient: VerticalGradient,
}

impl FillPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        validate_path(&self.path)?;
        if !self.path.is_closed() {
            return Err(ChartError::InvalidData(
                "fill path must be closed".to_owned(),
            ));
        }
        self.gradient.validate()
    }
}

fn validate_path(path: &CurvePath) -> ChartResult<()> {
    if path.first_point().is_none() {
        return Err(ChartError::InvalidData(
            "path must start with move_to".to_owned(),
        ));
    }
    if path.points().iter().any(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(
            "path coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// Draw command for one straight line in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: StrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, style: StrokeStyle) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            style,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        self.style.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub bold: bool,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            bold: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
