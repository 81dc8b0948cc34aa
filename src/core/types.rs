use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, hour_label};
use crate::error::ChartResult;

/// Drawing-surface size in pixel-equivalent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One sample of the plotted series.
///
/// Input order defines x-axis order; points are never sorted or deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: f64,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            x_label: None,
            y_label: None,
        }
    }

    #[must_use]
    pub fn with_labels(value: f64, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            value,
            x_label: Some(x_label.into()),
            y_label: Some(y_label.into()),
        }
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Builds a point from a decimal price; the y label keeps the exact decimal text.
    pub fn from_decimal(price: Decimal, x_label: Option<String>) -> ChartResult<Self> {
        Ok(Self {
            value: decimal_to_f64(price, "price")?,
            x_label,
            y_label: Some(price.to_string()),
        })
    }

    /// Builds an hourly sample labelled with its zero-padded UTC hour.
    pub fn hourly(time: DateTime<Utc>, price: Decimal) -> ChartResult<Self> {
        Self::from_decimal(price, Some(hour_label(time)))
    }

    #[must_use]
    pub fn y_label_or_empty(&self) -> &str {
        self.y_label.as_deref().unwrap_or("")
    }

    #[must_use]
    pub fn x_label_or_empty(&self) -> &str {
        self.x_label.as_deref().unwrap_or("")
    }
}
