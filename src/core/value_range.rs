use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Ratio used for every sample when all values are equal.
pub const FLAT_SERIES_RATIO: f64 = 0.5;

/// Min/max of a series, keeping the indices of the points that hold them.
///
/// On ties the first occurrence wins for both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub lower_index: usize,
    pub upper_index: usize,
    pub lower: f64,
    pub upper: f64,
}

impl ValueRange {
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut range = Self {
            lower_index: 0,
            upper_index: 0,
            lower: first.value,
            upper: first.value,
        };

        for (index, point) in points.iter().enumerate().skip(1) {
            let value = OrderedFloat(point.value);
            if value < OrderedFloat(range.lower) {
                range.lower = point.value;
                range.lower_index = index;
            }
            if value > OrderedFloat(range.upper) {
                range.upper = point.value;
                range.upper_index = index;
            }
        }

        Some(range)
    }

    /// `upper - lower`; infinite when the difference overflows `f64`.
    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.span() == 0.0
    }

    /// Normalizes `value` into `[0, 1]` within the range.
    ///
    /// Works on halved operands so ranges wider than `f64::MAX` stay finite.
    #[must_use]
    pub fn ratio(self, value: f64) -> f64 {
        if self.is_flat() {
            return FLAT_SERIES_RATIO;
        }
        let half_lower = self.lower / 2.0;
        let ratio = (value / 2.0 - half_lower) / (self.upper / 2.0 - half_lower);
        // Subnormal spans can halve to zero.
        if ratio.is_nan() {
            return FLAT_SERIES_RATIO;
        }
        ratio.clamp(0.0, 1.0)
    }
}
