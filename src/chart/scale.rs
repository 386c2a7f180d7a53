//! Linear data-to-pixel scales.

use super::Attribute;
use crate::data::StateRow;

/// Domain padding below the dataset minimum.
const DOMAIN_PAD_LO: f64 = 0.8;
/// Domain padding above the dataset maximum.
const DOMAIN_PAD_HI: f64 = 1.2;

/// A pixel interval. `end` may be smaller than `start` for inverted axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRange {
    /// Pixel coordinate the domain minimum maps to.
    pub start: f64,
    /// Pixel coordinate the domain maximum maps to.
    pub end: f64,
}

impl PixelRange {
    /// Create a new pixel range.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Midpoint of the range.
    pub fn midpoint(self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Linear mapping from an attribute's padded value domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    lo: f64,
    hi: f64,
    range: PixelRange,
}

impl LinearScale {
    /// Fit a scale to the given rows and attribute.
    ///
    /// The domain is `[min * 0.8, max * 1.2]` over the attribute's values.
    /// `rows` must be non-empty; the dataset loader guarantees this.
    pub fn fit(rows: &[StateRow], attribute: Attribute, range: PixelRange) -> Self {
        debug_assert!(!rows.is_empty());

        let (min, max) = rows
            .iter()
            .map(|row| attribute.value(row))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        Self {
            lo: min * DOMAIN_PAD_LO,
            hi: max * DOMAIN_PAD_HI,
            range,
        }
    }

    /// Map a data value to a pixel coordinate.
    ///
    /// A degenerate domain (`hi == lo`, possible when every row shares the
    /// value 0) maps every input to the midpoint of the pixel range instead
    /// of dividing by zero.
    pub fn map(&self, value: f64) -> f64 {
        if self.hi == self.lo {
            return self.range.midpoint();
        }
        self.range.start
            + (value - self.lo) / (self.hi - self.lo) * (self.range.end - self.range.start)
    }

    /// The padded value domain `(lo, hi)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    /// The pixel range.
    pub fn range(&self) -> PixelRange {
        self.range
    }
}
