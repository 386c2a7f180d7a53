//! The axis-selection state machine.

use super::Attribute;

/// Which attribute is bound to each axis.
///
/// Exactly one attribute per axis is active at all times; there are nine
/// reachable states (three X attributes times three Y attributes) and no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSelection {
    x: Attribute,
    y: Attribute,
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisSelection {
    /// Initial selection: poverty on X, healthcare on Y.
    pub fn new() -> Self {
        Self {
            x: Attribute::Poverty,
            y: Attribute::Healthcare,
        }
    }

    /// The active X attribute.
    pub fn x(&self) -> Attribute {
        self.x
    }

    /// The active Y attribute.
    pub fn y(&self) -> Attribute {
        self.y
    }

    /// Bind `attribute` to the X axis.
    ///
    /// Returns `false` without any state change when the attribute is
    /// already active or is not an X-axis attribute; callers skip the
    /// re-render in that case. The Y axis is never touched.
    pub fn select_x(&mut self, attribute: Attribute) -> bool {
        if attribute == self.x || !Attribute::X_AXIS.contains(&attribute) {
            return false;
        }
        self.x = attribute;
        true
    }

    /// Bind `attribute` to the Y axis. Same contract as [`select_x`].
    ///
    /// [`select_x`]: AxisSelection::select_x
    pub fn select_y(&mut self, attribute: Attribute) -> bool {
        if attribute == self.y || !Attribute::Y_AXIS.contains(&attribute) {
            return false;
        }
        self.y = attribute;
        true
    }

    /// Advance the X axis to the next attribute in its set, wrapping.
    pub fn cycle_x(&mut self) {
        self.x = Self::next_in(&Attribute::X_AXIS, self.x, 1);
    }

    /// Step the X axis back to the previous attribute in its set, wrapping.
    pub fn cycle_x_back(&mut self) {
        self.x = Self::next_in(&Attribute::X_AXIS, self.x, 2);
    }

    /// Advance the Y axis to the next attribute in its set, wrapping.
    pub fn cycle_y(&mut self) {
        self.y = Self::next_in(&Attribute::Y_AXIS, self.y, 1);
    }

    /// Step the Y axis back to the previous attribute in its set, wrapping.
    pub fn cycle_y_back(&mut self) {
        self.y = Self::next_in(&Attribute::Y_AXIS, self.y, 2);
    }

    fn next_in(set: &[Attribute; 3], current: Attribute, step: usize) -> Attribute {
        let position = set.iter().position(|&a| a == current).unwrap_or(0);
        set[(position + step) % set.len()]
    }
}
