//! The scatter chart core.
//!
//! This module owns everything the renderer needs that is independent of
//! the terminal: the attribute catalog, linear scales, the axis-selection
//! state machine, the animated transition, and tooltip formatting.
//! [`ChartState`] is the render coordinator tying them together.

mod attribute;
mod scale;
mod selection;
mod tooltip;
mod transition;

pub use attribute::{Attribute, Unit};
pub use scale::{LinearScale, PixelRange};
pub use selection::AxisSelection;
pub use tooltip::format_tooltip;
pub use transition::{Position, Transition, TRANSITION_DURATION};

use crate::data::StateRow;
use std::time::Instant;

/// Virtual plot width in pixels (the original chart's inner width).
pub const PLOT_WIDTH: f64 = 760.0;
/// Virtual plot height in pixels (the original chart's inner height).
pub const PLOT_HEIGHT: f64 = 510.0;

/// Pixel range of the X axis.
pub fn x_pixel_range() -> PixelRange {
    PixelRange::new(0.0, PLOT_WIDTH)
}

/// Pixel range of the Y axis (bottom to top).
pub fn y_pixel_range() -> PixelRange {
    PixelRange::new(0.0, PLOT_HEIGHT)
}

/// Target pixel positions for all rows under the given scales and selection.
///
/// Pure function of its inputs; the animated transition interpolates
/// towards exactly these values, so repeated toggles land on identical
/// positions.
pub fn target_positions(
    rows: &[StateRow],
    selection: &AxisSelection,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
) -> Vec<Position> {
    rows.iter()
        .map(|row| {
            (
                x_scale.map(selection.x().value(row)),
                y_scale.map(selection.y().value(row)),
            )
        })
        .collect()
}

/// Render coordinator for the scatter chart.
///
/// Owns the axis selection, both scales, the in-flight transition, and the
/// hover state. Selection changes recompute the affected axis's scale and
/// retarget the transition; everything else is derived at draw time.
#[derive(Debug)]
pub struct ChartState {
    /// Current axis selection.
    pub selection: AxisSelection,
    /// Scale for the active X attribute.
    pub x_scale: LinearScale,
    /// Scale for the active Y attribute.
    pub y_scale: LinearScale,
    /// Index of the hovered row, if any.
    pub hovered: Option<usize>,
    transition: Transition,
}

impl ChartState {
    /// Build the initial chart for a loaded dataset.
    ///
    /// Points start settled at their targets; the original renders the
    /// first view without an animation.
    pub fn new(rows: &[StateRow]) -> Self {
        let selection = AxisSelection::new();
        let x_scale = LinearScale::fit(rows, selection.x(), x_pixel_range());
        let y_scale = LinearScale::fit(rows, selection.y(), y_pixel_range());
        let targets = target_positions(rows, &selection, &x_scale, &y_scale);

        Self {
            selection,
            x_scale,
            y_scale,
            hovered: None,
            transition: Transition::settled(targets, x_scale.domain(), y_scale.domain()),
        }
    }

    /// Bind an attribute to the X axis.
    ///
    /// A click on the active attribute or an out-of-set attribute returns
    /// `false` and triggers nothing. Otherwise the X scale is refitted (the
    /// Y scale is untouched) and the transition is retargeted.
    pub fn select_x(&mut self, rows: &[StateRow], attribute: Attribute, now: Instant) -> bool {
        if !self.selection.select_x(attribute) {
            return false;
        }
        self.x_scale = LinearScale::fit(rows, attribute, x_pixel_range());
        self.retarget(rows, now);
        true
    }

    /// Bind an attribute to the Y axis. Same contract as [`select_x`].
    ///
    /// [`select_x`]: ChartState::select_x
    pub fn select_y(&mut self, rows: &[StateRow], attribute: Attribute, now: Instant) -> bool {
        if !self.selection.select_y(attribute) {
            return false;
        }
        self.y_scale = LinearScale::fit(rows, attribute, y_pixel_range());
        self.retarget(rows, now);
        true
    }

    /// Advance the X axis to its next attribute.
    pub fn cycle_x(&mut self, rows: &[StateRow], now: Instant) {
        self.selection.cycle_x();
        self.x_scale = LinearScale::fit(rows, self.selection.x(), x_pixel_range());
        self.retarget(rows, now);
    }

    /// Step the X axis back to its previous attribute.
    pub fn cycle_x_back(&mut self, rows: &[StateRow], now: Instant) {
        self.selection.cycle_x_back();
        self.x_scale = LinearScale::fit(rows, self.selection.x(), x_pixel_range());
        self.retarget(rows, now);
    }

    /// Advance the Y axis to its next attribute.
    pub fn cycle_y(&mut self, rows: &[StateRow], now: Instant) {
        self.selection.cycle_y();
        self.y_scale = LinearScale::fit(rows, self.selection.y(), y_pixel_range());
        self.retarget(rows, now);
    }

    /// Step the Y axis back to its previous attribute.
    pub fn cycle_y_back(&mut self, rows: &[StateRow], now: Instant) {
        self.selection.cycle_y_back();
        self.y_scale = LinearScale::fit(rows, self.selection.y(), y_pixel_range());
        self.retarget(rows, now);
    }

    /// Point positions to draw at `now`.
    pub fn positions(&self, now: Instant) -> Vec<Position> {
        self.transition.points_at(now)
    }

    /// Final point positions of the current transition.
    pub fn target_positions(&self) -> &[Position] {
        self.transition.targets()
    }

    /// X-axis domain to label at `now` (tweens during a transition).
    pub fn x_domain(&self, now: Instant) -> (f64, f64) {
        self.transition.x_domain_at(now)
    }

    /// Y-axis domain to label at `now` (tweens during a transition).
    pub fn y_domain(&self, now: Instant) -> (f64, f64) {
        self.transition.y_domain_at(now)
    }

    /// Whether a transition is still in flight at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_animating(now)
    }

    /// Tooltip text for a row under the current selection.
    pub fn tooltip_for(&self, row: &StateRow) -> String {
        format_tooltip(row, self.selection.x(), self.selection.y())
    }

    fn retarget(&mut self, rows: &[StateRow], now: Instant) {
        let targets = target_positions(rows, &self.selection, &self.x_scale, &self.y_scale);
        self.transition
            .retarget(now, targets, self.x_scale.domain(), self.y_scale.domain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn rows() -> Vec<StateRow> {
        vec![
            StateRow {
                state: "Ohio".to_string(),
                abbr: "OH".to_string(),
                poverty: 10.0,
                age: 36.1,
                income: 48000.0,
                healthcare: 20.0,
                obesity: 30.0,
                smokes: 21.0,
            },
            StateRow {
                state: "Texas".to_string(),
                abbr: "TX".to_string(),
                poverty: 30.0,
                age: 34.5,
                income: 53000.0,
                healthcare: 5.0,
                obesity: 32.0,
                smokes: 18.0,
            },
        ]
    }

    #[test]
    fn initial_chart_is_settled_on_poverty_and_healthcare() {
        let rows = rows();
        let chart = ChartState::new(&rows);
        let now = Instant::now();

        assert_eq!(chart.selection, AxisSelection::new());
        assert_eq!(chart.x_scale.domain(), (8.0, 36.0));
        assert_eq!(chart.y_scale.domain(), (4.0, 24.0));
        assert!(!chart.is_animating(now));
        assert_eq!(chart.positions(now), chart.target_positions());
    }

    #[test]
    fn selecting_the_active_attribute_changes_nothing() {
        let rows = rows();
        let mut chart = ChartState::new(&rows);
        let now = Instant::now();
        let before = chart.target_positions().to_vec();
        let x_scale = chart.x_scale;

        assert!(!chart.select_x(&rows, Attribute::Poverty, now));
        assert_eq!(chart.x_scale, x_scale);
        assert_eq!(chart.target_positions(), before.as_slice());
        assert!(!chart.is_animating(now));
    }

    #[test]
    fn selecting_x_refits_only_the_x_scale() {
        let rows = rows();
        let mut chart = ChartState::new(&rows);
        let y_scale = chart.y_scale;

        assert!(chart.select_x(&rows, Attribute::Income, Instant::now()));
        assert_eq!(chart.selection.x(), Attribute::Income);
        assert_eq!(chart.x_scale.domain(), (48000.0 * 0.8, 53000.0 * 1.2));
        assert_eq!(chart.y_scale, y_scale);
    }

    #[test]
    fn a_selection_change_starts_a_transition() {
        let rows = rows();
        let mut chart = ChartState::new(&rows);
        let t0 = Instant::now();

        assert!(chart.select_y(&rows, Attribute::Smokes, t0));
        assert!(chart.is_animating(t0));
        assert!(!chart.is_animating(t0 + TRANSITION_DURATION));
        assert_eq!(
            chart.positions(t0 + TRANSITION_DURATION),
            chart.target_positions()
        );
    }

    #[test]
    fn round_trip_restores_identical_positions() {
        let rows = rows();
        let mut chart = ChartState::new(&rows);
        let original = chart.target_positions().to_vec();
        let t0 = Instant::now();

        assert!(chart.select_x(&rows, Attribute::Age, t0));
        assert!(chart.select_x(&rows, Attribute::Poverty, t0 + TRANSITION_DURATION));

        assert_eq!(chart.target_positions(), original.as_slice());
        assert_eq!(chart.x_scale.domain(), (8.0, 36.0));
    }

    #[test]
    fn invalid_attribute_for_an_axis_is_rejected() {
        let rows = rows();
        let mut chart = ChartState::new(&rows);
        let now = Instant::now();

        assert!(!chart.select_y(&rows, Attribute::Poverty, now));
        assert_eq!(chart.selection.y(), Attribute::Healthcare);
        assert!(!chart.is_animating(now));
    }

    #[test]
    fn domains_tween_during_a_transition() {
        let rows = rows();
        let mut chart = ChartState::new(&rows);
        let t0 = Instant::now();

        chart.cycle_y(&rows, t0);
        assert_eq!(chart.selection.y(), Attribute::Smokes);

        // Mid-flight the labelled domain sits between healthcare's [4, 24]
        // and smokes' [14.4, 25.2].
        let (lo, hi) = chart.y_domain(t0 + TRANSITION_DURATION / 2);
        assert!(lo > 4.0 && lo < 14.4);
        assert!(hi > 24.0 && hi < 25.2);

        let done = chart.y_domain(t0 + TRANSITION_DURATION);
        assert!((done.0 - 14.4).abs() < 1e-9);
        assert!((done.1 - 25.2).abs() < 1e-9);
    }

    #[test]
    fn tooltip_reflects_the_active_pair() {
        let rows = rows();
        let mut chart = ChartState::new(&rows);
        assert!(chart.select_y(&rows, Attribute::Smokes, Instant::now()));

        let text = chart.tooltip_for(&rows[0]);
        assert!(text.contains("OH"));
        assert!(text.contains("Poverty: 10%"));
        assert!(text.contains("Smokes: 21%"));
    }
}
