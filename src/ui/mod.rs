//! User interface rendering.
//!
//! The draw pass is immediate-mode: every frame renders the whole chart
//! from [`App`] state and records the screen geometry of the clickable
//! label targets and of every point into [`ChartLayout`], which the event
//! loop uses to resolve clicks and hovers.

mod chart;
mod formatters;
mod keymap_bar;
mod labels;
mod status_bar;
mod theme;
mod tooltip;

use std::time::Instant;

use crate::app::App;
use crate::chart::Attribute;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub use theme::ThemeColors;

/// Width of the Y-axis label column in cells.
const Y_LABEL_WIDTH: u16 = 24;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// An X-axis attribute label.
    XLabel(Attribute),
    /// A Y-axis attribute label.
    YLabel(Attribute),
}

/// Screen geometry recorded by the last draw pass.
#[derive(Debug, Clone, Default)]
pub struct ChartLayout {
    /// Inner plot area of the chart canvas.
    pub canvas: Rect,
    /// Screen rectangle of each X-axis label.
    pub x_labels: Vec<(Rect, Attribute)>,
    /// Screen rectangle of each Y-axis label.
    pub y_labels: Vec<(Rect, Attribute)>,
    /// Screen cell of each data point, indexed like the dataset rows.
    pub points: Vec<(u16, u16)>,
}

impl ChartLayout {
    /// Resolve a click to an axis label, if it hit one.
    pub fn hit_label(&self, column: u16, row: u16) -> Option<ClickTarget> {
        for &(rect, attribute) in &self.x_labels {
            if contains(rect, column, row) {
                return Some(ClickTarget::XLabel(attribute));
            }
        }
        for &(rect, attribute) in &self.y_labels {
            if contains(rect, column, row) {
                return Some(ClickTarget::YLabel(attribute));
            }
        }
        None
    }

    /// Find the point under the cursor, if any.
    ///
    /// The nearest point within one cell in each direction wins; ties go
    /// to the earlier row.
    pub fn point_at(&self, column: u16, row: u16) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, &(col, line)) in self.points.iter().enumerate() {
            let dc = (i32::from(col) - i32::from(column)).unsigned_abs();
            let dr = (i32::from(line) - i32::from(row)).unsigned_abs();
            if dc > 1 || dr > 1 {
                continue;
            }
            let distance = dc * dc + dr * dr;
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.left() && column < rect.right() && row >= rect.top() && row < rect.bottom()
}

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let now = Instant::now();
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let rows = Layout::vertical([
        Constraint::Min(10),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(f.area());

    let main = Layout::horizontal([Constraint::Length(Y_LABEL_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    let y_labels = labels::draw_y_labels(f, main[0], &app.chart.selection, &colors);
    let (canvas, points) = chart::draw_chart(f, main[1], app, now, &colors);
    let x_labels = labels::draw_x_labels(f, rows[1], &app.chart.selection, &colors);
    status_bar::draw_status(f, rows[2], &app.status, &app.chart.selection, &colors);
    keymap_bar::draw_keymap(f, rows[3], &colors);

    app.layout = ChartLayout {
        canvas,
        x_labels,
        y_labels,
        points,
    };

    // Drawn last so the overlay sits on top of the chart.
    tooltip::draw_tooltip(f, app, &colors);
}
