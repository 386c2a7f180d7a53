//! Scatter chart canvas.

use std::time::Instant;

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::app::App;
use crate::chart::{PLOT_HEIGHT, PLOT_WIDTH};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Tick labels per axis.
const TICK_COUNT: usize = 5;
/// Point radius in virtual pixels.
const POINT_RADIUS: f64 = 7.0;

/// Draw the scatter canvas.
///
/// Returns the inner plot area and the screen cell of every point so the
/// event loop can hit-test hovers.
pub(crate) fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    app: &App,
    now: Instant,
    colors: &ThemeColors,
) -> (Rect, Vec<(u16, u16)>) {
    let title = format!(
        " {} vs {} ",
        app.chart.selection.x().axis_label(),
        app.chart.selection.y().axis_label()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(title)
        .title_style(Style::default().fg(colors.active).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);

    let positions = app.chart.positions(now);
    let x_domain = app.chart.x_domain(now);
    let y_domain = app.chart.y_domain(now);
    let hovered = app.chart.hovered;

    // Width of one character cell in virtual pixels, for centering text.
    let char_width = PLOT_WIDTH / f64::from(inner.width.max(1));

    let canvas = Canvas::default()
        .block(block)
        .background_color(colors.bg)
        .marker(Marker::Braille)
        .x_bounds([0.0, PLOT_WIDTH])
        .y_bounds([0.0, PLOT_HEIGHT])
        .paint(|ctx| {
            // Axis rulers along the left and bottom edges.
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: PLOT_WIDTH,
                y2: 0.0,
                color: colors.border,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: PLOT_HEIGHT,
                color: colors.border,
            });

            for (index, &(x, y)) in positions.iter().enumerate() {
                let color = if hovered == Some(index) {
                    colors.active
                } else {
                    colors.point
                };
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: POINT_RADIUS,
                    color,
                });
            }

            ctx.layer();

            for (index, &(x, y)) in positions.iter().enumerate() {
                let abbr = app.rows[index].abbr.clone();
                let offset = abbr.width() as f64 * char_width / 2.0;
                ctx.print(
                    x - offset,
                    y,
                    Line::styled(abbr, Style::default().fg(colors.text)),
                );
            }

            ctx.layer();

            for (fraction, value) in tick_values(x_domain, TICK_COUNT) {
                let label = format_axis_label(value);
                let mut x = fraction * PLOT_WIDTH;
                let label_width = label.width() as f64 * char_width;
                if x + label_width > PLOT_WIDTH {
                    x = PLOT_WIDTH - label_width;
                }
                ctx.print(x, 0.0, Line::styled(label, Style::default().fg(colors.axis)));
            }

            // The origin cell belongs to the X tick.
            for (fraction, value) in tick_values(y_domain, TICK_COUNT).into_iter().skip(1) {
                let label = format_axis_label(value);
                ctx.print(
                    0.0,
                    fraction * PLOT_HEIGHT,
                    Line::styled(label, Style::default().fg(colors.axis)),
                );
            }
        });

    f.render_widget(canvas, area);

    let points = positions
        .iter()
        .map(|&(x, y)| to_cell(inner, x, y))
        .collect();
    (inner, points)
}

/// Evenly spaced `(pixel fraction, domain value)` pairs for tick labels.
fn tick_values(domain: (f64, f64), count: usize) -> Vec<(f64, f64)> {
    let (lo, hi) = domain;
    let last = (count.max(2) - 1) as f64;
    (0..count.max(2))
        .map(|i| {
            let fraction = i as f64 / last;
            (fraction, lo + (hi - lo) * fraction)
        })
        .collect()
}

/// Map a virtual pixel position to a terminal cell inside `inner`.
fn to_cell(inner: Rect, x: f64, y: f64) -> (u16, u16) {
    let cols = f64::from(inner.width.saturating_sub(1).max(1));
    let rows = f64::from(inner.height.saturating_sub(1).max(1));
    let col = inner.x + ((x / PLOT_WIDTH).clamp(0.0, 1.0) * cols).round() as u16;
    let row = inner.y + ((1.0 - (y / PLOT_HEIGHT).clamp(0.0, 1.0)) * rows).round() as u16;
    (col, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_span_the_domain() {
        let ticks = tick_values((8.0, 36.0), 5);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], (0.0, 8.0));
        assert_eq!(ticks[4], (1.0, 36.0));
        assert!((ticks[2].1 - 22.0).abs() < 1e-9);
    }

    #[test]
    fn tick_count_is_clamped_to_at_least_two() {
        let ticks = tick_values((0.0, 10.0), 1);
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[1], (1.0, 10.0));
    }

    #[test]
    fn corner_positions_map_onto_the_inner_rect() {
        let inner = Rect::new(1, 1, 78, 22);

        // Bottom-left of the plot is the bottom-left cell.
        assert_eq!(to_cell(inner, 0.0, 0.0), (1, 22));
        // Top-right of the plot is the top-right cell.
        assert_eq!(to_cell(inner, PLOT_WIDTH, PLOT_HEIGHT), (78, 1));
    }

    #[test]
    fn out_of_bounds_positions_are_clamped() {
        let inner = Rect::new(0, 0, 10, 10);
        assert_eq!(to_cell(inner, -50.0, -50.0), (0, 9));
        assert_eq!(to_cell(inner, PLOT_WIDTH * 2.0, PLOT_HEIGHT * 2.0), (9, 0));
    }

    #[test]
    fn degenerate_rect_does_not_panic() {
        let inner = Rect::new(3, 3, 0, 0);
        assert_eq!(to_cell(inner, 100.0, 100.0), (3, 4));
    }
}
