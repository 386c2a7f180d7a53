//! Clickable axis label groups.
//!
//! Three labels per axis; exactly one per axis is marked active, matching
//! the current selection. The returned rectangles are the click targets.

use super::ThemeColors;
use crate::chart::{Attribute, AxisSelection};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Draw the three X-axis labels below the chart, centered.
pub(crate) fn draw_x_labels(
    f: &mut Frame<'_>,
    area: Rect,
    selection: &AxisSelection,
    colors: &ThemeColors,
) -> Vec<(Rect, Attribute)> {
    let mut targets = Vec::with_capacity(Attribute::X_AXIS.len());

    for (index, &attribute) in Attribute::X_AXIS.iter().enumerate() {
        let row = area.y + index as u16;
        if row >= area.bottom() {
            break;
        }
        let text = attribute.axis_label();
        let width = (text.width() as u16).min(area.width);
        let x = area.x + area.width.saturating_sub(width) / 2;
        let rect = Rect::new(x, row, width, 1);

        f.render_widget(
            Paragraph::new(text).style(label_style(selection.x() == attribute, colors)),
            rect,
        );
        targets.push((rect, attribute));
    }

    targets
}

/// Draw the three Y-axis labels left of the chart, right-aligned and
/// vertically centered.
pub(crate) fn draw_y_labels(
    f: &mut Frame<'_>,
    area: Rect,
    selection: &AxisSelection,
    colors: &ThemeColors,
) -> Vec<(Rect, Attribute)> {
    let mut targets = Vec::with_capacity(Attribute::Y_AXIS.len());
    let count = Attribute::Y_AXIS.len() as u16;
    let top = area.y + area.height.saturating_sub(count) / 2;

    for (index, &attribute) in Attribute::Y_AXIS.iter().enumerate() {
        let row = top + index as u16;
        if row >= area.bottom() {
            break;
        }
        let text = attribute.axis_label();
        let width = (text.width() as u16).min(area.width);
        let x = area.right().saturating_sub(width + 1).max(area.x);
        let rect = Rect::new(x, row, width, 1);

        f.render_widget(
            Paragraph::new(text).style(label_style(selection.y() == attribute, colors)),
            rect,
        );
        targets.push((rect, attribute));
    }

    targets
}

fn label_style(active: bool, colors: &ThemeColors) -> Style {
    if active {
        Style::default()
            .fg(colors.active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.inactive)
    }
}
