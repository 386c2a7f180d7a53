//! Status bar UI component.

use super::ThemeColors;
use crate::chart::AxisSelection;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar: the latest message plus the active attribute pair.
pub(crate) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    selection: &AxisSelection,
    colors: &ThemeColors,
) {
    let text = format!(
        "{}   [X: {} | Y: {}]",
        status,
        selection.x().axis_label(),
        selection.y().axis_label()
    );

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
