//! Tooltip overlay for the hovered point.

use super::ThemeColors;
use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Draw the tooltip next to the hovered point, if any.
///
/// The box is anchored below-right of the point and flips to the other
/// side when it would not fit on screen.
pub(crate) fn draw_tooltip(f: &mut Frame<'_>, app: &App, colors: &ThemeColors) {
    let Some(index) = app.chart.hovered else {
        return;
    };
    let (Some(row), Some(&(col, line))) = (app.rows.get(index), app.layout.points.get(index))
    else {
        return;
    };

    let text = app.chart.tooltip_for(row);
    let width = text.lines().map(|l| l.width()).max().unwrap_or(0) as u16 + 2;
    let height = text.lines().count() as u16 + 2;
    let frame = f.area();
    if width > frame.width || height > frame.height {
        return;
    }

    let mut x = col.saturating_add(2);
    if x + width > frame.right() {
        x = col.saturating_sub(width + 1);
    }
    let mut y = line.saturating_add(1);
    if y + height > frame.bottom() {
        y = line.saturating_sub(height);
    }
    let rect = Rect::new(x, y, width, height);

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(colors.text).bg(colors.status_bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.active)),
            ),
        rect,
    );
}
