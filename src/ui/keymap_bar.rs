//! Keymap help bar UI component.

use super::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(crate) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let keymap_text =
        "q:quit | x/X:X axis | y/Y:Y axis | click label:select | hover point:tooltip | T:theme | ?:help";

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.status_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
