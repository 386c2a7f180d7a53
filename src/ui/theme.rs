//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Axis tick label color.
    pub axis: Color,
    /// Border color.
    pub border: Color,
    /// Active axis label color.
    pub active: Color,
    /// Inactive axis label color.
    pub inactive: Color,
    /// Data point color.
    pub point: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                axis: Color::Rgb(184, 187, 38),
                border: Color::Rgb(102, 92, 84),
                active: Color::Rgb(251, 184, 108),
                inactive: Color::Rgb(124, 111, 100),
                point: Color::Rgb(142, 192, 124),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                axis: Color::Rgb(121, 116, 14),
                border: Color::Rgb(213, 196, 161),
                active: Color::Rgb(175, 58, 3),
                inactive: Color::Rgb(168, 153, 132),
                point: Color::Rgb(102, 123, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}
