//! Application state and logic.

use std::path::PathBuf;
use std::time::Instant;

use crate::chart::{Attribute, ChartState};
use crate::data::StateRow;
use crate::ui::{ChartLayout, ClickTarget};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Path of the loaded dataset.
    pub file_path: PathBuf,
    /// Loaded dataset, immutable after parsing.
    pub rows: Vec<StateRow>,
    /// Scatter chart coordinator.
    pub chart: ChartState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Screen geometry of the last draw, used for click/hover hit-testing.
    pub layout: ChartLayout,
}

impl App {
    /// Create a new application instance from a loaded dataset.
    pub fn new(file_path: PathBuf, rows: Vec<StateRow>) -> Self {
        let chart = ChartState::new(&rows);
        let status = format!(
            "{} states loaded from {}",
            rows.len(),
            file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "dataset".to_string())
        );

        Self {
            file_path,
            rows,
            chart,
            status,
            theme: Theme::GruvboxDark,
            layout: ChartLayout::default(),
        }
    }

    /// Bind an attribute to the X axis; no-op if already active or invalid.
    pub fn select_x(&mut self, attribute: Attribute) {
        if self.chart.select_x(&self.rows, attribute, Instant::now()) {
            self.status = format!("X axis: {}", attribute.axis_label());
            tracing::debug!("X axis switched to {}", attribute.key());
        }
    }

    /// Bind an attribute to the Y axis; no-op if already active or invalid.
    pub fn select_y(&mut self, attribute: Attribute) {
        if self.chart.select_y(&self.rows, attribute, Instant::now()) {
            self.status = format!("Y axis: {}", attribute.axis_label());
            tracing::debug!("Y axis switched to {}", attribute.key());
        }
    }

    /// Advance the X axis to its next attribute.
    pub fn cycle_x(&mut self) {
        self.chart.cycle_x(&self.rows, Instant::now());
        self.status = format!("X axis: {}", self.chart.selection.x().axis_label());
    }

    /// Step the X axis back to its previous attribute.
    pub fn cycle_x_back(&mut self) {
        self.chart.cycle_x_back(&self.rows, Instant::now());
        self.status = format!("X axis: {}", self.chart.selection.x().axis_label());
    }

    /// Advance the Y axis to its next attribute.
    pub fn cycle_y(&mut self) {
        self.chart.cycle_y(&self.rows, Instant::now());
        self.status = format!("Y axis: {}", self.chart.selection.y().axis_label());
    }

    /// Step the Y axis back to its previous attribute.
    pub fn cycle_y_back(&mut self) {
        self.chart.cycle_y_back(&self.rows, Instant::now());
        self.status = format!("Y axis: {}", self.chart.selection.y().axis_label());
    }

    /// Handle a left click at the given screen cell.
    ///
    /// Clicks on an axis label select that attribute; clicks anywhere else
    /// do nothing.
    pub fn on_click(&mut self, column: u16, row: u16) {
        match self.layout.hit_label(column, row) {
            Some(ClickTarget::XLabel(attribute)) => self.select_x(attribute),
            Some(ClickTarget::YLabel(attribute)) => self.select_y(attribute),
            None => {},
        }
    }

    /// Handle mouse movement: hover a point to show its tooltip.
    pub fn on_mouse_move(&mut self, column: u16, row: u16) {
        self.chart.hovered = self.layout.point_at(column, row);
    }

    /// Hide the tooltip.
    pub fn clear_hover(&mut self) {
        self.chart.hovered = None;
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show key bindings in the status bar.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, x/X=cycle X axis, y/Y=cycle Y axis, click label=select, hover point=tooltip, T=theme"
                .to_string();
    }
}
