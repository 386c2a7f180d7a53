//! One dataset row per U.S. state.

use serde::Deserialize;

/// Demographic and health metrics for a single state.
///
/// Rows are deserialized once at load time and never mutated afterwards;
/// the whole dataset is shared read-only by every render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateRow {
    /// Full state name, e.g. "Ohio".
    pub state: String,
    /// Two-letter abbreviation, e.g. "OH".
    pub abbr: String,
    /// Share of population in poverty (%).
    pub poverty: f64,
    /// Median age (years).
    pub age: f64,
    /// Median household income (dollars).
    pub income: f64,
    /// Share of population lacking healthcare (%).
    pub healthcare: f64,
    /// Share of population that is obese (%).
    pub obesity: f64,
    /// Share of population that smokes (%).
    pub smokes: f64,
}
