//! The attribute catalog.
//!
//! One declarative table drives axis labels, tooltip names, and value
//! formatting for all six metrics, so every consumer renders an attribute
//! the same way.

use crate::data::StateRow;

/// Measurement unit of an attribute, used for value formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Percentage of population; values get a `%` suffix.
    Percent,
    /// U.S. dollars; values get a `$` prefix.
    Dollars,
    /// Years; values are shown plain.
    Years,
}

/// One of the six numeric dataset attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Share of population in poverty.
    Poverty,
    /// Median age.
    Age,
    /// Median household income.
    Income,
    /// Share of population lacking healthcare.
    Healthcare,
    /// Share of population that smokes.
    Smokes,
    /// Share of population that is obese.
    Obesity,
}

impl Attribute {
    /// Attributes selectable on the X axis.
    pub const X_AXIS: [Attribute; 3] = [Attribute::Poverty, Attribute::Age, Attribute::Income];

    /// Attributes selectable on the Y axis.
    pub const Y_AXIS: [Attribute; 3] =
        [Attribute::Healthcare, Attribute::Smokes, Attribute::Obesity];

    /// Dataset column name.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Poverty => "poverty",
            Attribute::Age => "age",
            Attribute::Income => "income",
            Attribute::Healthcare => "healthcare",
            Attribute::Smokes => "smokes",
            Attribute::Obesity => "obesity",
        }
    }

    /// Full axis label text.
    pub fn axis_label(self) -> &'static str {
        match self {
            Attribute::Poverty => "In Poverty (%)",
            Attribute::Age => "Age (Median)",
            Attribute::Income => "Household Income (Median)",
            Attribute::Healthcare => "Lacks Healthcare (%)",
            Attribute::Smokes => "Smokes (%)",
            Attribute::Obesity => "Obese (%)",
        }
    }

    /// Short name used in tooltips and the status bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Attribute::Poverty => "Poverty",
            Attribute::Age => "Age",
            Attribute::Income => "Income",
            Attribute::Healthcare => "Lacks Healthcare",
            Attribute::Smokes => "Smokes",
            Attribute::Obesity => "Obese",
        }
    }

    /// Measurement unit.
    pub fn unit(self) -> Unit {
        match self {
            Attribute::Poverty
            | Attribute::Healthcare
            | Attribute::Smokes
            | Attribute::Obesity => Unit::Percent,
            Attribute::Income => Unit::Dollars,
            Attribute::Age => Unit::Years,
        }
    }

    /// Read this attribute's value from a row.
    pub fn value(self, row: &StateRow) -> f64 {
        match self {
            Attribute::Poverty => row.poverty,
            Attribute::Age => row.age,
            Attribute::Income => row.income,
            Attribute::Healthcare => row.healthcare,
            Attribute::Smokes => row.smokes,
            Attribute::Obesity => row.obesity,
        }
    }

    /// Format a value of this attribute with its unit.
    pub fn format_value(self, value: f64) -> String {
        match self.unit() {
            Unit::Percent => format!("{value}%"),
            Unit::Dollars => format!("${value}"),
            Unit::Years => format!("{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> StateRow {
        StateRow {
            state: "Ohio".to_string(),
            abbr: "OH".to_string(),
            poverty: 14.5,
            age: 36.1,
            income: 45000.0,
            healthcare: 20.0,
            obesity: 30.0,
            smokes: 22.0,
        }
    }

    #[test]
    fn axis_sets_are_disjoint_and_fixed() {
        assert_eq!(
            Attribute::X_AXIS,
            [Attribute::Poverty, Attribute::Age, Attribute::Income]
        );
        assert_eq!(
            Attribute::Y_AXIS,
            [Attribute::Healthcare, Attribute::Smokes, Attribute::Obesity]
        );
        for x in Attribute::X_AXIS {
            assert!(!Attribute::Y_AXIS.contains(&x));
        }
    }

    #[test]
    fn values_come_from_the_matching_column() {
        let row = sample_row();
        assert_eq!(Attribute::Poverty.value(&row), 14.5);
        assert_eq!(Attribute::Income.value(&row), 45000.0);
        assert_eq!(Attribute::Smokes.value(&row), 22.0);
    }

    #[test]
    fn formatting_follows_the_unit_table() {
        assert_eq!(Attribute::Poverty.format_value(14.5), "14.5%");
        assert_eq!(Attribute::Smokes.format_value(22.0), "22%");
        assert_eq!(Attribute::Income.format_value(45000.0), "$45000");
        assert_eq!(Attribute::Age.format_value(38.5), "38.5");
    }
}
