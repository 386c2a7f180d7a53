//! Tooltip text for a hovered point.

use super::Attribute;
use crate::data::StateRow;

/// Build the tooltip label for a row under the current axis selection.
///
/// Three lines: the state identifier, then one `name: value` line per
/// active attribute with the unit applied.
pub fn format_tooltip(row: &StateRow, x_attribute: Attribute, y_attribute: Attribute) -> String {
    format!(
        "{} ({})\n{}: {}\n{}: {}",
        row.abbr,
        row.state,
        x_attribute.display_name(),
        x_attribute.format_value(x_attribute.value(row)),
        y_attribute.display_name(),
        y_attribute.format_value(y_attribute.value(row)),
    )
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
    fn percent_attributes_get_a_percent_suffix() {
        let text = format_tooltip(&sample_row(), Attribute::Poverty, Attribute::Smokes);
        assert!(text.contains("OH"));
        assert!(text.contains("14.5%"));
        assert!(text.contains("22%"));
    }

    #[test]
    fn income_gets_a_dollar_prefix_and_no_percent() {
        let text = format_tooltip(&sample_row(), Attribute::Poverty, Attribute::Healthcare);
        let with_income = format_tooltip(&sample_row(), Attribute::Income, Attribute::Healthcare);

        assert!(text.contains("14.5%"));
        assert!(with_income.contains("$45000"));
        assert!(!with_income.contains("45000%"));
    }

    #[test]
    fn lines_name_the_active_attributes() {
        let text = format_tooltip(&sample_row(), Attribute::Age, Attribute::Obesity);
        assert!(text.contains("Age: 36.1"));
        assert!(text.contains("Obese: 30%"));
    }
}
