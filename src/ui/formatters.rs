//! Shared formatting utilities for UI components.

/// Format an axis tick label with smart precision.
pub(crate) fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e6).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_follows_magnitude() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(0.123), "0.12");
        assert_eq!(format_axis_label(8.0), "8.0");
        assert_eq!(format_axis_label(36.55), "36.6");
        assert_eq!(format_axis_label(45000.0), "45000");
    }

    #[test]
    fn extremes_fall_back_to_scientific_or_placeholder() {
        assert_eq!(format_axis_label(1.5e7), "1.5e7");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }
}
