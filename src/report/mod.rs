pub mod json;
pub mod map;
pub mod panel;
pub mod text;

/// Whole numbers print without a decimal part, as entered by the user.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
