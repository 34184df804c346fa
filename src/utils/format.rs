//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Format a USD amount: two decimals, thousand separators, `$` prefix.
///
/// Non-finite amounts render as `$0.00`. Negative amounts carry the sign
/// before the `$`, like `-$12.50`.
pub fn format_money(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let negative = amount < 0.0;
    let cents = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match cents.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (cents, "00".to_string()),
    };
    let grouped = group_thousands(&int_part);
    if negative {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

/// Format a 0..=1 fraction as a percentage with two decimals, e.g. `25.00%`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().collect();
    let len = chars.len();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_with_thousand_separators() {
        assert_eq!(format_money(1000.0), "$1,000.00");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(700.0), "$700.00");
    }

    #[test]
    fn money_places_sign_before_symbol() {
        assert_eq!(format_money(-12.5), "-$12.50");
        assert_eq!(format_money(-1000.0), "-$1,000.00");
    }

    #[test]
    fn money_treats_non_finite_as_zero() {
        assert_eq!(format_money(f64::NAN), "$0.00");
        assert_eq!(format_money(f64::INFINITY), "$0.00");
        assert_eq!(format_money(f64::NEG_INFINITY), "$0.00");
    }

    #[test]
    fn percent_formats_fraction() {
        assert_eq!(format_percent(0.25), "25.00%");
        assert_eq!(format_percent(0.05), "5.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
