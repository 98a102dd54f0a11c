//! # Shared Formatting Functions
//!
//! Pure display helpers used by the dashboard's result panel and cards.
//!
//! ## Number Formatting
//!
//! - [`format_number`] - Magnitude-aware number formatting (`1.23M`, `1,234.50`, `0.004200`)
//! - [`format_rate`] - Rate formatting with precision chosen by magnitude
//! - [`format_money`] - Currency symbol followed by a two-decimal amount
//!
//! ## Change Indicators
//!
//! - [`percent_change`] - Relative change between two optional rates
//! - [`format_change`] - Arrow and percentage, or `N/A`
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_number, format_change, percent_change};
//!
//! assert_eq!(format_number(1234.5, 2), "1,234.50");
//! assert_eq!(format_change(percent_change(Some(110.0), Some(100.0))), "▲ 10.00%");
//! assert_eq!(format_change(percent_change(Some(110.0), None)), "N/A");
//! ```

use crate::currency::{lookup, CurrencyCode};

/// Placeholder shown for values that cannot be displayed.
pub const PLACEHOLDER: &str = "--";

/// Placeholder shown when historical data is unavailable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a number for display.
///
/// - non-finite values render as `--`
/// - values at or above one million render as `x.xxM`
/// - values at or above one thousand get thousands separators
/// - values below 0.01 keep six decimals so small rates stay readable
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        return format!("{:.2}M", value / 1_000_000.0);
    }
    if magnitude >= 1_000.0 {
        return group_thousands(&format!("{:.*}", decimals, value));
    }
    if magnitude < 0.01 {
        return format!("{:.6}", value);
    }
    format!("{:.*}", decimals, value)
}

/// Format an exchange rate: six decimals below 1, four otherwise.
pub fn format_rate(rate: f64) -> String {
    let decimals = if rate.abs() < 1.0 { 6 } else { 4 };
    format_number(rate, decimals)
}

/// Format an amount with the currency's symbol, e.g. `€1,050.00`.
pub fn format_money(amount: f64, code: &CurrencyCode) -> String {
    let meta = lookup(code);
    format!("{}{}", meta.symbol, format_number(amount, 2))
}

/// Relative change from `past` to `current`, in percent.
///
/// Returns `None` when either rate is missing or `past` is zero.
pub fn percent_change(current: Option<f64>, past: Option<f64>) -> Option<f64> {
    match (current, past) {
        (Some(now), Some(then)) if then != 0.0 => Some((now - then) / then * 100.0),
        _ => None,
    }
}

/// Render a change as `▲ 1.25%` / `▼ 0.40%`, or `N/A`.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) if c.is_finite() => {
            let arrow = if c >= 0.0 { "▲" } else { "▼" };
            format!("{} {:.2}%", arrow, c.abs())
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_ranges() {
        assert_eq!(format_number(2_500_000.0, 2), "2.50M");
        assert_eq!(format_number(1234.5, 2), "1,234.50");
        assert_eq!(format_number(-98765.4321, 2), "-98,765.43");
        assert_eq!(format_number(42.0, 2), "42.00");
        assert_eq!(format_number(0.0042, 2), "0.004200");
        assert_eq!(format_number(f64::NAN, 2), "--");
    }

    #[test]
    fn test_format_rate_precision() {
        assert_eq!(format_rate(0.92), "0.920000");
        assert_eq!(format_rate(32.2145), "32.2145");
    }

    #[test]
    fn test_format_money_uses_symbol() {
        assert_eq!(format_money(1050.0, &CurrencyCode::from("EUR")), "€1,050.00");
        assert_eq!(format_money(5.0, &CurrencyCode::from("XAU")), "5.00");
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(Some(110.0), Some(100.0)), Some(10.0));
        assert_eq!(percent_change(None, Some(100.0)), None);
        assert_eq!(percent_change(Some(1.0), Some(0.0)), None);
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some(-0.4)), "▼ 0.40%");
        assert_eq!(format_change(Some(0.0)), "▲ 0.00%");
        assert_eq!(format_change(None), "N/A");
    }
}
