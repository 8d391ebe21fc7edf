//! Display formatting for prices and market figures.
//!
//! These are pure helpers for consumers that render store state. The
//! price formatter picks a representation by magnitude so that every
//! output stays a bounded-length human string, from multi-million caps
//! down to sub-micro token prices.

/// Rendered for zero, negative, and non-numeric input.
const FALLBACK: &str = "$0.00";

/// Format a USD price into a bounded-length display string.
///
/// - `>= 1_000_000` → abbreviated millions: `"$1.50M"`
/// - `>= 1_000`     → abbreviated thousands: `"$12.35K"`
/// - `[1, 1000)`    → two decimals: `"$42.00"`
/// - `[0.01, 1)`    → four decimals: `"$0.4200"`
/// - `[1e-6, 0.01)` → adaptive precision: the leading zeros plus at
///   least two significant digits, between 6 and 8 decimal places
/// - `< 1e-6`       → exponential with two mantissa decimals: `"$3.20e-7"`
/// - zero, negative, or non-finite → `"$0.00"`
pub fn format_price(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return FALLBACK.to_string();
    }

    if value >= 1_000_000.0 {
        return format!("${:.2}M", value / 1_000_000.0);
    }

    if value >= 1_000.0 {
        return format!("${:.2}K", value / 1_000.0);
    }

    if value >= 1.0 {
        return format!("${value:.2}");
    }

    if value < 0.000_001 {
        return format!("${}", to_exponential_2(value));
    }

    if value < 0.01 {
        // Leading zeros after the decimal point decide how many decimals
        // keep at least two significant digits visible.
        let decimals = (leading_decimal_zeros(value) + 2).clamp(6, 8);
        return format!("${value:.decimals$}");
    }

    format!("${value:.4}")
}

/// Signed 24h change with an explicit `+` on gains: `"+1.25%"`, `"-0.40%"`.
pub fn format_change_24h(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Thousands-separated integer form, used for market caps: `"1,234,567"`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let formatted = format!("{value:.0}");
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", &formatted[..]),
    };
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");
    format!("{sign}{grouped}")
}

/// Count zeros between the decimal point and the first significant
/// digit. Only meaningful for values in (0, 0.01).
fn leading_decimal_zeros(value: f64) -> usize {
    let rendered = format!("{value:.10}");
    rendered
        .split('.')
        .nth(1)
        .map(|frac| frac.bytes().take_while(|b| *b == b'0').count())
        .unwrap_or(0)
}

/// Two-decimal exponential form with the mantissa kept in [1, 10):
/// `3.20e-7`, `1.00e-6`.
fn to_exponential_2(value: f64) -> String {
    let mut exponent = value.log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);
    // Rounding the mantissa to two decimals can push it to 10.00;
    // renormalize so the mantissa stays in [1, 10).
    if format!("{mantissa:.2}") == "10.00" {
        mantissa /= 10.0;
        exponent += 1;
    }
    if exponent >= 0 {
        format!("{mantissa:.2}e+{exponent}")
    } else {
        format!("{mantissa:.2}e{exponent}")
    }
}
