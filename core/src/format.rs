//! Display formatting for money, percentages, hours, months and FTE.
//!
//! en-US conventions: comma thousands grouping, period decimal point.
//! Money renders at whole units; everything here is presentation only
//! and never feeds back into the arithmetic.

use crate::constants::{currency_symbol, PAYBACK_DISPLAY_CAP_MONTHS};

/// Grouped number at a fixed decimal count: `1234567.89` at 0 decimals
/// is `"1,234,568"`.
pub fn number(value: f64, decimals: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Symbol-prefixed amount at whole units, sign ahead of the symbol:
/// `-1234.6` in USD is `"-$1,235"`. Unknown codes fall back to "$".
pub fn currency(amount: f64, code: &str) -> String {
    let symbol = currency_symbol(code);
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{}", number(amount.abs(), 0))
}

/// A 0-based fraction as a percentage with one decimal: `0.153` is
/// `"15.3%"`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn hours(hours: f64) -> String {
    format!("{hours:.1}h")
}

pub fn fte(fte: f64) -> String {
    format!("{fte:.2} FTE")
}

/// Payback display. Negative inputs render "N/A"; anything beyond the
/// cap renders "100+ months" so epsilon-floored paybacks stay readable.
pub fn months(months: f64) -> String {
    if months < 0.0 {
        return "N/A".to_string();
    }
    if months > PAYBACK_DISPLAY_CAP_MONTHS {
        return format!("{PAYBACK_DISPLAY_CAP_MONTHS:.0}+ months");
    }
    format!("{months:.1} months")
}
