//! Badge price formatting

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a price as a rounded whole amount with grouped thousands.
///
/// `1250.50` becomes `$1,251` with `symbol = "$"` and `separator = ","`.
/// Only the display is rounded; callers keep the exact decimal for totals.
pub fn format_rounded_price(amount: Decimal, symbol: &str, separator: &str) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}{symbol}{}", group_thousands(&digits, separator))
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
