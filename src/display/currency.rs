//! Currency formatting in the `en-IN` style
//!
//! Amounts get a symbol prefix, Indian digit grouping (`12,34,567`) and no
//! fractional digits when the amount is whole. Fractions keep up to two
//! digits with trailing zeros dropped (`₹1,000.5`).

use crate::models::Money;

/// Symbol used as a prefix for a currency code
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.trim().to_ascii_uppercase().as_str() {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Group the digits of a non-negative integer the Indian way
///
/// The last three digits form one group; everything before is grouped in
/// pairs.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format an amount for display; a missing amount renders as zero
pub fn format_currency(amount: Option<Money>, currency: &str) -> String {
    let amount = amount.unwrap_or_default();
    let minor = amount.minor().unsigned_abs();

    let mut number = group_indian(minor / 100);
    let fraction = minor % 100;
    if fraction != 0 {
        let digits = format!("{:02}", fraction);
        number.push('.');
        number.push_str(digits.trim_end_matches('0'));
    }

    let sign = if amount.is_negative() { "-" } else { "" };
    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{} {}", sign, currency.trim().to_ascii_uppercase(), number),
    }
}

/// Shorthand for a known amount
pub fn format_money(amount: Money, currency: &str) -> String {
    format_currency(Some(amount), currency)
}
