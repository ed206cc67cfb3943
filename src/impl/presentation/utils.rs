use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Format a cash amount with the currency's standard number of decimal
/// places (ex. JPY = 0, USD = 2), thousands separators, and trailing
/// currency symbol.
///
/// Uses the en locale ('.' as decimal mark, i.e. 1,000.00) regardless of the
/// user's locale. Negative amounts keep their sign in front of the grouped
/// integer part.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = currency.exponent().unwrap_or(0) as usize;
    let sign = if amount < 0.0 { "-" } else { "" };
    // Round to the target precision before splitting, so carries (0.999 ->
    // 1.00) land in the integer part.
    let rendered = format!("{:.decimal_places$}", amount.abs());
    let (integer_part, fractional_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rendered.as_str(), ""),
    };
    let grouped = integer_part
        .parse::<i64>()
        .map(|v| v.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| integer_part.to_string());
    if fractional_part.is_empty() {
        format!("{}{} {}", sign, grouped, currency.symbol())
    } else {
        format!(
            "{}{}.{} {}",
            sign,
            grouped,
            fractional_part,
            currency.symbol()
        )
    }
}
