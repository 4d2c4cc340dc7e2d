use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number of decimal places for the given currency
/// (ex. UZS = 2, but sums are large enough that they print as whole soms).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format a cash amount with currency symbol, correct number of decimal
/// places and thousands separators.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let amount_integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        return format!("{} {}", amount_integer_part, currency.symbol());
    }
    let amount_fractional_part = format!("{:.decimal_places$}", amount.fract().abs())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}.{:0decimal_places$} {}",
        amount_integer_part, amount_fractional_part, currency.symbol(),
    )
}
