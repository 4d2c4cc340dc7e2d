use iso_currency::Currency;

use crate::entities::{sanitize_amount, ExchangeRate, MAX_PLAUSIBLE_USD};

/// USD value of a repayment amount. UZS amounts are divided by the record's
/// snapshot rate when one is present and plausible; a UZS amount with no
/// usable rate is a legacy shape that was recorded in USD despite its
/// currency tag, and is taken as-is.
pub(crate) fn repayment_usd(
    amount: f64,
    currency: Currency,
    snapshot_rate: Option<f64>,
) -> f64 {
    let amount = sanitize_amount(amount);
    if currency != Currency::UZS {
        return amount;
    }
    match snapshot_rate.filter(|r| ExchangeRate::is_plausible(*r)) {
        Some(rate) => amount / rate,
        None => amount,
    }
}

/// Guard for values entering a USD-denominated sum: an implausibly large
/// magnitude is treated as an unconverted UZS amount and divided by the
/// active rate. Returns the corrected value and whether correction fired.
pub(crate) fn guard_usd_magnitude(value: f64, active_rate: f64) -> (f64, bool) {
    let value = sanitize_amount(value);
    if value.abs() > MAX_PLAUSIBLE_USD && active_rate > 0.0 {
        (value / active_rate, true)
    } else {
        (value, false)
    }
}
