use crate::entities::{sanitize_amount, Client, EventLog, TransactionKind};

use super::{matcher::ClientMatcher, repayment_usd};

/// Outstanding debt of a client in USD: the sum of matching debt-order totals
/// net of matching repayments, clamped at zero.
///
/// Over-repayment is silently absorbed rather than carried as credit; this is
/// documented behavior of the business, not an oversight.
pub(crate) fn client_debt(client: &Client, log: &EventLog) -> f64 {
    let matcher = ClientMatcher::new(client, &log.orders);

    let total_debt: f64 = log
        .orders
        .iter()
        .filter(|o| o.is_debt_order() && matcher.matches_order(o))
        .map(|o| sanitize_amount(o.total_usd))
        .sum();

    let total_repaid: f64 = log
        .transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::ClientPayment && matcher.matches_transaction(tx))
        .map(|tx| repayment_usd(tx.amount, tx.currency, tx.exchange_rate))
        .sum();

    (total_debt - total_repaid).max(0.0)
}
