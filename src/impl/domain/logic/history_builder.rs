use std::collections::HashSet;

use crate::entities::{
    sanitize_amount, Client, EventLog, EventRef, LedgerEntry, LedgerEntryKind, TransactionKind,
};

use super::{matcher::ClientMatcher, repayment_usd};

/// Chronological debt ledger of a client with a running balance column.
///
/// The balance is accumulated in ascending date order and clamped at zero at
/// every step (the displayed ledger never goes negative, mirroring the
/// aggregate clamp); the finished list is returned reversed, most recent
/// first, which is the display contract the UI expects.
pub(crate) fn debt_history(client: &Client, log: &EventLog) -> Vec<LedgerEntry> {
    let matcher = ClientMatcher::new(client, &log.orders);
    let order_ids: HashSet<&str> = log.orders.iter().map(|o| o.id.0.as_str()).collect();

    let mut entries: Vec<LedgerEntry> = Vec::new();

    // Debt-creating sales.
    for order in log
        .orders
        .iter()
        .filter(|o| o.is_debt_order() && matcher.matches_order(o))
    {
        entries.push(LedgerEntry {
            record_id: order.id.0.clone(),
            date: order.date,
            kind: LedgerEntryKind::Order,
            description: order.customer_name.clone(),
            debt_change_usd: sanitize_amount(order.total_usd),
            balance_usd: 0.0,
        });
    }

    // Standalone obligations, suppressed when a real order already records
    // the same debt (same id, or the obligation resolves to an order that is
    // already in the ledger). Avoids counting one debt twice.
    let mut included_obligations: HashSet<&str> = HashSet::new();
    for obligation in log
        .transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::DebtObligation)
    {
        let directly_tied =
            matches!(&obligation.reference, EventRef::Client(id) if *id == client.id);
        let represented_by_order = order_ids.contains(obligation.id.0.as_str())
            || matches!(&obligation.reference, EventRef::Order(id) if order_ids.contains(id.0.as_str()));
        if !directly_tied || represented_by_order {
            continue;
        }
        included_obligations.insert(obligation.id.0.as_str());
        entries.push(LedgerEntry {
            record_id: obligation.id.0.clone(),
            date: obligation.date,
            kind: LedgerEntryKind::Order,
            description: obligation.description.clone(),
            debt_change_usd: repayment_usd(
                obligation.amount,
                obligation.currency,
                obligation.exchange_rate,
            ),
            balance_usd: 0.0,
        });
    }

    // Repayments: matched per the client matcher, or aimed at one of the
    // obligations included above.
    for tx in log.transactions.iter().filter(|tx| {
        tx.kind == TransactionKind::ClientPayment
            && (matcher.matches_transaction(tx)
                || matches!(&tx.reference, EventRef::Obligation(id) if included_obligations.contains(id.0.as_str())))
    }) {
        entries.push(LedgerEntry {
            record_id: tx.id.0.clone(),
            date: tx.date,
            kind: LedgerEntryKind::Repayment,
            description: tx.description.clone(),
            debt_change_usd: -repayment_usd(tx.amount, tx.currency, tx.exchange_rate),
            balance_usd: 0.0,
        });
    }

    // Stable sort keeps same-day debt entries ahead of their repayments
    // (debt rows are pushed first).
    entries.sort_by_key(|e| e.date);

    let mut balance = 0.0;
    for entry in entries.iter_mut() {
        balance = (balance + entry.debt_change_usd).max(0.0);
        entry.balance_usd = balance;
    }

    entries.reverse();
    entries
}
