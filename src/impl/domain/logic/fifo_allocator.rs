use std::collections::HashSet;

use chrono::NaiveDate;

use crate::entities::{
    sanitize_amount, AppliedPayment, Client, EventLog, EventRef, OpenDebt, OpenDebtKind,
    PaymentSource, Transaction, TransactionKind, DEBT_EPSILON_USD,
};

use super::{debt_aggregator, matcher::ClientMatcher, repayment_usd};

fn tx_usd(tx: &Transaction) -> f64 {
    repayment_usd(tx.amount, tx.currency, tx.exchange_rate)
}

fn direct_payments(
    transactions: &[Transaction],
    is_direct: impl Fn(&EventRef) -> bool,
) -> (Vec<AppliedPayment>, f64) {
    let mut applied = Vec::new();
    let mut total = 0.0;
    for tx in transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::ClientPayment && is_direct(&tx.reference))
    {
        let amount_usd = tx_usd(tx);
        total += amount_usd;
        applied.push(AppliedPayment {
            source: PaymentSource::Direct(tx.id.clone()),
            date: Some(tx.date),
            amount_usd,
        });
    }
    (applied, total)
}

/// Open debt positions of a client, oldest first, after FIFO allocation of
/// the client's unattributed repayments.
///
/// Directly-referenced repayments are settled against their own record
/// first; whatever the client paid without naming a record forms a pool that
/// is walked over the remaining positions in ascending date order. The walk
/// is a pure fold carrying the pool accumulator, so the allocation is
/// idempotent, and a new unrelated repayment can never disturb positions that
/// were already fully matched.
pub(crate) fn open_debts(client: &Client, log: &EventLog) -> Vec<OpenDebt> {
    let matcher = ClientMatcher::new(client, &log.orders);
    let order_ids: HashSet<&str> = log.orders.iter().map(|o| o.id.0.as_str()).collect();

    let mut positions: Vec<OpenDebt> = Vec::new();

    // Debt orders, net of repayments referencing them directly.
    for order in log
        .orders
        .iter()
        .filter(|o| o.is_debt_order() && matcher.matches_order(o))
    {
        let (payments, repaid_usd) = direct_payments(&log.transactions, |r| {
            matches!(r, EventRef::Order(id) if *id == order.id)
        });
        let total_usd = sanitize_amount(order.total_usd);
        let debt_remaining_usd = total_usd - repaid_usd;
        if debt_remaining_usd > DEBT_EPSILON_USD {
            positions.push(OpenDebt {
                id: order.id.0.clone(),
                kind: OpenDebtKind::Order,
                date: order.date,
                total_usd,
                paid_usd: repaid_usd,
                debt_remaining_usd,
                payments,
            });
        }
    }

    // Standalone debt obligations tied to the client, unless a real order
    // already represents them.
    for obligation in log.transactions.iter().filter(|tx| {
        tx.kind == TransactionKind::DebtObligation
            && matches!(&tx.reference, EventRef::Client(id) if *id == client.id)
            && !order_ids.contains(tx.id.0.as_str())
    }) {
        let (payments, repaid_usd) = direct_payments(&log.transactions, |r| {
            matches!(r, EventRef::Obligation(id) if *id == obligation.id)
        });
        let total_usd = tx_usd(obligation);
        let debt_remaining_usd = total_usd - repaid_usd;
        if debt_remaining_usd > DEBT_EPSILON_USD {
            positions.push(OpenDebt {
                id: obligation.id.0.clone(),
                kind: OpenDebtKind::Obligation,
                date: obligation.date,
                total_usd,
                paid_usd: repaid_usd,
                debt_remaining_usd,
                payments,
            });
        }
    }

    // FIFO: oldest debt is served first. Id as tie-break keeps the
    // allocation deterministic for same-day records.
    positions.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    // Repayments naming only the client form the unattributed pool.
    let pool: f64 = log
        .transactions
        .iter()
        .filter(|tx| {
            tx.kind == TransactionKind::ClientPayment
                && matches!(&tx.reference, EventRef::Client(id) if *id == client.id)
        })
        .map(tx_usd)
        .sum();

    let (mut allocated, _leftover) = positions.into_iter().fold(
        (Vec::new(), pool),
        |(mut acc, pool), mut position| {
            let applied = pool.min(position.debt_remaining_usd).max(0.0);
            if applied > 0.0 {
                position.paid_usd += applied;
                position.debt_remaining_usd -= applied;
                position.payments.push(AppliedPayment {
                    source: PaymentSource::Pool,
                    date: None,
                    amount_usd: applied,
                });
            }
            acc.push(position);
            (acc, pool - applied)
        },
    );

    allocated.retain(|p| p.debt_remaining_usd > DEBT_EPSILON_USD);

    // The aggregate can report debt even when no open record remains (for
    // example repayments mis-referenced against already-settled orders).
    // Surface it as a single general-debt position so the repayment UI
    // always has a target.
    if allocated.is_empty() {
        let residual = debt_aggregator::client_debt(client, log);
        if residual > DEBT_EPSILON_USD {
            allocated.push(general_debt_position(client, log, &matcher, residual));
        }
    }

    allocated
}

fn general_debt_position(
    client: &Client,
    log: &EventLog,
    matcher: &ClientMatcher,
    residual_usd: f64,
) -> OpenDebt {
    let latest_event_date = log
        .orders
        .iter()
        .filter(|o| o.is_debt_order() && matcher.matches_order(o))
        .map(|o| o.date)
        .chain(
            log.transactions
                .iter()
                .filter(|tx| matcher.matches_transaction(tx))
                .map(|tx| tx.date),
        )
        .max()
        .unwrap_or(NaiveDate::MIN);
    OpenDebt {
        id: client.id.0.clone(),
        kind: OpenDebtKind::GeneralDebt,
        date: latest_event_date,
        total_usd: residual_usd,
        paid_usd: 0.0,
        debt_remaining_usd: residual_usd,
        payments: vec![],
    }
}
