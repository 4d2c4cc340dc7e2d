use iso_currency::Currency;

use crate::entities::{
    sanitize_amount, settlement_account, BalanceReport, EventLog, ExchangeRate, SettlementAccount,
    TransactionKind,
};

use super::guard_usd_magnitude;

/// Amount of a money movement expressed in the target bucket's own currency.
/// UZS-denominated buckets multiply USD amounts by the effective rate; the
/// USD bucket divides UZS amounts, and additionally guards against
/// unit-mismatch artifacts (a UZS figure stored in a USD field).
fn bucket_amount(
    account: SettlementAccount,
    amount: f64,
    currency: Currency,
    snapshot_rate: Option<f64>,
    default_rate: &ExchangeRate,
    record_label: &str,
    notes: &mut Vec<String>,
) -> f64 {
    let amount = sanitize_amount(amount);
    let rate = default_rate.effective(snapshot_rate);
    match account.currency() {
        Currency::UZS => {
            if currency == Currency::UZS {
                amount
            } else {
                amount * rate
            }
        }
        _ => {
            let usd = if currency == Currency::UZS {
                if rate > 0.0 {
                    amount / rate
                } else {
                    amount
                }
            } else {
                amount
            };
            let (guarded, corrected) = guard_usd_magnitude(usd, rate);
            if corrected {
                notes.push(format!(
                    "{}: implausibly large USD amount ({:.0}); treated as UZS and divided by the active rate",
                    record_label, usd
                ));
            }
            guarded
        }
    }
}

/// Aggregate every order, repayment, expense and supplier payment into the
/// four settlement accounts. Each bucket reports income, outflow and net
/// balance in its own currency; there is no cross-bucket netting.
pub(crate) fn account_balances(log: &EventLog, default_rate: &ExchangeRate) -> BalanceReport {
    let mut report = BalanceReport::default();
    let mut notes = Vec::new();

    // Sales income. Orders carry both USD and UZS totals; the UZS total is
    // preferred for UZS-settled rails, falling back to converting the USD
    // total with the order's own snapshot rate.
    for order in &log.orders {
        let account = settlement_account(order.payment_method, order.payment_currency);
        let amount = match account.currency() {
            Currency::UZS if sanitize_amount(order.total_uzs) > 0.0 => {
                sanitize_amount(order.total_uzs)
            }
            _ => bucket_amount(
                account,
                order.total_usd,
                Currency::USD,
                order.exchange_rate,
                default_rate,
                &format!("order {}", order.id),
                &mut notes,
            ),
        };
        report.bucket_mut(account).income += amount;
    }

    // Client repayments are income to the account they arrived on.
    for tx in &log.transactions {
        let (account, outflow) = match tx.kind {
            TransactionKind::ClientPayment => (settlement_account(tx.method, tx.currency), false),
            TransactionKind::SupplierPayment => {
                (settlement_account(tx.method, tx.currency), true)
            }
            _ => continue,
        };
        let amount = bucket_amount(
            account,
            tx.amount,
            tx.currency,
            tx.exchange_rate,
            default_rate,
            &format!("transaction {}", tx.id),
            &mut notes,
        );
        if outflow {
            report.bucket_mut(account).outflow += amount;
        } else {
            report.bucket_mut(account).income += amount;
        }
    }

    for expense in &log.expenses {
        let account = settlement_account(expense.method, expense.currency);
        let amount = bucket_amount(
            account,
            expense.amount,
            expense.currency,
            expense.exchange_rate,
            default_rate,
            &format!("expense {}", expense.id),
            &mut notes,
        );
        report.bucket_mut(account).outflow += amount;
    }

    report.notes = notes;
    report
}
