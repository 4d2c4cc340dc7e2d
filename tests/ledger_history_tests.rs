mod common;

use common::*;
use iso_currency::Currency;
use metal_ledger::entities::{
    client_id, order_id, EventRef, LedgerEntryKind, PaymentMethod, TransactionKind,
};

#[test]
fn running_balance_is_clamped_and_listed_most_recent_first() {
    let log = log_of(
        vec![client("c1", "Alisher")],
        vec![debt_order("o1", "c1", date(2024, 1, 1), 100.0)],
        vec![
            usd_payment("t1", date(2024, 1, 5), 40.0, EventRef::Order(order_id("o1"))),
            // Overshoots the remaining debt; the displayed balance stops at zero.
            usd_payment("t2", date(2024, 1, 10), 80.0, EventRef::Order(order_id("o1"))),
        ],
    );

    let s = statement(&log, "c1");
    assert_eq!(s.history.len(), 3);

    assert_eq!(s.history[0].record_id, "t2");
    assert_usd_eq(s.history[0].balance_usd, 0.0);
    assert_eq!(s.history[1].record_id, "t1");
    assert_usd_eq(s.history[1].balance_usd, 60.0);
    assert_eq!(s.history[2].record_id, "o1");
    assert_usd_eq(s.history[2].balance_usd, 100.0);

    assert!(s.history.iter().all(|e| e.balance_usd >= 0.0));
    assert!(s.history.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn same_day_sale_is_booked_before_its_repayment() {
    let log = log_of(
        vec![client("c1", "Alisher")],
        vec![debt_order("o1", "c1", date(2024, 1, 5), 100.0)],
        vec![usd_payment(
            "t1",
            date(2024, 1, 5),
            100.0,
            EventRef::Order(order_id("o1")),
        )],
    );

    let s = statement(&log, "c1");
    assert_eq!(s.history.len(), 2);
    // Most recent first: the repayment sits on top with the settled balance.
    assert_eq!(s.history[0].kind, LedgerEntryKind::Repayment);
    assert_usd_eq(s.history[0].balance_usd, 0.0);
    assert_eq!(s.history[1].kind, LedgerEntryKind::Order);
    assert_usd_eq(s.history[1].balance_usd, 100.0);
}

#[test]
fn obligation_suppressed_when_an_order_records_the_same_debt() {
    let log = log_of(
        vec![client("c1", "Alisher")],
        vec![debt_order("d1", "c1", date(2024, 1, 1), 100.0)],
        vec![transaction(
            "d1",
            date(2024, 1, 1),
            TransactionKind::DebtObligation,
            100.0,
            Currency::USD,
            PaymentMethod::Cash,
            EventRef::Client(client_id("c1")),
            None,
        )],
    );

    let s = statement(&log, "c1");
    let debt_entries = s
        .history
        .iter()
        .filter(|e| e.kind == LedgerEntryKind::Order)
        .count();
    assert_eq!(debt_entries, 1);
    assert_usd_eq(s.history[0].balance_usd, 100.0);
}

#[test]
fn standalone_obligation_and_its_repayments_appear_in_the_ledger() {
    let log = log_of(
        vec![client("c1", "Alisher")],
        vec![],
        vec![
            transaction(
                "ob1",
                date(2024, 1, 1),
                TransactionKind::DebtObligation,
                40.0,
                Currency::USD,
                PaymentMethod::Cash,
                EventRef::Client(client_id("c1")),
                None,
            ),
            usd_payment(
                "t1",
                date(2024, 1, 5),
                15.0,
                EventRef::Obligation(metal_ledger::entities::transaction_id("ob1")),
            ),
        ],
    );

    let s = statement(&log, "c1");
    assert_eq!(s.history.len(), 2);
    assert_eq!(s.history[0].record_id, "t1");
    assert_usd_eq(s.history[0].balance_usd, 25.0);
    assert_eq!(s.history[1].record_id, "ob1");
    assert_usd_eq(s.history[1].balance_usd, 40.0);
}

#[test]
fn printed_statement_carries_the_three_sections() {
    let log = log_of(
        vec![client("c1", "Alisher")],
        vec![debt_order("o1", "c1", date(2024, 1, 1), 100.0)],
        vec![usd_payment(
            "t1",
            date(2024, 1, 5),
            40.0,
            EventRef::Client(client_id("c1")),
        )],
    );

    let (_, printed) = metal_ledger::util::MetalLedgerUtil::new()
        .client_statement(&log, "c1")
        .unwrap();
    assert!(printed.contains("; --- Client"));
    assert!(printed.contains("; --- Open debts (oldest first)"));
    assert!(printed.contains("; --- Debt ledger (most recent first)"));
    assert!(printed.contains("Alisher"));
    assert!(printed.contains("(allocated from pool)"));
}
