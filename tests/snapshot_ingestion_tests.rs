mod common;

use common::*;
use futures::executor::block_on;
use iso_currency::Currency;
use metal_ledger::entities::{
    client_id, order_id, EventRef, PaymentMethod, PaymentStatus, TransactionKind,
};
use metal_ledger::util::MetalLedgerUtil;

const SNAPSHOT: &str = r#"{
    "clients": [
        {"id": "c1", "name": "Alisher", "totalDebt": "1,000", "totalPurchases": 2500}
    ],
    "orders": [
        {
            "id": "o1",
            "date": "2024-01-01",
            "customerName": "Alisher",
            "clientId": "c1",
            "totalAmount": 100,
            "totalAmountUZS": 1250000,
            "amountPaid": 0,
            "paymentMethod": "debt",
            "paymentStatus": "unpaid",
            "paymentCurrency": "USD",
            "exchangeRate": 12500,
            "items": [{"name": "Rebar 12mm", "quantity": 40, "unitPrice": 2.5}]
        }
    ],
    "transactions": [
        {
            "id": "t1",
            "date": 1704672000000,
            "type": "client_payment",
            "amount": 40,
            "currency": "USD",
            "method": "cash",
            "description": "оплата заказа o1"
        }
    ],
    "expenses": [
        {"id": "e1", "date": "2024-01-03", "amount": 50000, "currency": "UZS", "method": "cash", "description": "fuel"}
    ]
}"#;

#[test]
fn json_snapshot_feeds_the_whole_pipeline() {
    let util = MetalLedgerUtil::new();
    let log = block_on(util.from_string(SNAPSHOT)).unwrap();

    assert_eq!(log.clients.len(), 1);
    assert_usd_eq(log.clients[0].cached_total_debt, 1000.0);

    assert_eq!(log.orders.len(), 1);
    let order = &log.orders[0];
    assert_eq!(order.id, order_id("o1"));
    assert_eq!(order.date, date(2024, 1, 1));
    assert_eq!(order.client_id, Some(client_id("c1")));
    assert_usd_eq(order.total_uzs, 1_250_000.0);
    assert_eq!(order.payment_method, PaymentMethod::Debt);
    assert_eq!(order.payment_status, PaymentStatus::Unpaid);
    assert_eq!(order.items.len(), 1);
    assert_usd_eq(order.items[0].quantity, 40.0);

    // Epoch-millisecond date, and an order reference recovered from the
    // free-text description (the row carries no relatedId).
    let tx = &log.transactions[0];
    assert_eq!(tx.date, date(2024, 1, 8));
    assert_eq!(tx.reference, EventRef::Order(order_id("o1")));

    assert_eq!(log.expenses.len(), 1);
    assert_eq!(log.expenses[0].currency, Currency::UZS);

    let s = statement(&log, "c1");
    assert_usd_eq(s.total_debt_usd, 60.0);
    assert_eq!(s.open_debts.len(), 1);
    assert_usd_eq(s.open_debts[0].debt_remaining_usd, 60.0);
}

#[test]
fn absent_and_null_fields_coerce_to_defaults() {
    let snapshot = r#"{
        "orders": [
            {"id": "o1", "date": "2024-01-01", "totalAmount": null}
        ],
        "transactions": [
            {"id": "t1", "date": "2024-01-02", "type": "client_payment"}
        ]
    }"#;

    let util = MetalLedgerUtil::new();
    let log = block_on(util.from_string(snapshot)).unwrap();

    let order = &log.orders[0];
    assert_usd_eq(order.total_usd, 0.0);
    assert_eq!(order.payment_method, PaymentMethod::Cash);
    assert_eq!(order.payment_status, PaymentStatus::Paid);
    assert_eq!(order.payment_currency, Currency::USD);
    assert_eq!(order.exchange_rate, None);

    let tx = &log.transactions[0];
    assert_usd_eq(tx.amount, 0.0);
    assert_eq!(tx.reference, EventRef::None);
}

#[test]
fn related_id_resolves_against_known_record_ids() {
    let snapshot = r#"{
        "clients": [{"id": "c1", "name": "Alisher"}],
        "orders": [
            {"id": "o1", "date": "2024-01-01", "clientId": "c1", "totalAmount": 100, "paymentMethod": "debt", "paymentStatus": "unpaid"}
        ],
        "transactions": [
            {"id": "ob1", "date": "2024-01-02", "type": "debt_obligation", "amount": 40, "relatedId": "c1"},
            {"id": "t1", "date": "2024-01-03", "type": "client_payment", "amount": 10, "relatedId": "o1"},
            {"id": "t2", "date": "2024-01-04", "type": "client_payment", "amount": 5, "relatedId": "ob1"},
            {"id": "t3", "date": "2024-01-05", "type": "client_payment", "amount": 5, "relatedId": "c1"},
            {"id": "t4", "date": "2024-01-06", "type": "client_payment", "amount": 5, "relatedId": "nonsense"}
        ]
    }"#;

    let util = MetalLedgerUtil::new();
    let log = block_on(util.from_string(snapshot)).unwrap();

    let reference = |id: &str| {
        log.transactions
            .iter()
            .find(|tx| tx.id.0 == id)
            .unwrap()
            .reference
            .clone()
    };
    assert_eq!(reference("ob1"), EventRef::Client(client_id("c1")));
    assert_eq!(reference("t1"), EventRef::Order(order_id("o1")));
    assert_eq!(
        reference("t2"),
        EventRef::Obligation(metal_ledger::entities::transaction_id("ob1"))
    );
    assert_eq!(reference("t3"), EventRef::Client(client_id("c1")));
    assert_eq!(reference("t4"), EventRef::None);
}

#[test]
fn unknown_transaction_kind_fails_the_ingest() {
    let snapshot = r#"{
        "transactions": [
            {"id": "t1", "date": "2024-01-02", "type": "weird"}
        ]
    }"#;

    let util = MetalLedgerUtil::new();
    assert!(block_on(util.from_string(snapshot)).is_err());
}

#[test]
fn malformed_json_fails_the_ingest() {
    let util = MetalLedgerUtil::new();
    assert!(block_on(util.from_string("not json")).is_err());
}

const ORDERS_CSV: &str = r#"id,date,customer,client_id,total_usd,total_uzs,paid_usd,method,status,currency,rate,items
o1,2024-01-01,Alisher,c1,100,1250000,0,debt,unpaid,USD,12500,"(name: ""Rebar 12mm"", quantity: 40.0, unit_price: 2.5)"
"#;

const TRANSACTIONS_CSV: &str = r#"id,date,kind,amount,currency,method,related_id,rate,description
t1,2024-01-05,client_payment,40,USD,cash,o1,,repayment
"#;

#[test]
fn sheets_export_is_ingested_with_strict_parsing() {
    let util = MetalLedgerUtil::new();
    let log = block_on(util.from_sheets_strings(ORDERS_CSV, TRANSACTIONS_CSV)).unwrap();

    assert!(log.clients.is_empty());
    let order = &log.orders[0];
    assert_eq!(order.id, order_id("o1"));
    assert_usd_eq(order.total_usd, 100.0);
    assert_usd_eq(order.total_uzs, 1_250_000.0);
    assert_eq!(order.payment_method, PaymentMethod::Debt);
    assert_eq!(order.exchange_rate, Some(12_500.0));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].name, "Rebar 12mm");
    assert_usd_eq(order.items[0].unit_price_usd, 2.5);

    let tx = &log.transactions[0];
    assert_eq!(tx.kind, TransactionKind::ClientPayment);
    assert_eq!(tx.reference, EventRef::Order(order_id("o1")));
    assert_eq!(tx.exchange_rate, None);
}

#[test]
fn sheets_export_with_bad_cells_is_rejected() {
    let bad_orders = "id,date,customer,client_id,total_usd,total_uzs,paid_usd,method,status,currency,rate,items\n\
                      o1,not-a-date,Alisher,c1,100,0,0,debt,unpaid,USD,,\n";
    let util = MetalLedgerUtil::new();
    assert!(block_on(util.from_sheets_strings(bad_orders, "id,date,kind,amount,currency,method,related_id,rate,description\n")).is_err());
}

#[test]
fn all_client_statements_covers_every_registered_client() {
    let util = MetalLedgerUtil::new();
    let log = block_on(util.from_string(SNAPSHOT)).unwrap();
    let statements = block_on(util.all_client_statements(&log)).unwrap();
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].client.id.0, "c1");
}
