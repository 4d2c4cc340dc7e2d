#![allow(dead_code)]

use chrono::NaiveDate;
use iso_currency::Currency;
use metal_ledger::entities::{
    client_id, order_id, transaction_id, Client, ClientId, EventLog, EventRef, Expense, Order,
    PaymentMethod, PaymentStatus, Transaction, TransactionKind,
};
use metal_ledger::util::MetalLedgerUtil;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn client(id: &str, name: &str) -> Client {
    Client {
        id: ClientId(id.to_string()),
        name: name.to_string(),
        company_name: None,
        cached_total_debt: 0.0,
        total_purchases: 0.0,
    }
}

/// Credit sale tied to a client by id; nothing settled at sale time.
pub fn debt_order(id: &str, client: &str, on: NaiveDate, total_usd: f64) -> Order {
    Order {
        id: order_id(id),
        date: on,
        customer_name: String::new(),
        client_id: Some(client_id(client)),
        total_usd,
        total_uzs: 0.0,
        paid_usd: 0.0,
        payment_method: PaymentMethod::Debt,
        payment_status: PaymentStatus::Unpaid,
        payment_currency: Currency::USD,
        exchange_rate: None,
        items: vec![],
    }
}

/// Fully settled sale; never contributes to anyone's debt.
pub fn settled_order(
    id: &str,
    on: NaiveDate,
    total_usd: f64,
    total_uzs: f64,
    method: PaymentMethod,
    currency: Currency,
    rate: Option<f64>,
) -> Order {
    Order {
        id: order_id(id),
        date: on,
        customer_name: String::new(),
        client_id: None,
        total_usd,
        total_uzs,
        paid_usd: total_usd,
        payment_method: method,
        payment_status: PaymentStatus::Paid,
        payment_currency: currency,
        exchange_rate: rate,
        items: vec![],
    }
}

/// USD cash repayment.
pub fn usd_payment(id: &str, on: NaiveDate, amount: f64, reference: EventRef) -> Transaction {
    transaction(
        id,
        on,
        TransactionKind::ClientPayment,
        amount,
        Currency::USD,
        PaymentMethod::Cash,
        reference,
        None,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn transaction(
    id: &str,
    on: NaiveDate,
    kind: TransactionKind,
    amount: f64,
    currency: Currency,
    method: PaymentMethod,
    reference: EventRef,
    rate: Option<f64>,
) -> Transaction {
    Transaction {
        id: transaction_id(id),
        date: on,
        kind,
        amount,
        currency,
        method,
        reference,
        exchange_rate: rate,
        description: String::new(),
    }
}

pub fn expense(
    id: &str,
    on: NaiveDate,
    amount: f64,
    currency: Currency,
    method: PaymentMethod,
) -> Expense {
    Expense {
        id: id.to_string(),
        date: on,
        amount,
        currency,
        method,
        exchange_rate: None,
        description: String::new(),
    }
}

pub fn log_of(
    clients: Vec<Client>,
    orders: Vec<Order>,
    transactions: Vec<Transaction>,
) -> EventLog {
    EventLog {
        clients,
        orders,
        transactions,
        expenses: vec![],
    }
}

pub fn statement(log: &EventLog, client_id: &str) -> metal_ledger::entities::ClientStatement {
    let (statement, _printed) = MetalLedgerUtil::new()
        .client_statement(log, client_id)
        .unwrap();
    statement
}

pub fn assert_usd_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {} USD, got {}",
        expected,
        actual
    );
}
