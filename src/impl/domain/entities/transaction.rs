use chrono::NaiveDate;
use iso_currency::Currency;

use super::{client::ClientId, order::OrderId, order::PaymentMethod};

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct TransactionId(pub String);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Repayment from a client; reduces debt.
    ClientPayment,
    /// Explicit debt creation not tied to a sales order.
    DebtObligation,
    SupplierPayment,
    ClientReturn,
    Expense,
}

/// Tagged replacement for the legacy stringly-typed `relatedId` field, whose
/// meaning depended on the transaction type (order id, client id, or a
/// free-text order reference buried in the description). Resolved once at
/// ingestion; domain logic never re-parses descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRef {
    Order(OrderId),
    /// Repayment against a standalone debt obligation (referenced by the
    /// obligation transaction's own id).
    Obligation(TransactionId),
    Client(ClientId),
    None,
}

/// A ledger event. Append-only from the accounting perspective.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: Currency,
    pub method: PaymentMethod,
    pub reference: EventRef,
    /// UZS/USD rate snapshot taken when the event was recorded.
    pub exchange_rate: Option<f64>,
    pub description: String,
}

// Shorthand constructors.

pub fn transaction_id(id: impl Into<String>) -> TransactionId {
    TransactionId(id.into())
}
