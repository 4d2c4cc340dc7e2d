use chrono::NaiveDate;
use iso_currency::Currency;

use super::{client::ClientId, money::DEBT_EPSILON_USD};

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct OrderId(pub String);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Cash,
    Bank,
    Card,
    /// Credit sale: no money moved at sale time.
    Debt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Partial,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: f64,
    pub unit_price_usd: f64,
}

/// A sales transaction. Immutable once recorded; repayments arrive as
/// separate `Transaction` records, never as edits to the order.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    pub customer_name: String,
    /// Optional: matching falls back to the customer name when absent.
    pub client_id: Option<ClientId>,
    pub total_usd: f64,
    pub total_uzs: f64,
    /// Portion settled at sale time, in USD.
    pub paid_usd: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub payment_currency: Currency,
    /// UZS/USD rate snapshot taken at sale time.
    pub exchange_rate: Option<f64>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// An order represents client debt iff it was sold on credit, is not yet
    /// fully paid per its status, or carries an unpaid remainder above the
    /// cent-level epsilon.
    pub fn is_debt_order(&self) -> bool {
        self.payment_method == PaymentMethod::Debt
            || matches!(
                self.payment_status,
                PaymentStatus::Unpaid | PaymentStatus::Partial
            )
            || (self.total_usd - self.paid_usd) > DEBT_EPSILON_USD
    }
}

// Shorthand constructors.

pub fn order_id(id: impl Into<String>) -> OrderId {
    OrderId(id.into())
}
