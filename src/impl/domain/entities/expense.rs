use chrono::NaiveDate;
use iso_currency::Currency;

use super::order::PaymentMethod;

/// An outflow not tied to any client (rent, transport, utilities). Consumed
/// only by the account balance calculator.
#[derive(Debug, Clone)]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub currency: Currency,
    pub method: PaymentMethod,
    pub exchange_rate: Option<f64>,
    pub description: String,
}
