use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntryKind {
    /// Debt-creating event (a credit sale, or a standalone debt obligation).
    Order,
    /// Debt-reducing event.
    Repayment,
}

/// One row of a client's chronological debt ledger.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Id of the order or transaction this row was derived from.
    pub record_id: String,
    pub date: NaiveDate,
    pub kind: LedgerEntryKind,
    pub description: String,
    /// Signed debt delta in USD: positive for debt creation, negative for
    /// repayment.
    pub debt_change_usd: f64,
    /// Running balance after this row, computed in ascending date order and
    /// clamped at zero.
    pub balance_usd: f64,
}
