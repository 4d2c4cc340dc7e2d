use chrono::NaiveDate;

use super::transaction::TransactionId;

/// Where an applied payment slice came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentSource {
    /// Repayment transaction referencing this record directly.
    Direct(TransactionId),
    /// Slice of the client's unattributed repayment pool, applied FIFO.
    Pool,
}

#[derive(Debug, Clone)]
pub struct AppliedPayment {
    pub source: PaymentSource,
    pub date: Option<NaiveDate>,
    pub amount_usd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenDebtKind {
    /// Backed by a real sales order.
    Order,
    /// Synthetic entry for a standalone debt obligation transaction.
    Obligation,
    /// Fallback pseudo-entry: aggregate debt exists but no open record
    /// remains to attach it to. Guarantees the repayment UI always has a
    /// selectable target.
    GeneralDebt,
}

/// One open (not fully repaid) debt position of a client, after FIFO
/// allocation of unattributed repayments.
#[derive(Debug, Clone)]
pub struct OpenDebt {
    pub id: String,
    pub kind: OpenDebtKind,
    pub date: NaiveDate,
    pub total_usd: f64,
    /// Repaid so far via matched transactions and pool allocation. Does not
    /// include money settled at sale time.
    pub paid_usd: f64,
    pub debt_remaining_usd: f64,
    pub payments: Vec<AppliedPayment>,
}
