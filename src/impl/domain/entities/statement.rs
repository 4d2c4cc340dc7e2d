use super::{allocation::OpenDebt, client::Client, ledger::LedgerEntry};

/// Everything the debt/repayment UI needs for one client, recomputed from
/// the event log (the client's cached debt field is ignored).
#[derive(Debug, Clone)]
pub struct ClientStatement {
    pub client: Client,
    /// Outstanding debt in USD, clamped at zero.
    pub total_debt_usd: f64,
    /// Open debt positions oldest-first, after FIFO allocation.
    pub open_debts: Vec<OpenDebt>,
    /// Debt ledger, most recent first.
    pub history: Vec<LedgerEntry>,
}
