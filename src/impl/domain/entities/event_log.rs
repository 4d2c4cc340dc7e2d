use super::{client::Client, expense::Expense, order::Order, transaction::Transaction};

/// Immutable in-memory snapshot of the full accounting history. Every
/// pipeline stage consumes the whole log and derives its view from scratch;
/// mutation happens outside this crate, in the persistence collaborator.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub clients: Vec<Client>,
    pub orders: Vec<Order>,
    pub transactions: Vec<Transaction>,
    pub expenses: Vec<Expense>,
}

impl EventLog {
    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id.0 == id)
    }
}
