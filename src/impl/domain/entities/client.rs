#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ClientId(pub String);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A counterparty (individual or legal entity).
#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub company_name: Option<String>,
    /// Denormalized snapshot carried over from the document store. Not
    /// authoritative: all reporting recomputes debt from the event log.
    pub cached_total_debt: f64,
    pub total_purchases: f64,
}

// Shorthand constructors.

pub fn client_id(id: impl Into<String>) -> ClientId {
    ClientId(id.into())
}
