use fractic_server_error::ServerError;

use crate::entities::EventLog;

pub trait RecordsRepository: Send + Sync {
    /// Ingest a document-store JSON snapshot (clients, orders, transactions,
    /// expenses) into an event log, resolving legacy record references.
    fn from_snapshot_string(&self, snapshot_json: &str) -> Result<EventLog, ServerError>;

    /// Ingest spreadsheet-export CSVs (orders and transactions).
    fn from_sheets_strings(
        &self,
        orders_csv: &str,
        transactions_csv: &str,
    ) -> Result<EventLog, ServerError>;
}
