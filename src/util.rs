use fractic_server_error::ServerError;

use crate::{
    domain::usecases::report_usecase::{ReportUsecase as _, ReportUsecaseImpl},
    entities::{BalanceReport, ClientStatement, EventLog, ExchangeRate},
    presentation::statement_printer::StatementPrinter,
};

pub type PrintedStatement = String;

/// Facade over the whole pipeline: ingest an exported snapshot, then derive
/// per-client debt statements and the four-account balance report from it.
/// All derivation is pure recomputation over the loaded log; callers memoize
/// on the log and re-run on fresh snapshots.
pub struct MetalLedgerUtil {
    report_usecase: ReportUsecaseImpl,
    printer: StatementPrinter,
}

impl MetalLedgerUtil {
    pub fn new() -> Self {
        Self {
            report_usecase: ReportUsecaseImpl::new(),
            printer: StatementPrinter::new(),
        }
    }

    /// Ingest a document-store JSON snapshot.
    pub async fn from_string(&self, snapshot_json: &str) -> Result<EventLog, ServerError> {
        self.report_usecase.from_string(snapshot_json).await
    }

    pub async fn from_file<T>(&self, snapshot_json: T) -> Result<EventLog, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.report_usecase.from_file(snapshot_json).await
    }

    /// Ingest spreadsheet-export CSVs (orders and transactions only; the
    /// sheets export carries no client registry or expense book).
    pub async fn from_sheets_strings(
        &self,
        orders_csv: &str,
        transactions_csv: &str,
    ) -> Result<EventLog, ServerError> {
        self.report_usecase
            .from_sheets_strings(orders_csv, transactions_csv)
            .await
    }

    /// Debt statement for one client: recomputed outstanding debt, open debt
    /// positions after FIFO allocation, and the ledger history. Also returns
    /// the printed plain-text rendition.
    pub fn client_statement(
        &self,
        log: &EventLog,
        client_id: &str,
    ) -> Result<(ClientStatement, PrintedStatement), ServerError> {
        let statement = self.report_usecase.client_statement(log, client_id)?;
        let printed = self.printer.print_statement(&statement);
        Ok((statement, printed))
    }

    /// Statements for every registered client.
    pub async fn all_client_statements(
        &self,
        log: &EventLog,
    ) -> Result<Vec<ClientStatement>, ServerError> {
        self.report_usecase.all_client_statements(log).await
    }

    /// Four-bucket cash report across the whole log.
    pub fn account_balances(
        &self,
        log: &EventLog,
        default_rate: ExchangeRate,
    ) -> (BalanceReport, PrintedStatement) {
        let report = self.report_usecase.account_balances(log, default_rate);
        let printed = self.printer.print_balance_report(&report);
        (report, printed)
    }
}

impl Default for MetalLedgerUtil {
    fn default() -> Self {
        Self::new()
    }
}
