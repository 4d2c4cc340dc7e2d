use async_trait::async_trait;
use fractic_server_error::ServerError;
use futures::{
    stream::{self, StreamExt},
    TryStreamExt,
};

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::{
        logic::{balance_calculator, debt_aggregator, fifo_allocator, history_builder},
        repositories::records_repository::RecordsRepository,
    },
    entities::{BalanceReport, ClientStatement, EventLog, ExchangeRate},
    errors::{ClientNotFound, ReadError},
};

#[async_trait]
pub trait ReportUsecase: Send + Sync {
    async fn from_string(&self, snapshot_json: &str) -> Result<EventLog, ServerError>;

    async fn from_file<P>(&self, snapshot_json: P) -> Result<EventLog, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    async fn from_sheets_strings(
        &self,
        orders_csv: &str,
        transactions_csv: &str,
    ) -> Result<EventLog, ServerError>;

    fn client_statement(
        &self,
        log: &EventLog,
        client_id: &str,
    ) -> Result<ClientStatement, ServerError>;

    async fn all_client_statements(
        &self,
        log: &EventLog,
    ) -> Result<Vec<ClientStatement>, ServerError>;

    fn account_balances(&self, log: &EventLog, default_rate: ExchangeRate) -> BalanceReport;
}

pub(crate) struct ReportUsecaseImpl<
    R1 = RecordsRepositoryImpl, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
}

#[async_trait]
impl<R1> ReportUsecase for ReportUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    async fn from_string(&self, snapshot_json: &str) -> Result<EventLog, ServerError> {
        self.records_repository.from_snapshot_string(snapshot_json)
    }

    async fn from_file<P>(&self, snapshot_json: P) -> Result<EventLog, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(snapshot_json)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.records_repository.from_snapshot_string(&contents)
    }

    async fn from_sheets_strings(
        &self,
        orders_csv: &str,
        transactions_csv: &str,
    ) -> Result<EventLog, ServerError> {
        self.records_repository
            .from_sheets_strings(orders_csv, transactions_csv)
    }

    fn client_statement(
        &self,
        log: &EventLog,
        client_id: &str,
    ) -> Result<ClientStatement, ServerError> {
        let client = log
            .client(client_id)
            .ok_or_else(|| ClientNotFound::new(client_id))?;
        Ok(ClientStatement {
            client: client.clone(),
            total_debt_usd: debt_aggregator::client_debt(client, log),
            open_debts: fifo_allocator::open_debts(client, log),
            history: history_builder::debt_history(client, log),
        })
    }

    async fn all_client_statements(
        &self,
        log: &EventLog,
    ) -> Result<Vec<ClientStatement>, ServerError> {
        stream::iter(&log.clients)
            .then(|client| async move { self.client_statement(log, &client.id.0) })
            .try_collect::<Vec<_>>()
            .await
    }

    fn account_balances(&self, log: &EventLog, default_rate: ExchangeRate) -> BalanceReport {
        balance_calculator::account_balances(log, &default_rate)
    }
}

impl ReportUsecaseImpl {
    pub(crate) fn new() -> Self {
        ReportUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
        }
    }
}
