use std::collections::HashSet;

use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::{
            sheets_csv_datasource::{SheetsCsvDatasource, SheetsCsvDatasourceImpl},
            snapshot_json_datasource::{SnapshotJsonDatasource, SnapshotJsonDatasourceImpl},
        },
        models::{
            related_ref_model::LegacyRefResolver,
            snapshot_models::{ClientModel, ExpenseModel, OrderModel, TransactionModel},
        },
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{EventLog, TransactionKind},
};

pub(crate) struct RecordsRepositoryImpl<
    DS1 = SnapshotJsonDatasourceImpl,
    DS2 = SheetsCsvDatasourceImpl,
> where
    DS1: SnapshotJsonDatasource,
    DS2: SheetsCsvDatasource,
{
    snapshot_datasource: DS1,
    sheets_datasource: DS2,
}

impl<DS1, DS2> RecordsRepository for RecordsRepositoryImpl<DS1, DS2>
where
    DS1: SnapshotJsonDatasource,
    DS2: SheetsCsvDatasource,
{
    fn from_snapshot_string(&self, snapshot_json: &str) -> Result<EventLog, ServerError> {
        let snapshot = self.snapshot_datasource.from_string(snapshot_json)?;
        Ok(build_event_log(
            snapshot.clients,
            snapshot.orders,
            snapshot.transactions,
            snapshot.expenses,
        ))
    }

    fn from_sheets_strings(
        &self,
        orders_csv: &str,
        transactions_csv: &str,
    ) -> Result<EventLog, ServerError> {
        let orders = self.sheets_datasource.orders_from_string(orders_csv)?;
        let transactions = self
            .sheets_datasource
            .transactions_from_string(transactions_csv)?;
        Ok(build_event_log(vec![], orders, transactions, vec![]))
    }
}

/// Assembles the event log. Reference resolution needs the complete id
/// universe, so it runs after all records are decoded and before any entity
/// conversion of transactions.
fn build_event_log(
    clients: Vec<ClientModel>,
    orders: Vec<OrderModel>,
    transactions: Vec<TransactionModel>,
    expenses: Vec<ExpenseModel>,
) -> EventLog {
    let order_ids: HashSet<String> = orders.iter().map(|o| o.id.clone()).collect();
    let obligation_ids: HashSet<String> = transactions
        .iter()
        .filter(|tx| tx.kind.0 == TransactionKind::DebtObligation)
        .map(|tx| tx.id.clone())
        .collect();
    let client_ids: HashSet<String> = clients.iter().map(|c| c.id.clone()).collect();
    let resolver = LegacyRefResolver::new(order_ids, obligation_ids, client_ids);

    EventLog {
        clients: clients.into_iter().map(ClientModel::into_client).collect(),
        orders: orders.into_iter().map(OrderModel::into_order).collect(),
        transactions: transactions
            .into_iter()
            .map(|tx| tx.into_transaction(&resolver))
            .collect(),
        expenses: expenses
            .into_iter()
            .map(ExpenseModel::into_expense)
            .collect(),
    }
}

impl RecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            snapshot_datasource: SnapshotJsonDatasourceImpl::new(),
            sheets_datasource: SheetsCsvDatasourceImpl::new(),
        }
    }
}
