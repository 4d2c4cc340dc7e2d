use std::str::FromStr as _;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::{
        iso_date_model::ISODateModel,
        money_model::MoneyModel,
        payment_models::{
            CurrencyModel, PaymentMethodModel, PaymentStatusModel, TransactionKindModel,
        },
        snapshot_models::{OrderItemModel, OrderModel, TransactionModel},
    },
    errors::{InvalidCsv, InvalidRon},
};

/// RON shape of the `items` cell in the orders export
/// (ex. `(name: "Rebar 12mm", quantity: 40, unit_price: 5.5)`).
#[derive(Debug, serde_derive::Deserialize)]
struct CsvOrderItem {
    name: String,
    quantity: f64,
    unit_price: f64,
}

/// Spreadsheet-export rows. Fixed column layout, no header inference; the
/// export service writes the same columns every time.
pub(crate) trait SheetsCsvDatasource: Send + Sync {
    fn orders_from_string(&self, s: &str) -> Result<Vec<OrderModel>, ServerError>;

    fn transactions_from_string(&self, s: &str) -> Result<Vec<TransactionModel>, ServerError>;
}

pub(crate) struct SheetsCsvDatasourceImpl;

impl SheetsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

fn opt(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl SheetsCsvDatasource for SheetsCsvDatasourceImpl {
    fn orders_from_string(&self, s: &str) -> Result<Vec<OrderModel>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_date = r.get(1).unwrap_or("");
                    let raw_customer = r.get(2).unwrap_or("");
                    let raw_client_id = r.get(3).unwrap_or("");
                    let raw_total_usd = r.get(4).unwrap_or("0");
                    let raw_total_uzs = r.get(5).unwrap_or("0");
                    let raw_paid_usd = r.get(6).unwrap_or("0");
                    let raw_method = r.get(7).unwrap_or("cash");
                    let raw_status = r.get(8).unwrap_or("paid");
                    let raw_currency = r.get(9).unwrap_or("USD");
                    let raw_rate = r.get(10).unwrap_or("");
                    let raw_items = r.get(11).unwrap_or("");

                    // Parse.
                    let date = ISODateModel::from_str(raw_date)?;
                    let total_amount = MoneyModel::from_str(raw_total_usd)?;
                    let total_amount_uzs = MoneyModel::from_str(raw_total_uzs)?;
                    let amount_paid = MoneyModel::from_str(raw_paid_usd)?;
                    let payment_method = PaymentMethodModel::from_str(raw_method)?;
                    let payment_status = PaymentStatusModel::from_str(raw_status)?;
                    let payment_currency = CurrencyModel::from_str(raw_currency)?;
                    let exchange_rate = opt(raw_rate)
                        .map(|raw| MoneyModel::from_str(&raw))
                        .transpose()?;
                    let items: Vec<CsvOrderItem> = from_str(&format!("[{}]", raw_items))
                        .map_err(|e| InvalidRon::with_debug("OrderItems", &e))?;

                    // Build.
                    Ok(OrderModel {
                        id: raw_id.to_string(),
                        date,
                        customer_name: raw_customer.to_string(),
                        client_id: opt(raw_client_id),
                        total_amount,
                        total_amount_uzs,
                        amount_paid,
                        payment_method: Some(payment_method),
                        payment_status: Some(payment_status),
                        payment_currency: Some(payment_currency),
                        exchange_rate,
                        items: items
                            .into_iter()
                            .map(|item| OrderItemModel {
                                name: item.name,
                                quantity: MoneyModel(item.quantity),
                                unit_price: MoneyModel(item.unit_price),
                            })
                            .collect(),
                    })
                })
            })
            .collect()
    }

    fn transactions_from_string(&self, s: &str) -> Result<Vec<TransactionModel>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_date = r.get(1).unwrap_or("");
                    let raw_kind = r.get(2).unwrap_or("");
                    let raw_amount = r.get(3).unwrap_or("0");
                    let raw_currency = r.get(4).unwrap_or("USD");
                    let raw_method = r.get(5).unwrap_or("cash");
                    let raw_related_id = r.get(6).unwrap_or("");
                    let raw_rate = r.get(7).unwrap_or("");
                    let raw_description = r.get(8).unwrap_or("");

                    // Parse.
                    let date = ISODateModel::from_str(raw_date)?;
                    let kind = TransactionKindModel::from_str(raw_kind)?;
                    let amount = MoneyModel::from_str(raw_amount)?;
                    let currency = CurrencyModel::from_str(raw_currency)?;
                    let method = PaymentMethodModel::from_str(raw_method)?;
                    let exchange_rate = opt(raw_rate)
                        .map(|raw| MoneyModel::from_str(&raw))
                        .transpose()?;

                    // Build.
                    Ok(TransactionModel {
                        id: raw_id.to_string(),
                        date,
                        kind,
                        amount,
                        currency: Some(currency),
                        method: Some(method),
                        related_id: opt(raw_related_id),
                        exchange_rate,
                        description: raw_description.to_string(),
                    })
                })
            })
            .collect()
    }
}
