use iso_currency::Currency;

use crate::entities::{
    client_id, order_id, transaction_id, Client, ClientId, Expense, Order, OrderItem,
    PaymentMethod, PaymentStatus, Transaction,
};

use super::{
    iso_date_model::ISODateModel,
    money_model::MoneyModel,
    payment_models::{CurrencyModel, PaymentMethodModel, PaymentStatusModel, TransactionKindModel},
    related_ref_model::LegacyRefResolver,
};

// Raw document-store export shapes. Field names follow the legacy camelCase
// documents; absent fields take defaults rather than failing the ingest.

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SnapshotModel {
    #[serde(default)]
    pub(crate) clients: Vec<ClientModel>,
    #[serde(default)]
    pub(crate) orders: Vec<OrderModel>,
    #[serde(default)]
    pub(crate) transactions: Vec<TransactionModel>,
    #[serde(default)]
    pub(crate) expenses: Vec<ExpenseModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientModel {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) company_name: Option<String>,
    #[serde(default)]
    pub(crate) total_debt: MoneyModel,
    #[serde(default)]
    pub(crate) total_purchases: MoneyModel,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderModel {
    pub(crate) id: String,
    pub(crate) date: ISODateModel,
    #[serde(default)]
    pub(crate) customer_name: String,
    #[serde(default)]
    pub(crate) client_id: Option<String>,
    #[serde(default)]
    pub(crate) total_amount: MoneyModel,
    #[serde(default, rename = "totalAmountUZS")]
    pub(crate) total_amount_uzs: MoneyModel,
    #[serde(default)]
    pub(crate) amount_paid: MoneyModel,
    #[serde(default)]
    pub(crate) payment_method: Option<PaymentMethodModel>,
    #[serde(default)]
    pub(crate) payment_status: Option<PaymentStatusModel>,
    #[serde(default)]
    pub(crate) payment_currency: Option<CurrencyModel>,
    #[serde(default)]
    pub(crate) exchange_rate: Option<MoneyModel>,
    #[serde(default)]
    pub(crate) items: Vec<OrderItemModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemModel {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) quantity: MoneyModel,
    #[serde(default)]
    pub(crate) unit_price: MoneyModel,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionModel {
    pub(crate) id: String,
    pub(crate) date: ISODateModel,
    #[serde(rename = "type")]
    pub(crate) kind: TransactionKindModel,
    #[serde(default)]
    pub(crate) amount: MoneyModel,
    #[serde(default)]
    pub(crate) currency: Option<CurrencyModel>,
    #[serde(default)]
    pub(crate) method: Option<PaymentMethodModel>,
    #[serde(default)]
    pub(crate) related_id: Option<String>,
    #[serde(default)]
    pub(crate) exchange_rate: Option<MoneyModel>,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExpenseModel {
    pub(crate) id: String,
    pub(crate) date: ISODateModel,
    #[serde(default)]
    pub(crate) amount: MoneyModel,
    #[serde(default)]
    pub(crate) currency: Option<CurrencyModel>,
    #[serde(default)]
    pub(crate) method: Option<PaymentMethodModel>,
    #[serde(default)]
    pub(crate) exchange_rate: Option<MoneyModel>,
    #[serde(default)]
    pub(crate) description: String,
}

// Entity conversion. Rates of zero mean "not recorded".

fn rate_opt(rate: Option<MoneyModel>) -> Option<f64> {
    rate.map(f64::from).filter(|r| *r > 0.0)
}

fn method_or_cash(method: Option<PaymentMethodModel>) -> PaymentMethod {
    method.map(|m| m.0).unwrap_or(PaymentMethod::Cash)
}

fn currency_or_usd(currency: Option<CurrencyModel>) -> Currency {
    currency.map(|c| c.0).unwrap_or(Currency::USD)
}

impl ClientModel {
    pub(crate) fn into_client(self) -> Client {
        Client {
            id: ClientId(self.id),
            name: self.name,
            company_name: self.company_name.filter(|c| !c.trim().is_empty()),
            cached_total_debt: self.total_debt.into(),
            total_purchases: self.total_purchases.into(),
        }
    }
}

impl OrderModel {
    pub(crate) fn into_order(self) -> Order {
        Order {
            id: order_id(self.id),
            date: self.date.into(),
            customer_name: self.customer_name,
            client_id: self
                .client_id
                .filter(|id| !id.trim().is_empty())
                .map(client_id),
            total_usd: self.total_amount.into(),
            total_uzs: self.total_amount_uzs.into(),
            paid_usd: self.amount_paid.into(),
            payment_method: method_or_cash(self.payment_method),
            payment_status: self
                .payment_status
                .map(|s| s.0)
                .unwrap_or(PaymentStatus::Paid),
            payment_currency: currency_or_usd(self.payment_currency),
            exchange_rate: rate_opt(self.exchange_rate),
            items: self
                .items
                .into_iter()
                .map(|item| OrderItem {
                    name: item.name,
                    quantity: item.quantity.into(),
                    unit_price_usd: item.unit_price.into(),
                })
                .collect(),
        }
    }
}

impl TransactionModel {
    pub(crate) fn into_transaction(self, resolver: &LegacyRefResolver) -> Transaction {
        let reference = resolver.resolve(self.related_id.as_deref(), &self.description);
        Transaction {
            id: transaction_id(self.id),
            date: self.date.into(),
            kind: self.kind.0,
            amount: self.amount.into(),
            currency: currency_or_usd(self.currency),
            method: method_or_cash(self.method),
            reference,
            exchange_rate: rate_opt(self.exchange_rate),
            description: self.description,
        }
    }
}

impl ExpenseModel {
    pub(crate) fn into_expense(self) -> Expense {
        Expense {
            id: self.id,
            date: self.date.into(),
            amount: self.amount.into(),
            currency: currency_or_usd(self.currency),
            method: method_or_cash(self.method),
            exchange_rate: rate_opt(self.exchange_rate),
            description: self.description,
        }
    }
}
