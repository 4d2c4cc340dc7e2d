use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde::Deserialize;

use crate::{
    entities::{PaymentMethod, PaymentStatus, TransactionKind},
    errors::{UnknownCurrency, UnknownPaymentMethod, UnknownPaymentStatus, UnknownTransactionKind},
};

macro_rules! impl_string_deserialize {
    ($typ:ty) => {
        impl<'de> Deserialize<'de> for $typ {
            fn deserialize<D>(deserializer: D) -> Result<$typ, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$typ>::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

#[derive(Debug)]
pub(crate) struct PaymentMethodModel(pub(crate) PaymentMethod);

impl FromStr for PaymentMethodModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMethodModel(PaymentMethod::Cash)),
            "bank" | "transfer" => Ok(PaymentMethodModel(PaymentMethod::Bank)),
            "card" => Ok(PaymentMethodModel(PaymentMethod::Card)),
            "debt" | "credit" => Ok(PaymentMethodModel(PaymentMethod::Debt)),
            other => Err(UnknownPaymentMethod::new(other)),
        }
    }
}

#[derive(Debug)]
pub(crate) struct PaymentStatusModel(pub(crate) PaymentStatus);

impl FromStr for PaymentStatusModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(PaymentStatusModel(PaymentStatus::Paid)),
            "unpaid" => Ok(PaymentStatusModel(PaymentStatus::Unpaid)),
            "partial" | "partially_paid" => Ok(PaymentStatusModel(PaymentStatus::Partial)),
            other => Err(UnknownPaymentStatus::new(other)),
        }
    }
}

#[derive(Debug)]
pub(crate) struct TransactionKindModel(pub(crate) TransactionKind);

impl FromStr for TransactionKindModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "client_payment" => Ok(TransactionKindModel(TransactionKind::ClientPayment)),
            "debt_obligation" => Ok(TransactionKindModel(TransactionKind::DebtObligation)),
            "supplier_payment" => Ok(TransactionKindModel(TransactionKind::SupplierPayment)),
            "client_return" => Ok(TransactionKindModel(TransactionKind::ClientReturn)),
            "expense" => Ok(TransactionKindModel(TransactionKind::Expense)),
            other => Err(UnknownTransactionKind::new(other)),
        }
    }
}

#[derive(Debug)]
pub(crate) struct CurrencyModel(pub(crate) Currency);

impl FromStr for CurrencyModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::from_code(&code)
            .map(CurrencyModel)
            .ok_or_else(|| UnknownCurrency::new(&code))
    }
}

impl_string_deserialize!(PaymentMethodModel);
impl_string_deserialize!(PaymentStatusModel);
impl_string_deserialize!(TransactionKindModel);
impl_string_deserialize!(CurrencyModel);
