use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidAmount;

/// Monetary amount as exported. Accepts accountant formatting (thousands
/// separators, parenthesized negatives). In the JSON snapshot path a missing,
/// null or malformed amount coerces to zero instead of failing the whole
/// ingest (legacy documents are full of them); the CSV path keeps strict
/// parsing.
#[derive(Debug, Default)]
pub(crate) struct MoneyModel(pub(crate) f64);

impl FromStr for MoneyModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(MoneyModel(0.0));
        }
        let is_negative = trimmed.starts_with('(') && trimmed.ends_with(')');
        let numeric_part = trimmed.trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidAmount::new(numeric_part))?;
        let amount = if amount.is_finite() { amount } else { 0.0 };
        Ok(MoneyModel(if is_negative { -amount } else { amount }))
    }
}

impl<'de> Deserialize<'de> for MoneyModel {
    fn deserialize<D>(deserializer: D) -> Result<MoneyModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
            serde_json::Value::String(s) => MoneyModel::from_str(&s).map(|m| m.0).unwrap_or(0.0),
            _ => 0.0,
        };
        Ok(MoneyModel(amount))
    }
}

impl From<MoneyModel> for f64 {
    fn from(model: MoneyModel) -> Self {
        model.0
    }
}
