use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidDate;

/// Dates arrive in three shapes from the export pipeline: plain ISO dates,
/// full RFC 3339 timestamps, and raw epoch milliseconds (document-store
/// timestamp fields).
#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);

impl ISODateModel {
    fn from_epoch_millis(ms: i64) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(ms).map(|dt| dt.date_naive())
    }
}

impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(ISODateModel(d));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(ISODateModel(dt.date_naive()));
        }
        if let Ok(ms) = s.parse::<i64>() {
            if let Some(d) = Self::from_epoch_millis(ms) {
                return Ok(ISODateModel(d));
            }
        }
        Err(InvalidDate::new(s))
    }
}

impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => {
                ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
            }
            serde_json::Value::Number(n) => n
                .as_i64()
                .and_then(ISODateModel::from_epoch_millis)
                .map(ISODateModel)
                .ok_or_else(|| serde::de::Error::custom("invalid epoch-millisecond date")),
            other => Err(serde::de::Error::custom(format!(
                "invalid date value: {}",
                other
            ))),
        }
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}
