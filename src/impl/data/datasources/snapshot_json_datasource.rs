use fractic_server_error::ServerError;

use crate::{data::models::snapshot_models::SnapshotModel, errors::InvalidJson};

pub(crate) trait SnapshotJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<SnapshotModel, ServerError>;
}

pub(crate) struct SnapshotJsonDatasourceImpl;

impl SnapshotJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SnapshotJsonDatasource for SnapshotJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<SnapshotModel, ServerError> {
        serde_json::from_str(s).map_err(|e| InvalidJson::with_debug(&e))
    }
}
