use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::{data::models::store_document_model::StoreDocumentModel, errors::LedgerError};

/// Durable home of the store document. Loads treat a missing file as an empty
/// document; persists rewrite the whole document in one write, with no
/// partial-write recovery (a failed write surfaces to the caller as-is).
#[async_trait]
pub(crate) trait StoreDocumentDatasource: Send + Sync {
    async fn load(&self) -> Result<StoreDocumentModel, LedgerError>;

    async fn persist(&self, document: &StoreDocumentModel) -> Result<(), LedgerError>;
}

pub(crate) struct StoreDocumentDatasourceImpl {
    path: PathBuf,
}

impl StoreDocumentDatasourceImpl {
    pub(crate) fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, s: &str) -> Result<StoreDocumentModel, LedgerError> {
        serde_json::from_str(s).map_err(LedgerError::InvalidStoreDocument)
    }
}

#[async_trait]
impl StoreDocumentDatasource for StoreDocumentDatasourceImpl {
    async fn load(&self) -> Result<StoreDocumentModel, LedgerError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store document yet, starting empty");
                return Ok(StoreDocumentModel::default());
            }
            Err(e) => {
                return Err(LedgerError::StoreRead {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        self.parse(&raw)
    }

    async fn persist(&self, document: &StoreDocumentModel) -> Result<(), LedgerError> {
        let raw =
            serde_json::to_string_pretty(document).map_err(LedgerError::InvalidStoreDocument)?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| LedgerError::StorePersist {
                path: self.path.clone(),
                source: e,
            })?;
        debug!(
            path = %self.path.display(),
            clients = document.clients.len(),
            projects = document.projects.len(),
            payments = document.payments.len(),
            "persisted store document"
        );
        Ok(())
    }
}
