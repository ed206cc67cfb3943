use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    data::{
        datasources::store_document_datasource::{
            StoreDocumentDatasource, StoreDocumentDatasourceImpl,
        },
        models::{
            client_model::ClientModel, payment_model::PaymentModel, project_model::ProjectModel,
            store_document_model::RecordModel, store_document_model::StoreDocumentModel,
        },
    },
    domain::repositories::record_store::RecordStore,
    entities::{Client, Payment, Project, RecordId},
    errors::LedgerError,
};

pub(crate) struct RecordStoreImpl<
    DS = StoreDocumentDatasourceImpl, // Default.
> where
    DS: StoreDocumentDatasource,
{
    datasource: DS,
    // Single-writer lock held across every load-mutate-persist sequence, so
    // a cascade can never interleave with another store operation.
    access: Mutex<()>,
}

impl RecordStoreImpl<StoreDocumentDatasourceImpl> {
    pub(crate) fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_datasource(StoreDocumentDatasourceImpl::new(path))
    }
}

impl<DS: StoreDocumentDatasource> RecordStoreImpl<DS> {
    pub(crate) fn with_datasource(datasource: DS) -> Self {
        Self {
            datasource,
            access: Mutex::new(()),
        }
    }

    async fn mutate<F>(&self, apply: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&mut StoreDocumentModel) + Send,
    {
        let _guard = self.access.lock().await;
        let mut document = self.datasource.load().await?;
        apply(&mut document);
        self.datasource.persist(&document).await
    }

    async fn read(&self) -> Result<StoreDocumentModel, LedgerError> {
        let _guard = self.access.lock().await;
        self.datasource.load().await
    }
}

/// Replace the record with the same id in place, preserving its position;
/// append when no record with that id exists.
fn upsert<M: RecordModel>(records: &mut Vec<M>, record: M) {
    match records
        .iter()
        .position(|r| r.record_id() == record.record_id())
    {
        Some(i) => records[i] = record,
        None => records.push(record),
    }
}

fn remove<M: RecordModel>(records: &mut Vec<M>, id: &RecordId) {
    records.retain(|r| r.record_id() != id.as_str());
}

#[async_trait]
impl<DS: StoreDocumentDatasource> RecordStore for RecordStoreImpl<DS> {
    async fn clients(&self) -> Result<Vec<Client>, LedgerError> {
        Ok(self.read().await?.clients.into_iter().map(Into::into).collect())
    }

    async fn projects(&self) -> Result<Vec<Project>, LedgerError> {
        Ok(self
            .read()
            .await?
            .projects
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn payments(&self) -> Result<Vec<Payment>, LedgerError> {
        Ok(self
            .read()
            .await?
            .payments
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn projects_for_client(
        &self,
        client_id: &RecordId,
    ) -> Result<Vec<Project>, LedgerError> {
        Ok(self
            .read()
            .await?
            .projects
            .into_iter()
            .filter(|p| p.client_id == client_id.as_str())
            .map(Into::into)
            .collect())
    }

    async fn payments_for_client(
        &self,
        client_id: &RecordId,
    ) -> Result<Vec<Payment>, LedgerError> {
        Ok(self
            .read()
            .await?
            .payments
            .into_iter()
            .filter(|p| p.client_id == client_id.as_str())
            .map(Into::into)
            .collect())
    }

    async fn save_client(&self, client: &Client) -> Result<(), LedgerError> {
        let model = ClientModel::from(client);
        self.mutate(|document| upsert(&mut document.clients, model))
            .await
    }

    async fn save_project(&self, project: &Project) -> Result<(), LedgerError> {
        let model = ProjectModel::from(project);
        self.mutate(|document| upsert(&mut document.projects, model))
            .await
    }

    async fn save_payment(&self, payment: &Payment) -> Result<(), LedgerError> {
        let model = PaymentModel::from(payment);
        self.mutate(|document| upsert(&mut document.payments, model))
            .await
    }

    async fn delete_project(&self, id: &RecordId) -> Result<(), LedgerError> {
        self.mutate(|document| remove(&mut document.projects, id))
            .await
    }

    async fn delete_payment(&self, id: &RecordId) -> Result<(), LedgerError> {
        self.mutate(|document| remove(&mut document.payments, id))
            .await
    }

    async fn delete_client_cascade(&self, client_id: &RecordId) -> Result<(), LedgerError> {
        self.mutate(|document| {
            remove(&mut document.clients, client_id);
            document
                .projects
                .retain(|p| p.client_id != client_id.as_str());
            document
                .payments
                .retain(|p| p.client_id != client_id.as_str());
        })
        .await?;
        info!(client_id = %client_id, "deleted client with cascading projects/payments");
        Ok(())
    }
}
