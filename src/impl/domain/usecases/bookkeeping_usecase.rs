use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::{
    data::repositories::record_store_impl::RecordStoreImpl,
    domain::{
        logic::{summary_logic, validate},
        repositories::record_store::RecordStore,
    },
    entities::{Client, ClientDetail, ClientSummary, Payment, Project, RecordId},
    errors::LedgerError,
};

/// Day-to-day bookkeeping operations.
///
/// Mutations validate first (a rejected input never reaches the store), then
/// persist, then return the created entity. They never hand back refreshed
/// collections: after any mutation the caller is expected to re-query the
/// collections it displays.
#[async_trait]
pub trait BookkeepingUsecase: Send + Sync {
    async fn add_client(&self, name: &str) -> Result<Client, LedgerError>;

    /// The project total is computed here, once, and stored frozen.
    /// No check that `client_id` exists is performed; dangling references
    /// are only ever cleaned up by the cascading client delete.
    async fn add_project(
        &self,
        client_id: &RecordId,
        number_of_videos: u32,
        charge_per_video: f64,
    ) -> Result<Project, LedgerError>;

    async fn record_payment(
        &self,
        client_id: &RecordId,
        amount: f64,
        date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<Payment, LedgerError>;

    async fn delete_project(&self, id: &RecordId) -> Result<(), LedgerError>;

    async fn delete_payment(&self, id: &RecordId) -> Result<(), LedgerError>;

    /// Cascades to the client's projects and payments.
    async fn delete_client(&self, id: &RecordId) -> Result<(), LedgerError>;

    async fn client_summaries(&self) -> Result<Vec<ClientSummary>, LedgerError>;

    /// `None` when no such client exists; a vanished id is a normal
    /// empty-result condition, not an error.
    async fn client_detail(
        &self,
        client_id: &RecordId,
    ) -> Result<Option<ClientDetail>, LedgerError>;

    async fn payments_on_date(&self, date: NaiveDate) -> Result<Vec<Payment>, LedgerError>;
}

pub(crate) struct BookkeepingUsecaseImpl<
    S = RecordStoreImpl, // Default.
> where
    S: RecordStore,
{
    store: Arc<S>,
}

impl<S: RecordStore> BookkeepingUsecaseImpl<S> {
    pub(crate) fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: RecordStore> BookkeepingUsecase for BookkeepingUsecaseImpl<S> {
    async fn add_client(&self, name: &str) -> Result<Client, LedgerError> {
        let name = validate::client_name(name)?;
        let client = Client {
            id: RecordId::generate(),
            name,
            created_at: Utc::now(),
        };
        self.store.save_client(&client).await?;
        info!(client_id = %client.id, "added client");
        Ok(client)
    }

    async fn add_project(
        &self,
        client_id: &RecordId,
        number_of_videos: u32,
        charge_per_video: f64,
    ) -> Result<Project, LedgerError> {
        validate::project_terms(number_of_videos, charge_per_video)?;
        let project = Project {
            id: RecordId::generate(),
            client_id: client_id.clone(),
            number_of_videos,
            charge_per_video,
            total: f64::from(number_of_videos) * charge_per_video,
            created_at: Utc::now(),
        };
        self.store.save_project(&project).await?;
        info!(project_id = %project.id, total = project.total, "added project");
        Ok(project)
    }

    async fn record_payment(
        &self,
        client_id: &RecordId,
        amount: f64,
        date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<Payment, LedgerError> {
        validate::payment_amount(amount)?;
        let payment = Payment {
            id: RecordId::generate(),
            client_id: client_id.clone(),
            amount,
            date,
            notes: validate::normalize_notes(notes),
        };
        self.store.save_payment(&payment).await?;
        info!(payment_id = %payment.id, amount, "recorded payment");
        Ok(payment)
    }

    async fn delete_project(&self, id: &RecordId) -> Result<(), LedgerError> {
        self.store.delete_project(id).await
    }

    async fn delete_payment(&self, id: &RecordId) -> Result<(), LedgerError> {
        self.store.delete_payment(id).await
    }

    async fn delete_client(&self, id: &RecordId) -> Result<(), LedgerError> {
        self.store.delete_client_cascade(id).await
    }

    async fn client_summaries(&self) -> Result<Vec<ClientSummary>, LedgerError> {
        let clients = self.store.clients().await?;
        let projects = self.store.projects().await?;
        let payments = self.store.payments().await?;
        Ok(summary_logic::summarize(&clients, &projects, &payments))
    }

    async fn client_detail(
        &self,
        client_id: &RecordId,
    ) -> Result<Option<ClientDetail>, LedgerError> {
        let client = match self
            .store
            .clients()
            .await?
            .into_iter()
            .find(|c| &c.id == client_id)
        {
            Some(client) => client,
            None => return Ok(None),
        };
        let projects = self.store.projects_for_client(client_id).await?;
        let payments = self.store.payments_for_client(client_id).await?;
        Ok(Some(ClientDetail {
            client,
            projects,
            payments,
        }))
    }

    async fn payments_on_date(&self, date: NaiveDate) -> Result<Vec<Payment>, LedgerError> {
        let payments = self.store.payments().await?;
        Ok(summary_logic::payments_on_date(&payments, date))
    }
}
