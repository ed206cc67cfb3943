use async_trait::async_trait;

use crate::{
    entities::{Client, Payment, Project, RecordId},
    errors::LedgerError,
};

/// Durable mapping from each collection to an ordered sequence of records.
///
/// Reads return the full collection, empty when nothing has been persisted
/// yet. Saves replace an existing record with the same id in place
/// (preserving its position) or append, and persist the updated collection
/// before returning. Deletes are no-ops when the id is absent. No numeric or
/// referential constraint is enforced here; that is the caller's job.
///
/// Implementations serialize access: exactly one operation touches the
/// persisted document at a time, including the whole of a cascading delete.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn clients(&self) -> Result<Vec<Client>, LedgerError>;

    async fn projects(&self) -> Result<Vec<Project>, LedgerError>;

    async fn payments(&self) -> Result<Vec<Payment>, LedgerError>;

    async fn projects_for_client(
        &self,
        client_id: &RecordId,
    ) -> Result<Vec<Project>, LedgerError>;

    async fn payments_for_client(
        &self,
        client_id: &RecordId,
    ) -> Result<Vec<Payment>, LedgerError>;

    async fn save_client(&self, client: &Client) -> Result<(), LedgerError>;

    async fn save_project(&self, project: &Project) -> Result<(), LedgerError>;

    async fn save_payment(&self, payment: &Payment) -> Result<(), LedgerError>;

    async fn delete_project(&self, id: &RecordId) -> Result<(), LedgerError>;

    async fn delete_payment(&self, id: &RecordId) -> Result<(), LedgerError>;

    /// Removes the client, then every project and payment referencing it, in
    /// that order, as one atomic store operation.
    async fn delete_client_cascade(&self, client_id: &RecordId) -> Result<(), LedgerError>;
}
