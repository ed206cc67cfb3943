use crate::data::models::{
    client_model::ClientModel, payment_model::PaymentModel, project_model::ProjectModel,
};

/// The entire persisted state: one JSON document holding the three named
/// collections. Arrays missing from an existing document read as empty, so a
/// brand-new (or partially written-out) document is never an error.
#[derive(Debug, Default, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct StoreDocumentModel {
    #[serde(default)]
    pub clients: Vec<ClientModel>,
    #[serde(default)]
    pub projects: Vec<ProjectModel>,
    #[serde(default)]
    pub payments: Vec<PaymentModel>,
}

/// Common shape of the three stored record types: anything with a string id,
/// replaceable in place and removable by id.
pub(crate) trait RecordModel {
    fn record_id(&self) -> &str;
}

impl RecordModel for ClientModel {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl RecordModel for ProjectModel {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl RecordModel for PaymentModel {
    fn record_id(&self) -> &str {
        &self.id
    }
}
