use crate::{
    data::models::iso_datetime_model::IsoDateTimeModel,
    entities::{Client, RecordId},
};

#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientModel {
    pub id: String,
    pub name: String,
    pub created_at: IsoDateTimeModel,
}

impl Into<Client> for ClientModel {
    fn into(self) -> Client {
        Client {
            id: RecordId(self.id),
            name: self.name,
            created_at: self.created_at.into(),
        }
    }
}

impl From<&Client> for ClientModel {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.to_string(),
            name: client.name.clone(),
            created_at: client.created_at.into(),
        }
    }
}
