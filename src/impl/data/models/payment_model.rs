use crate::{
    data::models::iso_datetime_model::IsoDateTimeModel,
    entities::{Payment, RecordId},
};

#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentModel {
    pub id: String,
    pub client_id: String,
    pub amount: f64,
    pub date: IsoDateTimeModel,
    // Omitted from the document entirely when absent; an empty string is a
    // present-but-empty note and round-trips as such.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Into<Payment> for PaymentModel {
    fn into(self) -> Payment {
        Payment {
            id: RecordId(self.id),
            client_id: RecordId(self.client_id),
            amount: self.amount,
            date: self.date.into(),
            notes: self.notes,
        }
    }
}

impl From<&Payment> for PaymentModel {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id.to_string(),
            client_id: payment.client_id.to_string(),
            amount: payment.amount,
            date: payment.date.into(),
            notes: payment.notes.clone(),
        }
    }
}
