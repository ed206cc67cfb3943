use chrono::{DateTime, Utc};

use super::record_id::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: RecordId,
    pub client_id: RecordId,
    pub amount: f64,
    /// User-chosen payment date; may differ from the moment the record was
    /// created.
    pub date: DateTime<Utc>,
    /// Absent notes are `None`, never an empty string.
    pub notes: Option<String>,
}
