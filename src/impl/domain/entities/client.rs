use chrono::{DateTime, Utc};

use super::record_id::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
