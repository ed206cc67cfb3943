use chrono::{DateTime, Utc};

use super::record_id::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: RecordId,
    pub client_id: RecordId,
    pub number_of_videos: u32,
    pub charge_per_video: f64,
    /// Frozen at creation time (videos x rate); never recomputed afterwards.
    /// Changing the rate or count means deleting and recreating the project.
    pub total: f64,
    pub created_at: DateTime<Utc>,
}
