use crate::{
    data::models::iso_datetime_model::IsoDateTimeModel,
    entities::{Project, RecordId},
};

#[derive(Debug, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectModel {
    pub id: String,
    pub client_id: String,
    pub number_of_videos: u32,
    pub charge_per_video: f64,
    // Stored as written at creation time; not derived on read.
    pub total: f64,
    pub created_at: IsoDateTimeModel,
}

impl Into<Project> for ProjectModel {
    fn into(self) -> Project {
        Project {
            id: RecordId(self.id),
            client_id: RecordId(self.client_id),
            number_of_videos: self.number_of_videos,
            charge_per_video: self.charge_per_video,
            total: self.total,
            created_at: self.created_at.into(),
        }
    }
}

impl From<&Project> for ProjectModel {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            client_id: project.client_id.to_string(),
            number_of_videos: project.number_of_videos,
            charge_per_video: project.charge_per_video,
            total: project.total,
            created_at: project.created_at.into(),
        }
    }
}
