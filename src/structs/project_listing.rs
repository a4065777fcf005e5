use serde::Deserialize;
use crate::structs::project_record::ProjectRecord;

/// Envelope of the `GET /projects` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectListing {
    #[serde(default)]
    pub count: u64,
    pub projects: Vec<ProjectRecord>,
}
