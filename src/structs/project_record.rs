use serde::{Deserialize, Serialize};

/// One unit of project data as returned by the backend listing endpoint.
/// Records are immutable once received; the cache is only ever replaced
/// wholesale, never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectRecord {
    pub project_name: String,
    pub project_type: String,
    pub status: String,
    pub completionpercent: f64,
    pub project_cost: f64,
    pub project_benefit: f64,
    pub region: String,
    pub complexity: String,
}
