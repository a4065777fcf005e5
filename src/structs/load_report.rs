use crate::errors::ProdashError;
use crate::structs::model_info::ModelInfo;
use crate::structs::project_record::ProjectRecord;
use crate::structs::statistics_summary::StatisticsSummary;

/// Outcome of one dashboard load fan-out. Each panel succeeds or fails on
/// its own; a failed panel never hides the data the other two produced.
#[derive(Debug)]
pub struct LoadReport {
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub statistics: Result<StatisticsSummary, ProdashError>,
    pub projects: Result<Vec<ProjectRecord>, ProdashError>,
    pub model_info: Result<ModelInfo, ProdashError>,
}

impl LoadReport {
    pub fn all_loaded(&self) -> bool {
        self.statistics.is_ok() && self.projects.is_ok() && self.model_info.is_ok()
    }

    pub fn failed_panels(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.statistics.is_err() {
            failed.push("statistics");
        }
        if self.projects.is_err() {
            failed.push("projects");
        }
        if self.model_info.is_err() {
            failed.push("model-info");
        }
        failed
    }
}
