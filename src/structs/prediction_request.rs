use serde::{Deserialize, Serialize};

/// Body of the `POST /predict` call. The optional fields mirror the
/// backend's defaults so the echoed `input_data` deserializes back into
/// this type unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub project_cost: f64,
    pub project_benefit: f64,
    pub complexity: String,
    pub completionpercent: f64,
    pub actual_duration_days: f64,
    #[serde(default = "default_project_type")]
    pub project_type: String,
    #[serde(default = "default_project_manager")]
    pub project_manager: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_department")]
    pub department: String,
    #[serde(default = "default_phase")]
    pub phase: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_project_type() -> String {
    "INCOME GENERATION".to_string()
}

fn default_project_manager() -> String {
    "Unknown".to_string()
}

fn default_region() -> String {
    "North".to_string()
}

fn default_department() -> String {
    "Admin & BI".to_string()
}

fn default_phase() -> String {
    "Phase 1 - Explore".to_string()
}

fn default_status() -> String {
    "In - Progress".to_string()
}
