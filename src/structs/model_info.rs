use serde::Deserialize;

/// Display-only metadata about the backend's two predictive models.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub delay_model: DelayModelInfo,
    pub bottleneck_model: BottleneckModelInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DelayModelInfo {
    #[serde(rename = "type")]
    pub model_type: String,
    pub n_estimators: u32,
    pub mae: f64,
    pub r2_score: f64,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BottleneckModelInfo {
    #[serde(rename = "type")]
    pub model_type: String,
    pub n_estimators: u32,
    pub accuracy: f64,
    pub features: Vec<String>,
}
