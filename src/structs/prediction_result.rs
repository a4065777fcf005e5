use serde::Deserialize;
use crate::structs::prediction_request::PredictionRequest;

/// Response of the `POST /predict` endpoint. Displayed once and discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResult {
    pub predicted_delay_days: f64,
    pub resource_bottleneck: bool,
    pub input_data: PredictionRequest,
}
