use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::errors::{ProdashError, ProdashResult};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::model_info::ModelInfo;
use crate::structs::prediction_request::PredictionRequest;
use crate::structs::prediction_result::PredictionResult;
use crate::structs::project_listing::ProjectListing;
use crate::structs::statistics_summary::StatisticsSummary;

/// Client for the remote project analytics API. All four endpoints are
/// JSON over HTTP against one configured base URL. No retries and no
/// request timeout; a hung request hangs the corresponding panel.
#[derive(Clone)]
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
    project_limit: u32,
}

impl AnalyticsClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_limit: config.project_limit,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_statistics(&self) -> ProdashResult<StatisticsSummary> {
        self.get_json("statistics", &format!("{}/stats", self.base_url)).await
    }

    pub async fn fetch_projects(&self) -> ProdashResult<ProjectListing> {
        let url = format!("{}/projects?limit={}", self.base_url, self.project_limit);
        self.get_json("projects", &url).await
    }

    pub async fn fetch_model_info(&self) -> ProdashResult<ModelInfo> {
        self.get_json("model info", &format!("{}/model-info", self.base_url)).await
    }

    pub async fn predict(&self, request: &PredictionRequest) -> ProdashResult<PredictionResult> {
        let url = format!("{}/predict", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        Self::parse_response("prediction", &url, response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &str, url: &str) -> ProdashResult<T> {
        let response = self.client.get(url).send().await?;
        Self::parse_response(operation, url, response).await
    }

    /// Parses the payload explicitly instead of trusting the wire shape:
    /// a missing or mistyped field fails here with a structured error, not
    /// downstream in the renderer.
    async fn parse_response<T: DeserializeOwned>(
        operation: &str,
        url: &str,
        response: reqwest::Response,
    ) -> ProdashResult<T> {
        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProdashError::network_error(
                operation,
                Some(url),
                Some(status.as_u16()),
                &reason,
            ));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ProdashError::parse_error(
                &format!("{} payload", operation),
                &e.to_string(),
                Some(url),
            )
        })
    }
}
