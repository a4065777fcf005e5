use std::sync::Arc;
use tokio::sync::RwLock;
use crate::errors::ProdashError;
use crate::services::api_client::AnalyticsClient;
use crate::structs::dashboard_state::DashboardState;
use crate::structs::load_report::LoadReport;
use crate::structs::model_info::ModelInfo;
use crate::structs::project_record::ProjectRecord;
use crate::structs::statistics_summary::StatisticsSummary;

/// Orchestrates one dashboard load: the three fetches start together and
/// complete independently, each catching and logging its own failure. A
/// failed panel never cancels its siblings or hides their data.
pub struct DataLoader {
    client: AnalyticsClient,
    state: Arc<RwLock<DashboardState>>,
}

impl DataLoader {
    pub fn new(client: AnalyticsClient, state: Arc<RwLock<DashboardState>>) -> Self {
        Self { client, state }
    }

    pub async fn load_dashboard(&self) -> LoadReport {
        log::info!("📡 Loading dashboard data from {}", self.client.base_url());

        let (statistics, projects, model_info) = tokio::join!(
            self.load_statistics(),
            self.load_projects(),
            self.load_model_info(),
        );

        let report = LoadReport {
            loaded_at: chrono::Utc::now(),
            statistics,
            projects,
            model_info,
        };

        if report.all_loaded() {
            log::info!("✅ Dashboard data loaded");
        } else {
            log::warn!("⚠️ Dashboard loaded with failed panels: {}", report.failed_panels().join(", "));
        }

        report
    }

    /// On success the chart registry is rebuilt from the fresh summary,
    /// disposing the previous chart handles.
    async fn load_statistics(&self) -> Result<StatisticsSummary, ProdashError> {
        match self.client.fetch_statistics().await {
            Ok(stats) => {
                let mut state = self.state.write().await;
                state.charts.rebuild(&stats);
                Ok(stats)
            }
            Err(e) => {
                log::error!("❌ Error loading statistics: {}", e);
                Err(e)
            }
        }
    }

    /// On success the project cache is replaced wholesale.
    async fn load_projects(&self) -> Result<Vec<ProjectRecord>, ProdashError> {
        match self.client.fetch_projects().await {
            Ok(listing) => {
                log::info!("📦 Loaded {} projects", listing.projects.len());
                let mut state = self.state.write().await;
                state.replace_projects(listing.projects.clone());
                Ok(listing.projects)
            }
            Err(e) => {
                log::error!("❌ Error loading projects: {}", e);
                Err(e)
            }
        }
    }

    async fn load_model_info(&self) -> Result<ModelInfo, ProdashError> {
        match self.client.fetch_model_info().await {
            Ok(model_info) => Ok(model_info),
            Err(e) => {
                log::error!("❌ Error loading model info: {}", e);
                Err(e)
            }
        }
    }
}
