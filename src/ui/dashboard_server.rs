use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{oneshot, RwLock};
use warp::Filter;
use serde_json::json;
use crate::config::constants::{
    DEFAULT_SERVER_PORT_RANGE_START, DEFAULT_SERVER_PORT_RANGE_END,
    PLACEHOLDER_PROJECTS_FAILED, SERVER_SHUTDOWN_GRACE_PERIOD_MS, sleep_duration_millis,
};
use crate::errors::{ProdashError, ProdashResult};
use crate::services::api_client::AnalyticsClient;
use crate::services::data_loader::DataLoader;
use crate::services::filter_engine;
use crate::structs::dashboard_state::DashboardState;
use crate::structs::prediction_form::PredictionForm;
use crate::ui::view_renderer::ViewRenderer;

/// Local server behind `prodash serve`: one static dashboard page plus the
/// JSON API that page consumes. All orchestration and rendering happens
/// here; the page is a thin DOM shell around a charting library.
pub struct DashboardServer {
    state: Arc<RwLock<DashboardState>>,
    client: Arc<AnalyticsClient>,
    preferred_port: Option<u16>,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub fn new(client: AnalyticsClient, preferred_port: Option<u16>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DashboardState::new())),
            client: Arc::new(client),
            preferred_port,
            port: None,
            shutdown_tx: None,
        }
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub async fn start(&mut self) -> ProdashResult<u16> {
        let port = self.find_available_port().await?;
        self.port = Some(port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let api_base = self.client.base_url().to_string();
        let page_route = warp::path::end()
            .and(warp::get())
            .map(move || serve_dashboard_page(&api_base));

        let api_routes = self.create_api_routes();

        let routes = page_route
            .or(api_routes)
            .with(warp::cors()
                .allow_origin("http://127.0.0.1")
                .allow_origin("http://localhost")
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST"]));

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (_, server) = warp::serve(routes)
            .bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            });

        tokio::spawn(server);

        log::info!("🌐 Dashboard server started on http://127.0.0.1:{}", port);
        Ok(port)
    }

    pub async fn shutdown(&mut self) -> ProdashResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ProdashError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Dashboard server shutdown complete");

        Ok(())
    }

    fn create_api_routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);
        let state_filter = warp::any().map(move || Arc::clone(&state));
        let client = Arc::clone(&self.client);
        let client_filter = warp::any().map(move || Arc::clone(&client));

        let dashboard = warp::path!("api" / "dashboard")
            .and(warp::get())
            .and(state_filter.clone())
            .and(client_filter.clone())
            .and_then(dashboard_handler);

        let projects = warp::path!("api" / "projects")
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .and(state_filter)
            .and_then(projects_handler);

        let predict = warp::path!("api" / "predict")
            .and(warp::post())
            .and(warp::body::json())
            .and(client_filter)
            .and_then(predict_handler);

        dashboard.or(projects).or(predict)
    }

    async fn find_available_port(&self) -> ProdashResult<u16> {
        if let Some(preferred) = self.preferred_port {
            return match tokio::net::TcpListener::bind(format!("127.0.0.1:{}", preferred)).await {
                Ok(listener) => {
                    drop(listener);
                    Ok(preferred)
                }
                Err(e) => Err(ProdashError::system_error(
                    "port binding",
                    &format!("Port {} is not available: {}", preferred, e),
                )),
            };
        }

        for port in DEFAULT_SERVER_PORT_RANGE_START..DEFAULT_SERVER_PORT_RANGE_END {
            if let Ok(listener) = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(ProdashError::system_error("port binding", "No available ports found"))
    }
}

fn serve_dashboard_page(api_base: &str) -> impl warp::Reply {
    let html = include_str!("static/index.html").replace("{{API_BASE_URL}}", api_base);
    warp::reply::html(html)
}

/// Runs the three-way load fan-out and answers with per-panel payloads.
/// A failed panel carries its own error and placeholder; it never empties
/// the panels that did load.
async fn dashboard_handler(
    state: Arc<RwLock<DashboardState>>,
    client: Arc<AnalyticsClient>,
) -> Result<impl warp::Reply, Infallible> {
    let loader = DataLoader::new(client.as_ref().clone(), Arc::clone(&state));
    let report = loader.load_dashboard().await;

    let statistics = match &report.statistics {
        Ok(stats) => {
            let state = state.read().await;
            json!({
                "counters": ViewRenderer::render_counters(stats),
                "charts": state.charts.specs_by_canvas(),
            })
        }
        Err(e) => json!({ "error": e.user_message() }),
    };

    let projects = match &report.projects {
        Ok(projects) => json!({
            "table_html": ViewRenderer::render_table_body(projects),
            "count": projects.len(),
        }),
        Err(e) => json!({
            "error": e.user_message(),
            "table_html": ViewRenderer::render_placeholder_row(PLACEHOLDER_PROJECTS_FAILED),
        }),
    };

    let model_info = match &report.model_info {
        Ok(model_info) => json!(ViewRenderer::render_model_info(model_info)),
        Err(e) => json!({ "error": e.user_message() }),
    };

    Ok(warp::reply::json(&json!({
        "loaded_at": report.loaded_at,
        "statistics": statistics,
        "projects": projects,
        "model_info": model_info,
    })))
}

/// Recomputes the filtered view against the full cache on every call, so
/// criteria never compound across keystrokes.
async fn projects_handler(
    query: HashMap<String, String>,
    state: Arc<RwLock<DashboardState>>,
) -> Result<impl warp::Reply, Infallible> {
    let search = query.get("search").map(String::as_str).unwrap_or("");
    let status = query.get("status").map(String::as_str).unwrap_or("");

    let state = state.read().await;
    let filtered = filter_engine::filter_projects(state.projects(), search, status);

    Ok(warp::reply::json(&json!({
        "table_html": ViewRenderer::render_table_body(&filtered),
        "count": filtered.len(),
    })))
}

/// One POST per submission, no in-flight de-duplication: overlapping
/// submissions race and the last response to arrive wins on the page.
async fn predict_handler(
    form: PredictionForm,
    client: Arc<AnalyticsClient>,
) -> Result<impl warp::Reply, Infallible> {
    let request_id = uuid::Uuid::new_v4();
    let request = form.into_request();
    log::info!("🔮 Prediction request {} for type '{}'", request_id, request.project_type);

    match client.predict(&request).await {
        Ok(result) => Ok(warp::reply::json(&json!({
            "success": true,
            "result": ViewRenderer::render_prediction(&result),
        }))),
        Err(e) => {
            log::error!("❌ Prediction request {} failed: {}", request_id, e);
            Ok(warp::reply::json(&json!({
                "success": false,
                "error": e.user_message(),
            })))
        }
    }
}
