use std::sync::Arc;
use serde_json::json;
use tokio::sync::RwLock;
use warp::Filter;
use warp::Reply;
use warp::http::StatusCode;

use prodash::services::api_client::AnalyticsClient;
use prodash::services::data_loader::DataLoader;
use prodash::services::filter_engine::filter_projects;
use prodash::structs::config::api_config::ApiConfig;
use prodash::structs::dashboard_state::DashboardState;
use prodash::structs::prediction_request::PredictionRequest;
use prodash::ui::view_renderer::ViewRenderer;

/// Binds a stub analytics API on an ephemeral port and returns its base
/// URL. `fail_stats` makes the `/stats` endpoint answer 500 so panel
/// isolation can be exercised.
fn spawn_stub_api(fail_stats: bool) -> String {
    let stats = warp::path("stats").and(warp::get()).map(move || {
        if fail_stats {
            warp::reply::with_status(
                warp::reply::json(&json!({"detail": "Database connection failed"})),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response()
        } else {
            warp::reply::json(&json!({
                "total_projects": 5,
                "completed_projects": 2,
                "in_progress_projects": 2,
                "cancelled_projects": 1,
                "on_hold_projects": 0,
                "total_cost": 123456.78,
                "total_benefit": 250000.0,
                "avg_completion_percent": 61.0,
                "avg_cost": 24691.36,
                "avg_benefit": 50000.0,
                "projects_by_type": {"INFRASTRUCTURE": 3, "INCOME GENERATION": 2},
                "projects_by_region": {"North": 3, "West": 2},
                "projects_by_complexity": {"High": 2, "Low": 3}
            }))
            .into_response()
        }
    });

    let projects = warp::path("projects").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "count": 2,
            "projects": [
                {
                    "project_name": "Dam Rehabilitation",
                    "project_type": "INFRASTRUCTURE",
                    "status": "In - Progress",
                    "completionpercent": 55.0,
                    "project_cost": 90000.0,
                    "project_benefit": 150000.0,
                    "region": "North",
                    "complexity": "High"
                },
                {
                    "project_name": "Leadership Training",
                    "project_type": "CAPACITY BUILDING",
                    "status": "Completed",
                    "completionpercent": 100.0,
                    "project_cost": 12000.0,
                    "project_benefit": 30000.0,
                    "region": "West",
                    "complexity": "Low"
                }
            ]
        }))
    });

    let model_info = warp::path("model-info").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "delay_model": {
                "type": "Random Forest Regressor",
                "n_estimators": 100,
                "mae": 0.183,
                "r2_score": 0.999,
                "features": ["project_cost", "project_benefit", "completionpercent"]
            },
            "bottleneck_model": {
                "type": "Random Forest Classifier",
                "n_estimators": 100,
                "accuracy": 1.0,
                "features": ["project_cost", "completion_speed"]
            }
        }))
    });

    let predict = warp::path("predict")
        .and(warp::post())
        .and(warp::body::json())
        .map(|body: serde_json::Value| {
            warp::reply::json(&json!({
                "predicted_delay_days": 6.4,
                "resource_bottleneck": true,
                "input_data": body
            }))
        });

    let routes = stats.or(projects).or(model_info).or(predict);
    let (addr, server) = warp::serve(routes)
        .try_bind_ephemeral(([127, 0, 0, 1], 0))
        .expect("stub api bind");
    tokio::spawn(server);

    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> AnalyticsClient {
    AnalyticsClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        project_limit: 100,
    })
}

fn sample_request() -> PredictionRequest {
    PredictionRequest {
        project_cost: 100.0,
        project_benefit: 160.0,
        complexity: "High".to_string(),
        completionpercent: 40.0,
        actual_duration_days: 90.0,
        project_type: "INCOME GENERATION".to_string(),
        project_manager: "Unknown".to_string(),
        region: "North".to_string(),
        department: "Admin & BI".to_string(),
        phase: "Phase 1 - Explore".to_string(),
        status: "In - Progress".to_string(),
    }
}

#[tokio::test]
async fn full_load_populates_cache_and_charts() {
    let base_url = spawn_stub_api(false);
    let state = Arc::new(RwLock::new(DashboardState::new()));
    let loader = DataLoader::new(client_for(&base_url), Arc::clone(&state));

    let report = loader.load_dashboard().await;
    assert!(report.all_loaded());
    assert!(report.failed_panels().is_empty());

    let stats = report.statistics.unwrap();
    assert_eq!(stats.total_projects, 5);
    assert_eq!(ViewRenderer::render_counters(&stats).total_cost, "$123,457");

    let state = state.read().await;
    assert_eq!(state.projects().len(), 2);
    assert_eq!(state.charts.len(), 4);
}

#[tokio::test]
async fn failed_stats_panel_does_not_block_the_others() {
    let base_url = spawn_stub_api(true);
    let state = Arc::new(RwLock::new(DashboardState::new()));
    let loader = DataLoader::new(client_for(&base_url), Arc::clone(&state));

    let report = loader.load_dashboard().await;
    assert!(!report.all_loaded());
    assert_eq!(report.failed_panels(), vec!["statistics"]);

    // The failing panel reports a structured network error with the status.
    let error = report.statistics.unwrap_err();
    assert!(error.is_recoverable());
    assert!(error.user_message().contains("500"));

    // Projects and model info still rendered correctly.
    let projects = report.projects.unwrap();
    let table = ViewRenderer::render_table_body(&projects);
    assert!(table.contains("Dam Rehabilitation"));
    assert!(table.contains("status-in-progress"));

    let model_info = report.model_info.unwrap();
    assert_eq!(ViewRenderer::render_model_info(&model_info).bottleneck.accuracy, "100.0%");

    // Charts were never built, but the cache holds the loaded projects.
    let state = state.read().await;
    assert!(state.charts.is_empty());
    assert_eq!(state.projects().len(), 2);
}

#[tokio::test]
async fn filtering_reads_the_cache_without_refetching() {
    let base_url = spawn_stub_api(false);
    let state = Arc::new(RwLock::new(DashboardState::new()));
    let loader = DataLoader::new(client_for(&base_url), Arc::clone(&state));
    loader.load_dashboard().await;

    let state = state.read().await;
    let filtered = filter_projects(state.projects(), "dam", "");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].project_name, "Dam Rehabilitation");

    let by_status = filter_projects(state.projects(), "", "Completed");
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].project_name, "Leadership Training");
}

#[tokio::test]
async fn prediction_round_trip_renders_recommendations() {
    let base_url = spawn_stub_api(false);
    let client = client_for(&base_url);

    let result = client.predict(&sample_request()).await.unwrap();
    assert_eq!(result.predicted_delay_days, 6.4);
    assert!(result.resource_bottleneck);
    assert_eq!(result.input_data.project_cost, 100.0);

    let view = ViewRenderer::render_prediction(&result);
    assert_eq!(view.delay, "6.40");
    assert_eq!(view.bottleneck_label, "Yes ⚠️");
    assert!(view.recommendations_html.contains("Significant delay"));
    assert!(view.recommendations_html.contains("Resource bottleneck detected"));
    assert!(view.recommendations_html.contains("Excellent ROI"));
}

#[tokio::test]
async fn unreachable_api_fails_with_recoverable_network_error() {
    // Nothing listens here; the connection is refused immediately.
    let client = client_for("http://127.0.0.1:9");

    let error = client.predict(&sample_request()).await.unwrap_err();
    assert!(error.is_recoverable());

    let error = client.fetch_projects().await.unwrap_err();
    assert!(error.is_recoverable());
}
