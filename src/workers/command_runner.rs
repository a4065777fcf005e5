use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ProdashError, ProdashResult};
use crate::helpers::format::format_currency;
use crate::services::api_client::AnalyticsClient;
use crate::services::filter_engine;
use crate::services::recommendation;
use crate::structs::config::config::Config;
use crate::structs::prediction_request::PredictionRequest;
use crate::ui::dashboard_server::DashboardServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> ProdashResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::Serve { port, no_open } => self.serve_command(port, no_open).await,
            Commands::Projects { search, status, limit } => {
                self.projects_command(&search, &status, limit).await
            }
            Commands::Predict {
                cost,
                benefit,
                complexity,
                completion,
                duration,
                project_type,
                region,
                department,
            } => {
                let request = PredictionRequest {
                    project_cost: cost,
                    project_benefit: benefit,
                    complexity,
                    completionpercent: completion,
                    actual_duration_days: duration as f64,
                    project_type,
                    project_manager: "Unknown".to_string(),
                    region,
                    department,
                    phase: "Phase 1 - Explore".to_string(),
                    status: "In - Progress".to_string(),
                };
                self.predict_command(request).await
            }
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> ProdashResult<()> {
        log::info!("🚀 Initializing prodash configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to point at your analytics API.");
                log::info!("🔧 Run 'prodash validate' to check your configuration.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn validate_command(&self) -> ProdashResult<()> {
        let config = ConfigManager::load()?;

        match ConfigManager::validate_config(&config) {
            Ok(_) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(problems) => {
                for problem in &problems {
                    log::error!("❌ {}", problem);
                }
                Err(ProdashError::config_error(
                    &format!("{} configuration problem(s) found", problems.len()),
                    None,
                    Some("Fix the problems above and run 'prodash validate' again"),
                ))
            }
        }
    }

    async fn serve_command(&self, port: Option<u16>, no_open: bool) -> ProdashResult<()> {
        let config = self.load_config()?;
        let client = AnalyticsClient::new(&config.api);

        let preferred_port = port.or(config.server.port);
        let mut server = DashboardServer::new(client, preferred_port);
        let bound_port = server.start().await?;

        let url = format!("http://127.0.0.1:{}", bound_port);
        if config.server.open_browser && !no_open {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }
        log::info!("📊 Dashboard available at {} (Ctrl-C to stop)", url);

        tokio::signal::ctrl_c().await?;
        server.shutdown().await
    }

    async fn projects_command(&self, search: &str, status: &str, limit: Option<u32>) -> ProdashResult<()> {
        let config = self.load_config()?;
        let client = AnalyticsClient::new(&config.api.with_limit(limit));

        let listing = client.fetch_projects().await?;
        let filtered = filter_engine::filter_projects(&listing.projects, search, status);

        println!(
            "{:<32} {:<20} {:<14} {:>6} {:>14} {:>14} {:<8} {:<10}",
            "NAME", "TYPE", "STATUS", "DONE", "COST", "BENEFIT", "REGION", "COMPLEXITY"
        );
        for project in &filtered {
            println!(
                "{:<32} {:<20} {:<14} {:>5}% {:>14} {:>14} {:<8} {:<10}",
                project.project_name,
                project.project_type,
                project.status,
                project.completionpercent,
                format_currency(project.project_cost),
                format_currency(project.project_benefit),
                project.region,
                project.complexity,
            );
        }
        println!("\n📦 {} of {} project(s)", filtered.len(), listing.projects.len());

        Ok(())
    }

    async fn predict_command(&self, request: PredictionRequest) -> ProdashResult<()> {
        let config = self.load_config()?;
        let client = AnalyticsClient::new(&config.api);

        let result = client.predict(&request).await?;

        println!("Predicted delay: {:.2} day(s)", result.predicted_delay_days);
        println!("Resource bottleneck: {}", recommendation::bottleneck_label(result.resource_bottleneck));
        println!("\n💡 Recommendations:");
        for message in recommendation::derive_recommendations(&result) {
            println!("  - {}", message);
        }

        Ok(())
    }

    fn load_config(&self) -> ProdashResult<Config> {
        match ConfigManager::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'prodash init' to create a configuration file.");
                Err(e)
            }
        }
    }
}
