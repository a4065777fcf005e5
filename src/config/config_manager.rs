use std::fs;
use crate::errors::{ProdashError, ProdashResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn load() -> ProdashResult<Config> {
        let config_location = dirs::home_dir().map(|d| d.join(".prodash/config.toml")).unwrap_or_default();

        if config_location.exists() {
            log::info!("📋 Loading config from: {}", config_location.display());
            let content = fs::read_to_string(&config_location)?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> ProdashResult<()> {
        let sample_config = r#"# Prodash Configuration

[api]
# Base URL of the project analytics API
base_url = "http://localhost:8000"

# Maximum number of projects requested from the listing endpoint
project_limit = 100

[server]
# Preferred port for the local dashboard page. Leave unset to pick the
# first free port in the 8080-8200 range.
# port = 8080

# Open the dashboard in the default browser once the server is up
open_browser = true
"#;
        let config_dir_path = dirs::home_dir()
            .map(|d| d.join(".prodash"))
            .ok_or_else(|| ProdashError::system_error("config init", "Could not resolve home directory"))?;
        let config_file_path = config_dir_path.join("config.toml");

        fs::create_dir_all(&config_dir_path)?;
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match reqwest::Url::parse(&config.api.base_url) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(format!("api.base_url must be http or https, got: {}", url.scheme()));
                }
            }
            Err(e) => errors.push(format!("api.base_url is not a valid URL: {}", e)),
        }

        if config.api.project_limit == 0 {
            errors.push("api.project_limit must be at least 1".to_string());
        }

        if let Some(port) = config.server.port {
            if port < 1024 {
                errors.push(format!("server.port {} is in the privileged range", port));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::config::api_config::ApiConfig;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.project_limit, 100);
    }

    #[test]
    fn rejects_bad_base_url_and_zero_limit() {
        let config = Config {
            api: ApiConfig {
                base_url: "not a url".to_string(),
                project_limit: 0,
            },
            server: Default::default(),
        };
        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"http://analytics:9000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://analytics:9000");
        assert_eq!(config.api.project_limit, 100);
        assert!(config.server.open_browser);
    }
}
