use serde::{Deserialize, Serialize};
use crate::config::constants::{DEFAULT_API_BASE_URL, DEFAULT_PROJECT_LIMIT};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum number of projects requested from the listing endpoint.
    #[serde(default = "default_project_limit")]
    pub project_limit: u32,
}

impl ApiConfig {
    /// Applies a command-line override of the configured project limit.
    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        if let Some(limit) = limit {
            self.project_limit = limit;
        }
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            project_limit: default_project_limit(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_project_limit() -> u32 {
    DEFAULT_PROJECT_LIMIT
}
