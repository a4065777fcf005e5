use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Preferred port for the local dashboard server. When taken, the next
    /// free port in the configured range is used instead.
    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: None,
            open_browser: default_open_browser(),
        }
    }
}

fn default_open_browser() -> bool {
    true
}
