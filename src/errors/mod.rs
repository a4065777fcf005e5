use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProdashError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Payload parsing errors (JSON/TOML at the boundaries)
    ParseError {
        content_type: String,
        reason: String,
        context: Option<String>,
    },

    // Rendering errors
    RenderError {
        panel: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ProdashError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
            context: context.map(|s| s.to_string()),
        }
    }

    pub fn render_error(panel: &str, reason: &str) -> Self {
        Self::RenderError {
            panel: panel.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::ParseError { .. } => false,
            Self::RenderError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Make sure the analytics API server is running");
                msg
            }
            Self::ParseError { content_type, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::RenderError { panel, reason } => {
                format!("Failed to render panel '{}': {}", panel, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

}

impl fmt::Display for ProdashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ProdashError {}

/// Result type alias for prodash operations
pub type ProdashResult<T> = Result<T, ProdashError>;

/// Convert from standard library errors
impl From<std::io::Error> for ProdashError {
    fn from(error: std::io::Error) -> Self {
        ProdashError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ProdashError {
    fn from(error: serde_json::Error) -> Self {
        ProdashError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for ProdashError {
    fn from(error: toml::de::Error) -> Self {
        ProdashError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<reqwest::Error> for ProdashError {
    fn from(error: reqwest::Error) -> Self {
        ProdashError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverability_per_variant() {
        assert!(ProdashError::network_error("fetch", None, Some(503), "unavailable").is_recoverable());
        assert!(ProdashError::config_error("missing base_url", Some("api.base_url"), None).is_recoverable());
        assert!(!ProdashError::parse_error("JSON", "unexpected token", None).is_recoverable());
        assert!(!ProdashError::render_error("statistics", "missing canvas").is_recoverable());
        assert!(!ProdashError::system_error("write", "read-only filesystem").is_recoverable());
    }

    #[test]
    fn user_message_includes_context() {
        let err = ProdashError::network_error("projects fetch", Some("http://localhost:8000/projects"), Some(500), "server error");
        let msg = err.user_message();
        assert!(msg.contains("projects fetch"));
        assert!(msg.contains("http://localhost:8000/projects"));
        assert!(msg.contains("500"));
    }
}
