pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROJECT_LIMIT: u32 = 100;

pub const DEFAULT_SERVER_PORT_RANGE_START: u16 = 8080;
pub const DEFAULT_SERVER_PORT_RANGE_END: u16 = 8200;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

/// Ranked feature lists are truncated to this many tags per model panel.
pub const MAX_FEATURE_TAGS: usize = 10;

pub const PLACEHOLDER_PROJECTS_FAILED: &str = "Failed to load projects";
pub const PLACEHOLDER_NO_PROJECTS: &str = "No projects found";

pub fn sleep_duration_millis(milliseconds: u64) -> std::time::Duration {
    std::time::Duration::from_millis(milliseconds)
}
