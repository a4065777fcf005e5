pub mod api_config;
pub mod config;
pub mod server_config;
