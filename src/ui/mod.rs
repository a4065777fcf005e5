pub mod chart_builder;
pub mod dashboard_server;
pub mod view_renderer;
