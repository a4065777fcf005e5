pub mod chart_spec;
pub mod cli;
pub mod config;
pub mod dashboard_state;
pub mod load_report;
pub mod model_info;
pub mod prediction_form;
pub mod prediction_request;
pub mod prediction_result;
pub mod project_listing;
pub mod project_record;
pub mod statistics_summary;
