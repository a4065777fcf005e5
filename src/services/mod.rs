pub mod api_client;
pub mod data_loader;
pub mod filter_engine;
pub mod recommendation;
