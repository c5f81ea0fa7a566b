pub mod api_client;
pub mod blob_store;
pub mod config;
