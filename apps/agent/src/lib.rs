pub mod analysis;
pub mod config;
pub mod errors;
pub mod interview;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod session;
pub mod state;
