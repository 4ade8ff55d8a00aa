// src/lib.rs

pub mod adapters;
pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod logs;
pub mod prompt;
pub mod state;

// Export commonly used items
pub use config::RecoConfig;
pub use state::AppState;
