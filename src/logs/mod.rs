// src/logs/mod.rs

pub mod store;

pub use store::{LogEntry, LogError, LogStore, ROLE_ASSISTANT, ROLE_USER};
