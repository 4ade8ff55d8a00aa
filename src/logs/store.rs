// src/logs/store.rs
// Append-only interaction log. Every recommendation attempt writes exactly
// two rows: the user's mood and the raw (pre-enrichment) model text, or an
// error string when generation fails. Rows are immutable except deletion,
// and only the owner may delete.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Log entry not found")]
    NotFound,
    #[error("Not the owner of this log entry")]
    NotOwner,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LogEntry {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    pub role: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone)]
pub struct LogStore {
    db: SqlitePool,
}

impl LogStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn append(&self, user_id: &str, message: &str, role: &str) -> Result<i64, LogError> {
        let result = sqlx::query("INSERT INTO logs (user_id, message, role, timestamp) VALUES (?, ?, ?, ?)")
            .bind(user_id)
            .bind(message)
            .bind(role)
            .bind(Utc::now())
            .execute(&self.db)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Entries for one owner, newest first. The optional date filter compares
    /// calendar dates and ignores time-of-day.
    pub async fn list(
        &self,
        user_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<LogEntry>, LogError> {
        let entries = match date {
            Some(date) => {
                sqlx::query_as::<_, LogEntry>(
                    "SELECT * FROM logs WHERE user_id = ? AND date(timestamp) = ? ORDER BY timestamp DESC",
                )
                .bind(user_id)
                .bind(date)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, LogEntry>(
                    "SELECT * FROM logs WHERE user_id = ? ORDER BY timestamp DESC",
                )
                .bind(user_id)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(entries)
    }

    pub async fn delete(&self, user_id: &str, log_id: i64) -> Result<(), LogError> {
        let entry = sqlx::query_as::<_, LogEntry>("SELECT * FROM logs WHERE id = ?")
            .bind(log_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(LogError::NotFound)?;

        if entry.user_id != user_id {
            return Err(LogError::NotOwner);
        }

        sqlx::query("DELETE FROM logs WHERE id = ?")
            .bind(log_id)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
