//! Call log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Outcome of a logged handler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Error,
}

impl std::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogStatus::Success => write!(f, "success"),
            LogStatus::Error => write!(f, "error"),
        }
    }
}

/// One row of the `logs` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    pub log_id: i64,
    pub timestamp: DateTime<Utc>,
    pub function_name: String,
    pub status: LogStatus,
    /// Seconds
    pub execution_time: Option<f64>,
    pub error_message: Option<String>,
    pub details: Option<String>,
}

/// Log entry to insert
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub function_name: String,
    pub status: LogStatus,
    pub execution_time: f64,
    pub error_message: Option<String>,
    pub details: Option<String>,
}

/// Per-function aggregate over the `logs` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FunctionStats {
    pub function_name: String,
    pub call_count: i64,
    pub avg_time: Option<f64>,
    pub min_time: Option<f64>,
    pub max_time: Option<f64>,
    pub error_count: i64,
}
