//! Call log repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::log_entry::{FunctionStats, LogEntry, LogStatus, NewLogEntry},
};

#[derive(Clone)]
pub struct LogsRepository {
    pool: SqlitePool,
}

impl LogsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one entry stamped with the current time
    pub async fn create(&self, entry: &NewLogEntry) -> AppResult<i64> {
        let log_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO logs (timestamp, function_name, status, execution_time, error_message, details)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING log_id
            "#,
        )
        .bind(Utc::now())
        .bind(&entry.function_name)
        .bind(entry.status)
        .bind(entry.execution_time)
        .bind(&entry.error_message)
        .bind(&entry.details)
        .fetch_one(&self.pool)
        .await?;
        Ok(log_id)
    }

    /// Most recent entries first, optionally filtered by status
    pub async fn list(&self, status: Option<LogStatus>, limit: i64) -> AppResult<Vec<LogEntry>> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, LogEntry>(
                    "SELECT * FROM logs WHERE status = ? ORDER BY log_id DESC LIMIT ?",
                )
                .bind(status)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, LogEntry>("SELECT * FROM logs ORDER BY log_id DESC LIMIT ?")
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Call count, timings and error count per function, slowest first
    pub async fn stats(&self) -> AppResult<Vec<FunctionStats>> {
        let rows = sqlx::query_as::<_, FunctionStats>(
            r#"
            SELECT
                function_name,
                COUNT(*) AS call_count,
                AVG(execution_time) AS avg_time,
                MIN(execution_time) AS min_time,
                MAX(execution_time) AS max_time,
                SUM(CASE WHEN status = 'error' THEN 1 ELSE 0 END) AS error_count
            FROM logs
            GROUP BY function_name
            ORDER BY avg_time DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(function_name: &str, status: LogStatus, execution_time: f64) -> NewLogEntry {
        NewLogEntry {
            function_name: function_name.to_string(),
            status,
            execution_time,
            error_message: (status == LogStatus::Error).then(|| "boom".to_string()),
            details: None,
        }
    }

    #[tokio::test]
    async fn test_list_and_stats() {
        let pool = crate::db::connect_in_memory().await.unwrap();
        let repo = LogsRepository::new(pool);

        repo.create(&entry("get_all_books", LogStatus::Success, 0.01)).await.unwrap();
        repo.create(&entry("get_all_books", LogStatus::Success, 0.03)).await.unwrap();
        repo.create(&entry("add_review", LogStatus::Error, 0.002)).await.unwrap();

        let all = repo.list(None, 100).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].function_name, "add_review");
        assert!(all.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        let errors = repo.list(Some(LogStatus::Error), 100).await.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_message.as_deref(), Some("boom"));

        let stats = repo.stats().await.unwrap();
        let books = stats.iter().find(|s| s.function_name == "get_all_books").unwrap();
        assert_eq!(books.call_count, 2);
        assert_eq!(books.error_count, 0);
        assert!((books.avg_time.unwrap() - 0.02).abs() < 1e-9);
        assert_eq!(books.max_time, Some(0.03));

        let reviews = stats.iter().find(|s| s.function_name == "add_review").unwrap();
        assert_eq!(reviews.error_count, 1);
    }
}
