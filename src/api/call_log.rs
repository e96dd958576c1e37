//! Per-route call logging.
//!
//! Each API route is registered with its own [`CallLogger`], which times the
//! wrapped handler and writes exactly one row to the `logs` table for every
//! invocation, whatever the outcome. A failed log write is reported through
//! tracing and never alters the response.

use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::{
    error::CallFailure,
    models::log_entry::{LogStatus, NewLogEntry},
    repository::logs::LogsRepository,
};

/// Decorator state for one route
#[derive(Clone)]
pub struct CallLogger {
    function_name: &'static str,
    logs: LogsRepository,
}

impl CallLogger {
    pub fn new(function_name: &'static str, logs: LogsRepository) -> Self {
        Self { function_name, logs }
    }

    pub fn function_name(&self) -> &'static str {
        self.function_name
    }

    /// Build the log entry describing one finished invocation
    pub fn entry_for(
        &self,
        status: StatusCode,
        failure: Option<&CallFailure>,
        elapsed: Duration,
    ) -> NewLogEntry {
        let seconds = elapsed.as_secs_f64();

        if status.is_client_error() || status.is_server_error() {
            let message = failure.map(|f| f.message.clone()).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            NewLogEntry {
                function_name: self.function_name.to_string(),
                status: LogStatus::Error,
                execution_time: seconds,
                details: Some(format!(
                    "Request failed with status {} in {:.4} seconds: {}",
                    status.as_u16(),
                    seconds,
                    message
                )),
                error_message: Some(message),
            }
        } else {
            NewLogEntry {
                function_name: self.function_name.to_string(),
                status: LogStatus::Success,
                execution_time: seconds,
                error_message: None,
                details: Some(format!("Executed successfully in {:.4} seconds", seconds)),
            }
        }
    }

    /// Persist an entry; failures only reach the tracing output
    pub async fn record(&self, entry: &NewLogEntry) {
        if let Err(e) = self.logs.create(entry).await {
            tracing::warn!(
                function = self.function_name,
                "Failed to write call log entry: {}",
                e
            );
        }
    }
}

/// Middleware body used with `axum::middleware::from_fn_with_state`
pub async fn record_call(
    State(logger): State<CallLogger>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed();

    let entry = logger.entry_for(
        response.status(),
        response.extensions().get::<CallFailure>(),
        elapsed,
    );
    tracing::debug!(
        function = logger.function_name(),
        status = %entry.status,
        execution_time = entry.execution_time,
        "Handler finished"
    );
    logger.record(&entry).await;

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn logger() -> CallLogger {
        let pool = crate::db::connect_in_memory().await.unwrap();
        CallLogger::new("add_review", LogsRepository::new(pool))
    }

    #[tokio::test]
    async fn test_success_entry() {
        let logger = logger().await;
        let entry = logger.entry_for(StatusCode::CREATED, None, Duration::from_millis(12));
        assert_eq!(entry.status, LogStatus::Success);
        assert_eq!(entry.function_name, "add_review");
        assert!((entry.execution_time - 0.012).abs() < 1e-9);
        assert!(entry.error_message.is_none());
        assert_eq!(entry.details.as_deref(), Some("Executed successfully in 0.0120 seconds"));
    }

    #[tokio::test]
    async fn test_error_entry_uses_failure_message() {
        let logger = logger().await;
        let failure = CallFailure {
            message: "Validation error: Rating must be between 1 and 5".to_string(),
        };
        let entry = logger.entry_for(StatusCode::BAD_REQUEST, Some(&failure), Duration::ZERO);
        assert_eq!(entry.status, LogStatus::Error);
        assert_eq!(entry.error_message.as_deref(), Some(failure.message.as_str()));
        assert!(entry.execution_time >= 0.0);

        let entry = logger.entry_for(StatusCode::METHOD_NOT_ALLOWED, None, Duration::ZERO);
        assert_eq!(entry.error_message.as_deref(), Some("Method Not Allowed"));
    }

    #[tokio::test]
    async fn test_record_swallows_store_errors() {
        let pool = crate::db::connect_in_memory().await.unwrap();
        let logger = CallLogger::new("get_all_books", LogsRepository::new(pool.clone()));
        pool.close().await;
        let entry = logger.entry_for(StatusCode::OK, None, Duration::ZERO);
        // Must not panic or propagate
        logger.record(&entry).await;
    }
}
