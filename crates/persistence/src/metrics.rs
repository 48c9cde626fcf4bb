//! Query duration metrics.

use metrics::histogram;
use std::time::Instant;

/// Times a single repository operation and records its duration as a
/// `database_query_duration_seconds` histogram labeled with the query name.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("add_client");
/// let result = sqlx::query_scalar(...).fetch_one(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    /// Create a new timer for the given query name.
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name
        )
        .record(self.start.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_creation() {
        let timer = QueryTimer::new("test_query");
        assert_eq!(timer.query_name, "test_query");
    }

    #[test]
    fn test_query_timer_records_without_panicking() {
        QueryTimer::new("test_query").record();
    }
}
