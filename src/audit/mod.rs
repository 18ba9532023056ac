//! Best-effort audit logging
//!
//! Every confirmed benchmark check is logged to a remote append-only
//! document store: timestamp, region, year, and the entered revenue.
//! The write is fire-and-forget from the analysis core's perspective;
//! a failed write is logged and reported as a warning, never an abort.

mod client;

pub use client::{AuditClientConfig, HttpAuditClient};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// One record per confirmed check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    /// When the check was confirmed
    pub timestamp: DateTime<Utc>,
    /// Region the user compared against
    pub region: String,
    /// Benchmark year
    pub year: i32,
    /// Revenue the user entered
    pub revenue: f64,
}

impl AuditRecord {
    /// Create a record stamped with the current time
    pub fn now(region: impl Into<String>, year: i32, revenue: f64) -> Self {
        Self {
            timestamp: Utc::now(),
            region: region.into(),
            year,
            revenue,
        }
    }
}

/// Errors that can occur while writing to the audit sink
#[derive(Debug, Error)]
pub enum AuditError {
    /// Request timed out
    #[error("Audit sink timed out")]
    Timeout,

    /// Sink unreachable
    #[error("Audit sink unavailable")]
    Unavailable,

    /// Sink rejected the record
    #[error("Audit sink returned {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Other transport failure
    #[error("Audit request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// An append-only destination for audit records
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Append one record
    async fn append(&self, record: &AuditRecord) -> Result<(), AuditError>;
}

/// Append a record, swallowing any sink failure
///
/// Returns the error so the caller can show a non-fatal warning; the
/// already-computed analysis result is never affected either way.
pub async fn append_best_effort(sink: &dyn AuditSink, record: &AuditRecord) -> Option<AuditError> {
    match sink.append(record).await {
        Ok(()) => {
            tracing::debug!(region = %record.region, year = record.year, "audit record written");
            None
        }
        Err(err) => {
            tracing::warn!(%err, "audit write failed, continuing");
            Some(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingSink {
        appended: AtomicUsize,
    }

    #[async_trait]
    impl AuditSink for RecordingSink {
        async fn append(&self, _record: &AuditRecord) -> Result<(), AuditError> {
            self.appended.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl AuditSink for FailingSink {
        async fn append(&self, _record: &AuditRecord) -> Result<(), AuditError> {
            Err(AuditError::Unavailable)
        }
    }

    #[tokio::test]
    async fn test_best_effort_append_succeeds() {
        let sink = RecordingSink {
            appended: AtomicUsize::new(0),
        };
        let record = AuditRecord::now("seoul", 2024, 150000.0);

        let err = append_best_effort(&sink, &record).await;
        assert!(err.is_none());
        assert_eq!(sink.appended.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_best_effort_append_swallows_failure() {
        let record = AuditRecord::now("seoul", 2024, 150000.0);

        let err = append_best_effort(&FailingSink, &record).await;
        assert!(matches!(err, Some(AuditError::Unavailable)));
    }

    #[test]
    fn test_record_serializes_for_document_store() {
        let record = AuditRecord::now("busan", 2023, 90000.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["region"], "busan");
        assert_eq!(json["year"], 2023);
        assert!(json["timestamp"].is_string());
    }
}
