//! HTTP client for the remote document store
//!
//! Posts audit records as JSON documents to a collection endpoint.
//! The store itself (schema, retention, auth) is an external
//! collaborator; this client only knows how to append.

use super::{AuditError, AuditRecord, AuditSink};
use async_trait::async_trait;
use reqwest::Client;

/// Configuration for the audit client
#[derive(Debug, Clone)]
pub struct AuditClientConfig {
    /// Base URL of the document store (e.g. "http://localhost:8080")
    pub base_url: String,
    /// Collection the records land in
    pub collection: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for AuditClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            collection: "benchmark_checks".to_string(),
            request_timeout_ms: 5000,
        }
    }
}

/// Audit sink backed by an HTTP document store
pub struct HttpAuditClient {
    client: Client,
    config: AuditClientConfig,
}

impl HttpAuditClient {
    /// Create a client with the given configuration
    pub fn new(config: AuditClientConfig) -> Result<Self, AuditError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;
        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &AuditClientConfig {
        &self.config
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/v1/collections/{}/documents",
            self.config.base_url, self.config.collection
        )
    }
}

#[async_trait]
impl AuditSink for HttpAuditClient {
    async fn append(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let response = self
            .client
            .post(self.documents_url())
            .json(record)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuditError::Timeout
                } else if e.is_connect() {
                    AuditError::Unavailable
                } else {
                    AuditError::Request(e)
                }
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(AuditError::ApiError { status, message })
        }
    }
}
