//! Data source abstraction shared by the fixture and live backends

use super::filter::TransactionFilter;
use super::model::{
    CustomerProfile, CustomerTransaction, DecisionInsights, DecisionResult, MetricsSnapshot,
    TimeRange, Transaction,
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection, timeout or body read failure.
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Stream error: {0}")]
    Stream(#[from] tokio_tungstenite::tungstenite::Error),
}

impl ProviderError {
    pub async fn from_response(response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ProviderError::Http { status, message }
    }
}

/// One async operation per dashboard resource. Implementations return the
/// same shapes whether the data is canned or fetched over the network.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn dashboard_metrics(&self) -> Result<MetricsSnapshot, ProviderError>;

    /// `Ok(None)` means the backend has no such customer.
    async fn customer_profile(
        &self,
        customer_id: &str,
    ) -> Result<Option<CustomerProfile>, ProviderError>;

    async fn customer_transactions(
        &self,
        customer_id: &str,
    ) -> Result<Vec<CustomerTransaction>, ProviderError>;

    async fn transaction_stream(
        &self,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, ProviderError>;

    async fn decision_insights(&self, range: TimeRange)
    -> Result<DecisionInsights, ProviderError>;

    async fn approve_decision(&self, decision_id: &str) -> Result<DecisionResult, ProviderError>;

    async fn reject_decision(
        &self,
        decision_id: &str,
        reason: &str,
    ) -> Result<DecisionResult, ProviderError>;
}
