use super::fixture_data::fixtures;
use crate::core::filter::{TransactionFilter, select_transactions};
use crate::core::model::{
    CustomerProfile, CustomerTransaction, DecisionInsights, DecisionResult, DecisionStatus,
    MetricsSnapshot, TimeRange, Transaction,
};
use crate::core::provider::{DataProvider, ProviderError};
use async_trait::async_trait;
use chrono::Local;
use std::time::Duration;
use tracing::{debug, instrument};

const METRICS_LATENCY: Duration = Duration::from_millis(300);
const PROFILE_LATENCY: Duration = Duration::from_millis(200);
const CUSTOMER_TRANSACTIONS_LATENCY: Duration = Duration::from_millis(200);
const STREAM_LATENCY: Duration = Duration::from_millis(100);
const INSIGHTS_LATENCY: Duration = Duration::from_millis(300);
const DECISION_LATENCY: Duration = Duration::from_millis(200);

/// Serves the built-in dataset, optionally after a backend-like delay.
pub struct FixtureProvider {
    simulate_latency: bool,
}

impl FixtureProvider {
    pub fn new(simulate_latency: bool) -> Self {
        FixtureProvider { simulate_latency }
    }

    async fn delay(&self, latency: Duration) {
        if self.simulate_latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Wall-clock stamp in the `H:MM:SS` shape the stream uses.
fn now_stamp() -> String {
    Local::now().format("%-H:%M:%S").to_string()
}

#[async_trait]
impl DataProvider for FixtureProvider {
    async fn dashboard_metrics(&self) -> Result<MetricsSnapshot, ProviderError> {
        self.delay(METRICS_LATENCY).await;
        Ok(fixtures().metrics.clone())
    }

    #[instrument(name = "FixtureCustomerProfile", skip(self))]
    async fn customer_profile(
        &self,
        customer_id: &str,
    ) -> Result<Option<CustomerProfile>, ProviderError> {
        self.delay(PROFILE_LATENCY).await;
        let customers = &fixtures().customers;
        let found = customers.iter().find(|c| c.customer_id == customer_id);
        if found.is_none() {
            debug!("Unknown customer, falling back to first fixture record");
        }
        Ok(found.or_else(|| customers.first()).cloned())
    }

    async fn customer_transactions(
        &self,
        _customer_id: &str,
    ) -> Result<Vec<CustomerTransaction>, ProviderError> {
        self.delay(CUSTOMER_TRANSACTIONS_LATENCY).await;
        Ok(fixtures().customer_activity.clone())
    }

    #[instrument(name = "FixtureTransactionStream", skip(self), fields(filter = %filter))]
    async fn transaction_stream(
        &self,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, ProviderError> {
        self.delay(STREAM_LATENCY).await;
        let stamp = now_stamp();
        let transactions = select_transactions(&fixtures().transactions, filter)
            .into_iter()
            .map(|txn| Transaction {
                time: stamp.clone(),
                ..txn
            })
            .collect::<Vec<_>>();
        debug!(count = transactions.len(), "Serving fixture transactions");
        Ok(transactions)
    }

    async fn decision_insights(
        &self,
        _range: TimeRange,
    ) -> Result<DecisionInsights, ProviderError> {
        self.delay(INSIGHTS_LATENCY).await;
        Ok(fixtures().insights.clone())
    }

    async fn approve_decision(&self, decision_id: &str) -> Result<DecisionResult, ProviderError> {
        self.delay(DECISION_LATENCY).await;
        Ok(DecisionResult {
            success: true,
            decision_id: decision_id.to_string(),
            status: DecisionStatus::Approved,
            reason: None,
        })
    }

    async fn reject_decision(
        &self,
        decision_id: &str,
        reason: &str,
    ) -> Result<DecisionResult, ProviderError> {
        self.delay(DECISION_LATENCY).await;
        Ok(DecisionResult {
            success: true,
            decision_id: decision_id.to_string(),
            status: DecisionStatus::Rejected,
            reason: Some(reason.to_string()),
        })
    }
}
