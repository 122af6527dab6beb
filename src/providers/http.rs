use crate::core::filter::TransactionFilter;
use crate::core::model::{
    CustomerProfile, CustomerTransaction, DecisionInsights, DecisionResult, MetricsSnapshot,
    TimeRange, Transaction,
};
use crate::core::provider::{DataProvider, ProviderError};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

const USER_AGENT: &str = "bankdash/1.0";

#[derive(Serialize)]
struct RejectBody<'a> {
    reason: &'a str,
}

/// Fetches dashboard data from the decision engine REST API.
pub struct HttpProvider {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new(base_url: &str) -> Result<Self, ProviderError> {
        let invalid = |message: String| ProviderError::InvalidUrl {
            url: base_url.to_string(),
            message,
        };
        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(HttpProvider { base_url, client })
    }

    /// Appends `segments` to the base path. Each segment is percent-encoded,
    /// so an id containing `/` or `?` stays a single path component.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        debug!("Requesting {}", url);
        let path = url.path().to_string();
        let response = self.client.get(url).send().await?;
        read_json(&path, response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, ProviderError> {
        debug!("Posting to {}", url);
        let path = url.path().to_string();
        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        read_json(&path, response).await
    }
}

async fn read_json<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    if !response.status().is_success() {
        let err = ProviderError::from_response(response).await;
        error!(path, error = %err, "Backend returned an error");
        return Err(err);
    }

    let text = response.text().await?;
    parse_body(path, &text)
}

fn parse_body<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, ProviderError> {
    serde_json::from_str(text).map_err(|source| {
        error!(
            error = ?source,
            response = %text,
            "Failed to parse response from {}", path
        );
        ProviderError::Parse {
            path: path.to_string(),
            source,
        }
    })
}

#[async_trait]
impl DataProvider for HttpProvider {
    #[instrument(name = "HttpDashboardMetrics", skip(self))]
    async fn dashboard_metrics(&self) -> Result<MetricsSnapshot, ProviderError> {
        self.get_json(self.endpoint(&["metrics", "dashboard"])).await
    }

    #[instrument(name = "HttpCustomerProfile", skip(self))]
    async fn customer_profile(
        &self,
        customer_id: &str,
    ) -> Result<Option<CustomerProfile>, ProviderError> {
        let url = self.endpoint(&["customers", customer_id]);
        let path = url.path().to_string();
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("Customer not found");
            return Ok(None);
        }
        // A `null` body deserializes to `None` as well.
        read_json(&path, response).await
    }

    #[instrument(name = "HttpCustomerTransactions", skip(self))]
    async fn customer_transactions(
        &self,
        customer_id: &str,
    ) -> Result<Vec<CustomerTransaction>, ProviderError> {
        self.get_json(self.endpoint(&["customers", customer_id, "transactions"]))
            .await
    }

    #[instrument(name = "HttpTransactionStream", skip(self), fields(filter = %filter))]
    async fn transaction_stream(
        &self,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, ProviderError> {
        let mut url = self.endpoint(&["transactions", "stream"]);
        url.query_pairs_mut().append_pair("filter", &filter.to_string());
        self.get_json(url).await
    }

    #[instrument(name = "HttpDecisionInsights", skip(self), fields(range = %range))]
    async fn decision_insights(
        &self,
        range: TimeRange,
    ) -> Result<DecisionInsights, ProviderError> {
        let mut url = self.endpoint(&["decisions", "insights"]);
        url.query_pairs_mut().append_pair("range", &range.to_string());
        self.get_json(url).await
    }

    #[instrument(name = "HttpApproveDecision", skip(self))]
    async fn approve_decision(&self, decision_id: &str) -> Result<DecisionResult, ProviderError> {
        let url = self.endpoint(&["decisions", decision_id, "approve"]);
        self.post_json::<_, ()>(url, None).await
    }

    #[instrument(name = "HttpRejectDecision", skip(self, reason))]
    async fn reject_decision(
        &self,
        decision_id: &str,
        reason: &str,
    ) -> Result<DecisionResult, ProviderError> {
        let body = RejectBody { reason };
        let url = self.endpoint(&["decisions", decision_id, "reject"]);
        self.post_json(url, Some(&body)).await
    }
}
