//! Data shapes returned by a [`DataProvider`](super::DataProvider).
//!
//! Every type mirrors the JSON the backend emits (camelCase field names).
//! Values are read-only once fetched; a new fetch replaces them wholesale.

use super::badge::Badge;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub transactions_today: u64,
    pub transaction_growth: f64,
    pub decisions_made: u64,
    pub decisions_growth: f64,
    pub fraud_blocked: i64,
    pub fraud_count: u64,
    pub cross_sell_revenue: i64,
    pub revenue_growth: f64,
    pub api_response_time: u64,
    pub throughput: u64,
    pub uptime: f64,
    pub active_users: u64,
    pub recent_decisions: Vec<RecentDecision>,
    pub fraud_alerts: Vec<FraudAlert>,
    pub top_offers: Vec<OfferPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDecision {
    pub time: String,
    pub customer_id: String,
    #[serde(rename = "type")]
    pub decision_type: String,
    pub outcome: String,
    #[serde(rename = "badgeClass", default)]
    pub badge: Badge,
    pub confidence: u8,
    pub latency: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudAlert {
    pub time: String,
    pub customer_name: String,
    pub customer_id: String,
    pub transaction: String,
    pub amount: i64,
    pub risk_score: RiskScore,
    #[serde(default)]
    pub risk_badge: Badge,
    pub status: String,
    #[serde(default)]
    pub status_badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPerformance {
    pub product: String,
    pub sent: u64,
    pub conversions: u64,
    pub conversion_rate: f64,
    pub revenue: i64,
}

/// Decision outcome attached to a monitored transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Approved,
    Blocked,
    Pending,
    Review,
}

impl Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransactionStatus::Approved => "APPROVED",
                TransactionStatus::Blocked => "BLOCKED",
                TransactionStatus::Pending => "PENDING",
                TransactionStatus::Review => "REVIEW",
            }
        )
    }
}

/// Risk score in `0..=100`. Out-of-range values are rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(RiskScore(value))
    }

    /// Clamps `value` into range.
    pub fn saturating(value: u8) -> Self {
        RiskScore(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RiskScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RiskScore::new(value).ok_or_else(|| format!("risk score {value} is outside 0..=100"))
    }
}

impl From<RiskScore> for u8 {
    fn from(score: RiskScore) -> u8 {
        score.0
    }
}

impl Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub time: String,
    pub transaction_id: String,
    pub customer_id: String,
    pub customer_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub location: String,
    pub risk_score: RiskScore,
    pub status: TransactionStatus,
    pub latency: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: i64,
    pub account_number: String,
}

/// A customer record. Net worth is derived, never stored: any `netWorth`
/// field on the wire is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub customer_since: NaiveDate,
    pub tier: String,
    #[serde(default)]
    pub tier_badge: Badge,
    pub annual_income: i64,
    pub credit_score: u16,
    pub life_stage: String,
    pub lifetime_value: i64,
    pub total_assets: i64,
    pub total_liabilities: i64,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CustomerProfile {
    pub fn net_worth(&self) -> i64 {
        self.total_assets - self.total_liabilities
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One pre-formatted row of a customer's recent activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTransaction {
    pub icon: String,
    pub description: String,
    pub date: NaiveDate,
    pub account_type: String,
    pub amount: String,
    #[serde(default)]
    pub amount_class: String,
    pub status: String,
    #[serde(default)]
    pub status_badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInsights {
    pub total_offers: u64,
    pub conversion_rate: f64,
    pub revenue: i64,
    pub avg_offer_value: i64,
    pub product_performance: Vec<ProductPerformance>,
    pub recent_conversions: Vec<Conversion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    pub name: String,
    pub sent: u64,
    pub accepted: u64,
    pub conversion_rate: f64,
    #[serde(default)]
    pub conversion_badge: Badge,
    pub revenue: i64,
    pub avg_value: i64,
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub time: String,
    pub customer_name: String,
    pub customer_id: String,
    pub product: String,
    pub channel: String,
    pub value: i64,
    pub decision_time: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStatus {
    Approved,
    Rejected,
}

impl Display for DecisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionStatus::Approved => write!(f, "APPROVED"),
            DecisionStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResult {
    pub success: bool,
    pub decision_id: String,
    pub status: DecisionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Reporting window for decision insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Today,
    Week,
    Month,
    Quarter,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Today => "Today",
            TimeRange::Week => "This Week",
            TimeRange::Month => "This Month",
            TimeRange::Quarter => "This Quarter",
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TimeRange::Today => "today",
                TimeRange::Week => "week",
                TimeRange::Month => "month",
                TimeRange::Quarter => "quarter",
            }
        )
    }
}

impl FromStr for TimeRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(TimeRange::Today),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "quarter" => Ok(TimeRange::Quarter),
            _ => Err(anyhow::anyhow!("Invalid time range: {}", s)),
        }
    }
}

/// A push event from the live stream channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl StreamEvent {
    pub const TRANSACTION: &'static str = "TRANSACTION";

    pub fn transaction(txn: &Transaction) -> Self {
        StreamEvent {
            kind: Self::TRANSACTION.to_string(),
            data: serde_json::to_value(txn).unwrap_or_default(),
        }
    }

    /// The carried transaction, if this is a well-formed transaction event.
    pub fn as_transaction(&self) -> Option<Transaction> {
        if self.kind != Self::TRANSACTION {
            return None;
        }
        serde_json::from_value(self.data.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_deserialization() {
        let json = r#"{
            "time": "14:15:55",
            "transactionId": "TXN-005",
            "customerId": "C345678",
            "customerName": "Lisa Williams",
            "type": "Purchase",
            "amount": 70833,
            "location": "Tokyo, Japan",
            "riskScore": 94,
            "status": "BLOCKED",
            "latency": 28
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.transaction_id, "TXN-005");
        assert_eq!(txn.kind, "Purchase");
        assert_eq!(txn.risk_score.value(), 94);
        assert_eq!(txn.status, TransactionStatus::Blocked);
    }

    #[test]
    fn test_transaction_rejects_unknown_status_and_bad_score() {
        let unknown_status = r#"{"time":"1","transactionId":"T","customerId":"C","customerName":"N",
            "type":"P","amount":1,"location":"L","riskScore":10,"status":"SETTLED","latency":1}"#;
        assert!(serde_json::from_str::<Transaction>(unknown_status).is_err());

        let bad_score = r#"{"time":"1","transactionId":"T","customerId":"C","customerName":"N",
            "type":"P","amount":1,"location":"L","riskScore":101,"status":"APPROVED","latency":1}"#;
        assert!(serde_json::from_str::<Transaction>(bad_score).is_err());
    }

    #[test]
    fn test_net_worth_is_derived_not_read() {
        let json = r#"{
            "customerId": "C1",
            "firstName": "Ana",
            "lastName": "Rao",
            "email": "ana@example.com",
            "phone": "+91",
            "city": "Pune",
            "state": "MH",
            "customerSince": "2020-01-01",
            "tier": "Silver",
            "annualIncome": 100,
            "creditScore": 700,
            "lifeStage": "Early-Career",
            "lifetimeValue": 10,
            "totalAssets": 900,
            "totalLiabilities": 400,
            "netWorth": 1
        }"#;

        let profile: CustomerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.net_worth(), 500);
        assert_eq!(profile.tier_badge, Badge::Secondary);
        assert!(profile.products.is_empty());
    }

    #[test]
    fn test_time_range_parsing() {
        assert_eq!("week".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!("QUARTER".parse::<TimeRange>().unwrap(), TimeRange::Quarter);
        assert!("year".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::Month.to_string(), "month");
    }

    #[test]
    fn test_stream_event_transaction_payload() {
        let json = r#"{"type":"TRANSACTION","data":{"time":"1","transactionId":"TXN-9",
            "customerId":"C","customerName":"N","type":"P","amount":1,"location":"L",
            "riskScore":10,"status":"PENDING","latency":1}}"#;
        let event: StreamEvent = serde_json::from_str(json).unwrap();
        let txn = event.as_transaction().unwrap();
        assert_eq!(txn.transaction_id, "TXN-9");

        let other: StreamEvent = serde_json::from_str(r#"{"type":"HEARTBEAT"}"#).unwrap();
        assert!(other.as_transaction().is_none());
    }

    #[test]
    fn test_decision_result_reason_is_optional() {
        let approved: DecisionResult =
            serde_json::from_str(r#"{"success":true,"decisionId":"D1","status":"APPROVED"}"#)
                .unwrap();
        assert_eq!(approved.status, DecisionStatus::Approved);
        assert!(approved.reason.is_none());
        assert!(!serde_json::to_string(&approved).unwrap().contains("reason"));
    }
}
