//! Canned dataset served by [`FixtureProvider`](super::fixture::FixtureProvider).
//!
//! Built once per process and only ever handed out by reference or clone.

use crate::core::badge::Badge;
use crate::core::model::{
    Conversion, CustomerProfile, CustomerTransaction, DecisionInsights, FraudAlert,
    MetricsSnapshot, OfferPerformance, Product, ProductPerformance, RecentDecision, RiskScore,
    Transaction, TransactionStatus,
};
use chrono::NaiveDate;
use std::sync::LazyLock;

pub struct Fixtures {
    pub customers: Vec<CustomerProfile>,
    pub transactions: Vec<Transaction>,
    pub metrics: MetricsSnapshot,
    pub customer_activity: Vec<CustomerTransaction>,
    pub insights: DecisionInsights,
}

static FIXTURES: LazyLock<Fixtures> = LazyLock::new(Fixtures::build);

pub fn fixtures() -> &'static Fixtures {
    &FIXTURES
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn score(value: u8) -> RiskScore {
    RiskScore::saturating(value)
}

fn product(kind: &str, balance: i64, account_number: &str) -> Product {
    Product {
        kind: kind.to_string(),
        balance,
        account_number: account_number.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn txn(
    time: &str,
    id: &str,
    customer_id: &str,
    customer_name: &str,
    kind: &str,
    amount: i64,
    location: &str,
    risk: u8,
    status: TransactionStatus,
    latency: u64,
) -> Transaction {
    Transaction {
        time: time.to_string(),
        transaction_id: id.to_string(),
        customer_id: customer_id.to_string(),
        customer_name: customer_name.to_string(),
        kind: kind.to_string(),
        amount,
        location: location.to_string(),
        risk_score: score(risk),
        status,
        latency,
    }
}

fn decision(
    time: &str,
    customer_id: &str,
    decision_type: &str,
    outcome: &str,
    badge: Badge,
    confidence: u8,
    latency: u64,
) -> RecentDecision {
    RecentDecision {
        time: time.to_string(),
        customer_id: customer_id.to_string(),
        decision_type: decision_type.to_string(),
        outcome: outcome.to_string(),
        badge,
        confidence,
        latency,
    }
}

#[allow(clippy::too_many_arguments)]
fn alert(
    time: &str,
    customer_name: &str,
    customer_id: &str,
    transaction: &str,
    amount: i64,
    risk: u8,
    risk_badge: Badge,
    status: &str,
    status_badge: Badge,
) -> FraudAlert {
    FraudAlert {
        time: time.to_string(),
        customer_name: customer_name.to_string(),
        customer_id: customer_id.to_string(),
        transaction: transaction.to_string(),
        amount,
        risk_score: score(risk),
        risk_badge,
        status: status.to_string(),
        status_badge,
    }
}

fn offer(product: &str, sent: u64, conversions: u64, rate: f64, revenue: i64) -> OfferPerformance {
    OfferPerformance {
        product: product.to_string(),
        sent,
        conversions,
        conversion_rate: rate,
        revenue,
    }
}

fn activity(
    icon: &str,
    description: &str,
    on: NaiveDate,
    account_type: &str,
    amount: &str,
) -> CustomerTransaction {
    let amount_class = if amount.starts_with('+') {
        "positive"
    } else {
        "negative"
    };
    CustomerTransaction {
        icon: icon.to_string(),
        description: description.to_string(),
        date: on,
        account_type: account_type.to_string(),
        amount: amount.to_string(),
        amount_class: amount_class.to_string(),
        status: "COMPLETED".to_string(),
        status_badge: Badge::Success,
    }
}

#[allow(clippy::too_many_arguments)]
fn performance(
    name: &str,
    sent: u64,
    accepted: u64,
    rate: f64,
    badge: Badge,
    revenue: i64,
    avg_value: i64,
    roi: f64,
) -> ProductPerformance {
    ProductPerformance {
        name: name.to_string(),
        sent,
        accepted,
        conversion_rate: rate,
        conversion_badge: badge,
        revenue,
        avg_value,
        roi,
    }
}

fn conversion(
    time: &str,
    customer_name: &str,
    customer_id: &str,
    product: &str,
    channel: &str,
    value: i64,
    decision_time: u64,
) -> Conversion {
    Conversion {
        time: time.to_string(),
        customer_name: customer_name.to_string(),
        customer_id: customer_id.to_string(),
        product: product.to_string(),
        channel: channel.to_string(),
        value,
        decision_time,
    }
}

impl Fixtures {
    #[rustfmt::skip]
    fn build() -> Self {
        use TransactionStatus::*;

        let customers = vec![
            CustomerProfile {
                customer_id: "C123456".to_string(),
                first_name: "Sarah".to_string(),
                last_name: "Johnson".to_string(),
                email: "sarah.johnson@email.com".to_string(),
                phone: "+91-22-5550-0101".to_string(),
                city: "Mumbai".to_string(),
                state: "MH".to_string(),
                customer_since: date(2018, 3, 12),
                tier: "Gold".to_string(),
                tier_badge: Badge::Success,
                annual_income: 7_916_000,
                credit_score: 780,
                life_stage: "Mid-Career".to_string(),
                lifetime_value: 11_870_000,
                total_assets: 15_000_000,
                total_liabilities: 5_000_000,
                products: vec![
                    product("Checking Account", 1_200_000, "CHK-123456"),
                    product("Savings Account", 3_500_000, "SAV-123456"),
                    product("Credit Card", 280_000, "CC-123456"),
                    product("Investment Account", 6_000_000, "INV-123456"),
                ],
            },
            CustomerProfile {
                customer_id: "C234567".to_string(),
                first_name: "Tom".to_string(),
                last_name: "Anderson".to_string(),
                email: "tom.anderson@email.com".to_string(),
                phone: "+91-22-5550-0102".to_string(),
                city: "Mumbai".to_string(),
                state: "MH".to_string(),
                customer_since: date(2019, 6, 18),
                tier: "Gold".to_string(),
                tier_badge: Badge::Success,
                annual_income: 6_498_000,
                credit_score: 785,
                life_stage: "Mid-Career".to_string(),
                lifetime_value: 8_199_000,
                total_assets: 12_000_000,
                total_liabilities: 4_200_000,
                products: vec![
                    product("Checking Account", 1_520_000, "CHK-234567"),
                    product("Credit Card", 280_000, "CC-234567"),
                    product("Auto Loan", -1_850_000, "LOAN-234567"),
                ],
            },
        ];

        let transactions = vec![
            txn("14:23:45", "TXN-001", "C123456", "Sarah Johnson", "Deposit", 6_250_000, "Mumbai, MH", 12, Approved, 42),
            txn("14:21:33", "TXN-002", "C789012", "John Smith", "Purchase", 154_166, "Mumbai, MH", 67, Pending, 38),
            txn("14:19:22", "TXN-003", "C234567", "Tom Anderson", "ATM Withdrawal", 16_666, "Mumbai, MH", 8, Approved, 35),
            txn("14:17:11", "TXN-004", "C456789", "Maria Rodriguez", "Transfer", 416_666, "Pune, MH", 15, Approved, 41),
            txn("14:15:55", "TXN-005", "C345678", "Lisa Williams", "Purchase", 70_833, "Tokyo, Japan", 94, Blocked, 28),
            txn("14:13:44", "TXN-006", "C567890", "Emily Chen", "Payment", 37_500, "Mumbai, MH", 5, Approved, 39),
            txn("14:11:28", "TXN-007", "C678901", "Michael Brown", "Purchase", 270_833, "Goa, GA", 22, Approved, 44),
            txn("14:09:17", "TXN-008", "C890123", "David Martinez", "ATM Withdrawal", 8_333, "Pune, MH", 6, Approved, 33),
            txn("14:07:05", "TXN-009", "C901234", "Jennifer Garcia", "Purchase", 7_499, "Mumbai, MH", 11, Approved, 37),
            txn("14:04:52", "TXN-010", "C012345", "Robert Lee", "Purchase", 208_333, "Mumbai, MH", 78, Review, 45),
        ];

        let metrics = MetricsSnapshot {
            transactions_today: 8_247_000,
            transaction_growth: 12.0,
            decisions_made: 1_847_000,
            decisions_growth: 18.0,
            fraud_blocked: 37_500_000_000,
            fraud_count: 4782,
            cross_sell_revenue: 45_800_000_000,
            revenue_growth: 28.0,
            api_response_time: 42,
            throughput: 5200,
            uptime: 99.97,
            active_users: 847_000,
            recent_decisions: vec![
                decision("14:23:45", "C123456", "Cross-Sell", "OFFER_SENT", Badge::Success, 88, 42),
                decision("14:21:33", "C789012", "Fraud Detection", "REVIEW", Badge::Warning, 67, 38),
                decision("14:19:22", "C234567", "Service Routing", "ROUTED", Badge::Info, 95, 35),
                decision("14:17:11", "C456789", "Credit Decision", "APPROVED", Badge::Success, 82, 41),
                decision("14:15:55", "C345678", "Fraud Detection", "BLOCKED", Badge::Danger, 94, 28),
                decision("14:13:44", "C567890", "Cross-Sell", "OFFER_SENT", Badge::Success, 74, 39),
                decision("14:11:28", "C678901", "Service Routing", "ROUTED", Badge::Info, 89, 44),
                decision("14:09:17", "C890123", "Fraud Detection", "APPROVED", Badge::Success, 6, 33),
                decision("14:07:05", "C901234", "Cross-Sell", "OFFER_SENT", Badge::Success, 79, 37),
                decision("14:04:52", "C012345", "Fraud Detection", "REVIEW", Badge::Warning, 78, 45),
            ],
            fraud_alerts: vec![
                alert("14:15:55", "Lisa Williams", "C345678", "Electronics Purchase", 70_833, 94, Badge::Danger, "BLOCKED", Badge::Danger),
                alert("14:04:52", "Robert Lee", "C012345", "Auto Purchase", 208_333, 78, Badge::Warning, "UNDER_REVIEW", Badge::Warning),
                alert("13:58:22", "Amanda Taylor", "C112233", "Wire Transfer", 833_333, 85, Badge::Danger, "UNDER_REVIEW", Badge::Warning),
            ],
            top_offers: vec![
                offer("Index Fund Portfolio", 847, 237, 28.0, 20_833_000),
                offer("Travel Rewards Card", 1240, 354, 29.0, 9_583_000),
                offer("Premium Savings", 634, 152, 24.0, 6_250_000),
                offer("Personal Loan", 892, 187, 21.0, 10_416_000),
                offer("Mortgage Pre-Approval", 456, 137, 30.0, 83_333_000),
            ],
        };

        let customer_activity = vec![
            activity("↓", "Mobile Deposit", date(2025, 11, 13), "Checking", "+₹62,50,000"),
            activity("↑", "ATM Withdrawal", date(2025, 11, 12), "Checking", "-₹16,666"),
            activity("🛒", "Fresh Market", date(2025, 11, 12), "Credit Card", "-₹20,479"),
            activity("💳", "Amazon Purchase", date(2025, 11, 11), "Credit Card", "-₹7,499"),
            activity("↔", "Transfer to Savings", date(2025, 11, 10), "Checking", "-₹41,666"),
            activity("↓", "Salary Deposit", date(2025, 11, 10), "Checking", "+₹5,41,666"),
            activity("🛒", "Petrol Pump", date(2025, 11, 9), "Credit Card", "-₹3,791"),
            activity("💳", "Restaurant", date(2025, 11, 8), "Credit Card", "-₹10,416"),
            activity("🛒", "Grocery Store", date(2025, 11, 7), "Debit Card", "-₹8,333"),
            activity("↑", "ATM Withdrawal", date(2025, 11, 6), "Checking", "-₹25,000"),
        ];

        let insights = DecisionInsights {
            total_offers: 9215,
            conversion_rate: 28.0,
            revenue: 45_800_000_000,
            avg_offer_value: 208_333,
            product_performance: vec![
                performance("Index Fund Portfolio", 847, 237, 28.0, Badge::Success, 20_833_000, 208_333, 5.6),
                performance("Travel Rewards Card", 1240, 354, 29.0, Badge::Success, 9_583_000, 95_833, 4.8),
                performance("Mortgage Pre-Approval", 456, 137, 30.0, Badge::Success, 83_333_000, 833_333, 12.4),
                performance("Premium Savings", 634, 152, 24.0, Badge::Success, 6_250_000, 62_500, 3.2),
                performance("Personal Loan", 892, 187, 21.0, Badge::Warning, 10_416_000, 104_166, 6.7),
                performance("Auto Loan", 745, 149, 20.0, Badge::Warning, 14_166_000, 141_666, 8.2),
                performance("Business Credit Card", 523, 94, 18.0, Badge::Warning, 8_333_000, 83_333, 4.1),
                performance("Home Equity Line", 389, 62, 16.0, Badge::Warning, 20_833_000, 208_333, 9.8),
            ],
            recent_conversions: vec![
                conversion("14:23:45", "Sarah Johnson", "C123456", "Index Fund Portfolio", "Mobile App", 208_333, 42),
                conversion("14:08:22", "Tom Anderson", "C234567", "Travel Rewards Card", "Email", 95_833, 38),
                conversion("13:52:15", "Maria Rodriguez", "C345678", "Mortgage Pre-Approval", "Branch", 833_333, 128),
                conversion("13:41:33", "John Smith", "C456789", "Premium Savings", "Online Banking", 62_500, 45),
                conversion("13:28:47", "Emily Chen", "C567890", "Personal Loan", "Mobile App", 104_166, 52),
                conversion("13:15:11", "Michael Brown", "C678901", "Auto Loan", "Branch", 141_666, 156),
                conversion("13:02:55", "Lisa Williams", "C789012", "Business Credit Card", "Online Banking", 83_333, 48),
                conversion("12:48:22", "David Martinez", "C890123", "Index Fund Portfolio", "Personal Banker", 208_333, 87),
            ],
        };

        Fixtures {
            customers,
            transactions,
            metrics,
            customer_activity,
            insights,
        }
    }
}
