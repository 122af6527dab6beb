use bankdash::AppCommand;
use bankdash::core::filter::TransactionFilter;
use bankdash::core::model::TimeRange;
use std::fs;
use tempfile::NamedTempFile;
use tracing::info;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod test_utils {
    use super::*;

    pub fn live_config(base_url: &str, extra: &str) -> NamedTempFile {
        let config_file = NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
data_source:
  base_url: "{base_url}"
  use_mock: false
{extra}
"#
        );
        fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }

    pub fn fixture_config(extra: &str) -> NamedTempFile {
        let config_file = NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
data_source:
  use_mock: true
  simulate_latency: false
{extra}
"#
        );
        fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }

    pub async fn run(command: AppCommand, config: &NamedTempFile) -> anyhow::Result<()> {
        bankdash::run_command(command, Some(config.path().to_str().unwrap())).await
    }

    pub const TRANSACTIONS_JSON: &str = r#"[
        {
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
        }
    ]"#;
}

#[test_log::test(tokio::test)]
async fn test_live_dashboard_single_refresh() {
    let mock_server = MockServer::start().await;
    let metrics = serde_json::to_string(&bankdash::providers::fixture_data::fixtures().metrics)
        .expect("Failed to serialize metrics");

    Mock::given(method("GET"))
        .and(path("/metrics/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string(metrics))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_utils::live_config(&mock_server.uri(), "");
    let result = test_utils::run(AppCommand::Dashboard { ticks: Some(1) }, &config).await;
    assert!(
        result.is_ok(),
        "Dashboard failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_backend_error_is_rendered_not_raised() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metrics/dashboard"))
        .respond_with(ResponseTemplate::new(500).set_body_string("engine down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_utils::live_config(&mock_server.uri(), "");
    let result = test_utils::run(AppCommand::Dashboard { ticks: Some(1) }, &config).await;
    assert!(result.is_ok(), "A failed refresh should not abort the view");
}

#[test_log::test(tokio::test)]
async fn test_transactions_filter_is_sent_to_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/stream"))
        .and(query_param("filter", "blocked"))
        .respond_with(ResponseTemplate::new(200).set_body_string(test_utils::TRANSACTIONS_JSON))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_utils::live_config(&mock_server.uri(), "");
    let result = test_utils::run(
        AppCommand::Transactions {
            filter: TransactionFilter::Blocked,
            auto_refresh: false,
            ticks: Some(1),
        },
        &config,
    )
    .await;
    assert!(result.is_ok(), "Transactions failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_transactions_auto_refresh_polls_repeatedly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/stream"))
        .and(query_param("filter", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(test_utils::TRANSACTIONS_JSON))
        .expect(3..)
        .mount(&mock_server)
        .await;

    let config = test_utils::live_config(
        &mock_server.uri(),
        "refresh:\n  transactions_interval_ms: 50\n",
    );
    let result = test_utils::run(
        AppCommand::Transactions {
            filter: TransactionFilter::All,
            auto_refresh: true,
            ticks: Some(3),
        },
        &config,
    )
    .await;
    assert!(result.is_ok(), "Transactions failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_unknown_live_customer_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/C999999"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers/C999999/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = test_utils::live_config(&mock_server.uri(), "");
    let result = test_utils::run(
        AppCommand::Customer {
            customer_id: Some("C999999".to_string()),
        },
        &config,
    )
    .await;
    assert!(result.is_ok(), "Customer failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_customer_defaults_to_configured_id() {
    let mock_server = MockServer::start().await;
    let fixtures = bankdash::providers::fixture_data::fixtures();
    let profile = serde_json::to_string(&fixtures.customers[1]).unwrap();
    let activity = serde_json::to_string(&fixtures.customer_activity).unwrap();

    Mock::given(method("GET"))
        .and(path("/customers/C234567"))
        .respond_with(ResponseTemplate::new(200).set_body_string(profile))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers/C234567/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_string(activity))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_utils::live_config(&mock_server.uri(), "default_customer_id: \"C234567\"");
    let result = test_utils::run(AppCommand::Customer { customer_id: None }, &config).await;
    assert!(result.is_ok(), "Customer failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_insights_range_is_sent_to_backend() {
    let mock_server = MockServer::start().await;
    let insights =
        serde_json::to_string(&bankdash::providers::fixture_data::fixtures().insights).unwrap();

    Mock::given(method("GET"))
        .and(path("/decisions/insights"))
        .and(query_param("range", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_string(insights))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_utils::live_config(&mock_server.uri(), "");
    let result = test_utils::run(
        AppCommand::Insights {
            range: TimeRange::Month,
        },
        &config,
    )
    .await;
    assert!(result.is_ok(), "Insights failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_approve_and_reject_post_to_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/decisions/D-100/approve"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"success":true,"decisionId":"D-100","status":"APPROVED"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/decisions/D-101/reject"))
        .and(body_json(serde_json::json!({"reason": "Manual review failed"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success":true,"decisionId":"D-101","status":"REJECTED","reason":"Manual review failed"}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_utils::live_config(&mock_server.uri(), "");
    let approved = test_utils::run(
        AppCommand::Approve {
            decision_id: "D-100".to_string(),
        },
        &config,
    )
    .await;
    assert!(approved.is_ok(), "Approve failed with: {:?}", approved.err());

    let rejected = test_utils::run(
        AppCommand::Reject {
            decision_id: "D-101".to_string(),
            reason: "Manual review failed".to_string(),
        },
        &config,
    )
    .await;
    assert!(rejected.is_ok(), "Reject failed with: {:?}", rejected.err());
}

#[test_log::test(tokio::test)]
async fn test_fixture_flow_end_to_end() {
    let config = test_utils::fixture_config(
        "refresh:\n  dashboard_interval_ms: 20\n  transactions_interval_ms: 20\n  stream_interval_ms: 10\n",
    );

    for command in [
        AppCommand::Dashboard { ticks: Some(2) },
        AppCommand::Transactions {
            filter: TransactionFilter::HighRisk,
            auto_refresh: true,
            ticks: Some(2),
        },
        AppCommand::Customer {
            customer_id: Some("C999999".to_string()),
        },
        AppCommand::Insights {
            range: TimeRange::Quarter,
        },
        AppCommand::Approve {
            decision_id: "D-1".to_string(),
        },
        AppCommand::Stream { events: Some(2) },
    ] {
        info!(?command, "Running against fixtures");
        let result = test_utils::run(command.clone(), &config).await;
        assert!(
            result.is_ok(),
            "{command:?} failed with: {:?}",
            result.err()
        );
    }
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_fails() {
    let result = bankdash::run_command(
        AppCommand::Dashboard { ticks: Some(1) },
        Some("/nonexistent/bankdash/config.yaml"),
    )
    .await;
    let err = result.expect_err("A missing explicit config should be an error");
    assert!(err.to_string().contains("Failed to read config file"));
}
