use super::live::{self, LiveOptions};
use super::ui;
use crate::core::badge::{Badge, risk_badge, status_label_badge};
use crate::core::format::{
    format_count, format_crore, format_growth, format_inr, format_latency, format_percent,
};
use crate::core::model::{FraudAlert, MetricsSnapshot};
use crate::core::poller::{Poller, Presentation, ViewState};
use crate::core::provider::DataProvider;
use anyhow::Result;
use comfy_table::Cell;
use std::sync::Arc;
use std::time::Duration;

pub fn metrics_poller(
    provider: Arc<dyn DataProvider>,
    interval: Duration,
) -> Poller<(), MetricsSnapshot> {
    Poller::new("dashboard", (), interval, move |()| {
        let provider = Arc::clone(&provider);
        async move { provider.dashboard_metrics().await }
    })
}

pub fn render(state: &ViewState<MetricsSnapshot>) -> String {
    match state.presentation() {
        Presentation::Loading => {
            ui::style_text("Loading dashboard metrics…", ui::StyleType::Subtle)
        }
        Presentation::Unavailable(error) => ui::style_text(
            &format!("Could not load dashboard metrics: {error}"),
            ui::StyleType::Error,
        ),
        Presentation::Ready { data, stale_error } => {
            let mut output = render_metrics(data);
            if let Some(error) = stale_error {
                output.push_str(&format!(
                    "\n{}",
                    ui::style_text(
                        &format!("Last refresh failed, showing previous data: {error}"),
                        ui::StyleType::Warning
                    )
                ));
            }
            output
        }
    }
}

/// Risk and status badges for an alert. Older payloads omit them, so they
/// are derived from the score and status label then.
fn alert_badges(alert: &FraudAlert) -> (Badge, Badge) {
    let risk = match alert.risk_badge {
        Badge::Secondary => risk_badge(alert.risk_score),
        badge => badge,
    };
    let status = match alert.status_badge {
        Badge::Secondary => status_label_badge(&alert.status),
        badge => badge,
    };
    (risk, status)
}

pub fn render_metrics(metrics: &MetricsSnapshot) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text(
            "Real-Time Decision Automation Dashboard",
            ui::StyleType::Title
        )
    );

    let headline = ui::key_value_table([
        (
            "Transactions Today",
            format!(
                "{}  {} vs yesterday",
                format_count(metrics.transactions_today),
                format_growth(metrics.transaction_growth)
            ),
        ),
        (
            "Decisions Made",
            format!(
                "{}  {} vs yesterday",
                format_count(metrics.decisions_made),
                format_growth(metrics.decisions_growth)
            ),
        ),
        (
            "Fraud Blocked",
            format!(
                "{}  {} transactions",
                format_crore(metrics.fraud_blocked),
                metrics.fraud_count
            ),
        ),
        (
            "Cross-Sell Revenue",
            format!(
                "{}  {} conversion",
                format_crore(metrics.cross_sell_revenue),
                format_growth(metrics.revenue_growth)
            ),
        ),
    ]);
    output.push_str(&headline.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section("System Health", "Real-time platform performance"));
    let health = ui::key_value_table([
        (
            "API Response Time",
            format!("{} (P95)", format_latency(metrics.api_response_time)),
        ),
        (
            "Decision Engine Throughput",
            format!("{}/sec", format_count(metrics.throughput)),
        ),
        ("System Uptime", format_percent(metrics.uptime)),
        ("Active Users", format_count(metrics.active_users)),
    ]);
    output.push_str(&health.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section(
        "Recent Decision Outcomes",
        "Last 10 automated decisions",
    ));
    let mut decisions = ui::new_styled_table();
    decisions.set_header(vec![
        ui::header_cell("Time"),
        ui::header_cell("Customer ID"),
        ui::header_cell("Decision Type"),
        ui::header_cell("Outcome"),
        ui::header_cell("Confidence"),
        ui::header_cell("Latency"),
    ]);
    for decision in &metrics.recent_decisions {
        decisions.add_row(vec![
            Cell::new(&decision.time),
            Cell::new(&decision.customer_id),
            Cell::new(&decision.decision_type),
            ui::badge_cell(&decision.outcome, decision.badge),
            Cell::new(format!("{}%", decision.confidence)),
            Cell::new(format_latency(decision.latency)),
        ]);
    }
    output.push_str(&decisions.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section(
        "Active Fraud Alerts",
        "Transactions flagged for review",
    ));
    let mut alerts = ui::new_styled_table();
    alerts.set_header(vec![
        ui::header_cell("Alert Time"),
        ui::header_cell("Customer"),
        ui::header_cell("Transaction"),
        ui::header_cell("Amount"),
        ui::header_cell("Risk Score"),
        ui::header_cell("Status"),
    ]);
    for alert in &metrics.fraud_alerts {
        let (risk, status_badge) = alert_badges(alert);
        alerts.add_row(vec![
            Cell::new(&alert.time),
            Cell::new(format!("{}\n{}", alert.customer_name, alert.customer_id)),
            Cell::new(&alert.transaction),
            ui::amount_cell(format_inr(alert.amount)),
            ui::badge_cell(&format!("{}%", alert.risk_score), risk),
            ui::badge_cell(&alert.status, status_badge),
        ]);
    }
    output.push_str(&alerts.to_string());
    output.push_str("\n\n");

    output.push_str(&ui::section(
        "Top Performing Cross-Sell Offers",
        "Highest conversion rates today",
    ));
    let mut offers = ui::new_styled_table();
    offers.set_header(vec![
        ui::header_cell("Product"),
        ui::header_cell("Offers Sent"),
        ui::header_cell("Conversions"),
        ui::header_cell("Conversion Rate"),
        ui::header_cell("Revenue"),
    ]);
    for offer in &metrics.top_offers {
        offers.add_row(vec![
            Cell::new(&offer.product),
            ui::amount_cell(offer.sent.to_string()),
            ui::amount_cell(offer.conversions.to_string()),
            ui::badge_cell(&format_percent(offer.conversion_rate), Badge::Success),
            ui::amount_cell(format_inr(offer.revenue)),
        ]);
    }
    output.push_str(&offers.to_string());

    output
}

pub async fn run(
    provider: Arc<dyn DataProvider>,
    interval: Duration,
    options: LiveOptions,
) -> Result<()> {
    let mut poller = metrics_poller(provider, interval);
    live::drive(&mut poller, options, |_, _| {}, |_, state| render(state)).await?;
    Ok(())
}
