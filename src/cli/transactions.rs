use super::live::{self, LiveOptions, ViewCommand};
use super::ui;
use crate::core::badge::{risk_badge, status_badge};
use crate::core::filter::{TransactionFilter, count_by_status};
use crate::core::format::{format_inr, format_latency};
use crate::core::model::Transaction;
use crate::core::poller::{Poller, Presentation, ViewState};
use crate::core::provider::DataProvider;
use anyhow::Result;
use comfy_table::Cell;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub type TransactionPoller = Poller<TransactionFilter, Vec<Transaction>>;

pub fn transactions_poller(
    provider: Arc<dyn DataProvider>,
    filter: TransactionFilter,
    interval: Duration,
) -> TransactionPoller {
    Poller::new("transactions", filter, interval, move |filter| {
        let provider = Arc::clone(&provider);
        async move { provider.transaction_stream(filter).await }
    })
}

/// Applies a keyboard command to the running view.
pub fn apply_command(poller: &mut TransactionPoller, command: ViewCommand) {
    match command {
        ViewCommand::Filter(filter) => {
            info!(%filter, "Switching transaction filter");
            poller.reconfigure(filter);
        }
        ViewCommand::ToggleAutoRefresh => {
            let enabled = !poller.auto_refresh();
            info!(enabled, "Toggling auto-refresh");
            poller.set_auto_refresh(enabled);
        }
        ViewCommand::Refresh => poller.refresh(),
        ViewCommand::Quit => {}
    }
}

fn header(poller: &TransactionPoller) -> String {
    let refresh = if poller.auto_refresh() {
        format!("Auto-refresh every {}s", poller.interval().as_secs_f64())
    } else {
        "Auto-refresh off".to_string()
    };
    format!(
        "{}\n{}\n{}\n",
        ui::style_text("Real-Time Transaction Monitor", ui::StyleType::Title),
        ui::style_text(
            "Live transaction stream with fraud detection",
            ui::StyleType::Subtle
        ),
        ui::style_text(
            &format!("Filter: {} • {}", poller.params().label(), refresh),
            ui::StyleType::Label
        ),
    )
}

pub fn render(poller: &TransactionPoller, state: &ViewState<Vec<Transaction>>) -> String {
    let mut output = header(poller);
    output.push('\n');
    match state.presentation() {
        Presentation::Loading => {
            output.push_str(&ui::style_text("Loading transactions…", ui::StyleType::Subtle))
        }
        Presentation::Unavailable(error) => output.push_str(&ui::style_text(
            &format!("Could not load transactions: {error}"),
            ui::StyleType::Error,
        )),
        Presentation::Ready { data, stale_error } => {
            output.push_str(&render_transactions(data));
            if let Some(error) = stale_error {
                output.push_str(&format!(
                    "\n{}",
                    ui::style_text(
                        &format!("Last refresh failed, showing previous data: {error}"),
                        ui::StyleType::Warning
                    )
                ));
            }
        }
    }
    output
}

pub fn render_transactions(transactions: &[Transaction]) -> String {
    let counts = count_by_status(transactions);
    let summary = ui::key_value_table([
        ("Approved", counts.approved.to_string()),
        ("Blocked", counts.blocked.to_string()),
        ("Pending", counts.pending.to_string()),
        ("Review", counts.review.to_string()),
        ("Total", counts.total().to_string()),
    ]);

    let mut output = summary.to_string();
    output.push_str("\n\n");
    output.push_str(&ui::section(
        "Live Transaction Stream",
        &format!("Showing {} transactions", transactions.len()),
    ));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Time"),
        ui::header_cell("Transaction ID"),
        ui::header_cell("Customer"),
        ui::header_cell("Type"),
        ui::header_cell("Amount"),
        ui::header_cell("Location"),
        ui::header_cell("Risk Score"),
        ui::header_cell("Status"),
        ui::header_cell("Latency"),
    ]);
    for txn in transactions {
        table.add_row(vec![
            Cell::new(&txn.time),
            Cell::new(&txn.transaction_id),
            Cell::new(format!("{}\n{}", txn.customer_name, txn.customer_id)),
            Cell::new(&txn.kind),
            ui::amount_cell(format_inr(txn.amount)),
            Cell::new(&txn.location),
            ui::badge_cell(&format!("{}%", txn.risk_score), risk_badge(txn.risk_score)),
            ui::badge_cell(&txn.status.to_string(), status_badge(txn.status)),
            Cell::new(format_latency(txn.latency)),
        ]);
    }
    output.push_str(&table.to_string());
    output
}

/// Key help for the interactive monitor, listing every filter name.
pub fn command_help() -> String {
    let filters = TransactionFilter::ALL.map(|filter| filter.to_string());
    format!(
        "Type a filter ({}), a: auto-refresh, r: refresh, q: quit",
        filters.join(", ")
    )
}

pub async fn run(
    provider: Arc<dyn DataProvider>,
    filter: TransactionFilter,
    auto_refresh: bool,
    interval: Duration,
    options: LiveOptions,
) -> Result<()> {
    let mut poller =
        transactions_poller(provider, filter, interval).with_auto_refresh(auto_refresh);
    if options.interactive {
        println!("{}", ui::style_text(&command_help(), ui::StyleType::Subtle));
    }
    live::drive(&mut poller, options, apply_command, render).await?;
    Ok(())
}
