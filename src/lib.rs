pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::decisions::DecisionAction;
use crate::cli::live::LiveOptions;
use crate::core::config::AppConfig;
use crate::core::filter::TransactionFilter;
use crate::core::model::TimeRange;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// A dashboard screen or operator action, independent of how it was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Dashboard {
        ticks: Option<usize>,
    },
    Transactions {
        filter: TransactionFilter,
        auto_refresh: bool,
        ticks: Option<usize>,
    },
    Customer {
        customer_id: Option<String>,
    },
    Insights {
        range: TimeRange,
    },
    Approve {
        decision_id: String,
    },
    Reject {
        decision_id: String,
        reason: String,
    },
    Stream {
        events: Option<usize>,
    },
}

/// Loads config from `config_path` (or the default location) and runs `command`.
pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("bankdash starting...");

    let config = match config_path {
        Some(path) => {
            AppConfig::load_from_path(path)?.with_overrides(|key| std::env::var(key).ok())
        }
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    run_with_config(command, &config).await
}

pub async fn run_with_config(command: AppCommand, config: &AppConfig) -> Result<()> {
    let provider = || providers::build_provider(config).context("Failed to create data provider");
    let refresh = &config.refresh;

    match command {
        AppCommand::Dashboard { ticks } => {
            cli::dashboard::run(
                provider()?,
                refresh.dashboard_interval(),
                LiveOptions::detect(ticks),
            )
            .await
        }
        AppCommand::Transactions {
            filter,
            auto_refresh,
            ticks,
        } => {
            cli::transactions::run(
                provider()?,
                filter,
                auto_refresh,
                refresh.transactions_interval(),
                LiveOptions::detect(ticks),
            )
            .await
        }
        AppCommand::Customer { customer_id } => {
            let customer_id = customer_id.unwrap_or_else(|| config.default_customer_id.clone());
            cli::customer::run(provider()?.as_ref(), &customer_id).await
        }
        AppCommand::Insights { range } => cli::insights::run(provider()?.as_ref(), range).await,
        AppCommand::Approve { decision_id } => {
            cli::decisions::run(provider()?.as_ref(), &decision_id, DecisionAction::Approve).await
        }
        AppCommand::Reject {
            decision_id,
            reason,
        } => {
            cli::decisions::run(
                provider()?.as_ref(),
                &decision_id,
                DecisionAction::Reject { reason },
            )
            .await
        }
        AppCommand::Stream { events } => {
            let stream = providers::subscribe(config)
                .await
                .context("Failed to open event stream")?;
            cli::stream::run(stream, events).await?;
            Ok(())
        }
    }
}
