use anyhow::Result;
use bankdash::core::filter::TransactionFilter;
use bankdash::core::log::init_logging;
use bankdash::core::model::TimeRange;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl TryFrom<Commands> for bankdash::AppCommand {
    type Error = anyhow::Error;

    fn try_from(cmd: Commands) -> Result<bankdash::AppCommand> {
        Ok(match cmd {
            Commands::Dashboard { ticks } => bankdash::AppCommand::Dashboard { ticks },
            Commands::Transactions {
                filter,
                no_auto_refresh,
                ticks,
            } => bankdash::AppCommand::Transactions {
                filter: filter.parse::<TransactionFilter>()?,
                auto_refresh: !no_auto_refresh,
                ticks,
            },
            Commands::Customer { customer_id } => bankdash::AppCommand::Customer { customer_id },
            Commands::Insights { range } => bankdash::AppCommand::Insights {
                range: range.parse::<TimeRange>()?,
            },
            Commands::Approve { decision_id } => bankdash::AppCommand::Approve { decision_id },
            Commands::Reject {
                decision_id,
                reason,
            } => bankdash::AppCommand::Reject {
                decision_id,
                reason,
            },
            Commands::Stream { events } => bankdash::AppCommand::Stream { events },
            Commands::Setup => anyhow::bail!("Setup command should be handled separately"),
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Live decision automation dashboard
    Dashboard {
        /// Exit after this many refreshes
        #[arg(long)]
        ticks: Option<usize>,
    },
    /// Live transaction monitor
    Transactions {
        /// One of: all, approved, blocked, pending, high-risk
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// Fetch once instead of refreshing on an interval
        #[arg(long)]
        no_auto_refresh: bool,
        /// Exit after this many refreshes
        #[arg(long)]
        ticks: Option<usize>,
    },
    /// Customer 360 profile
    Customer {
        /// Customer ID, defaults to `default_customer_id` from the config
        customer_id: Option<String>,
    },
    /// Cross-sell performance and decision outcomes
    Insights {
        /// One of: today, week, month, quarter
        #[arg(short, long, default_value = "today")]
        range: String,
    },
    /// Approve a pending decision
    Approve { decision_id: String },
    /// Reject a pending decision
    Reject {
        decision_id: String,
        #[arg(short, long)]
        reason: String,
    },
    /// Follow pushed transaction events
    Stream {
        /// Exit after this many events
        #[arg(long)]
        events: Option<usize>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => bankdash::cli::setup::setup_at_path(path),
            None => bankdash::cli::setup::setup(),
        },
        Some(cmd) => match bankdash::AppCommand::try_from(cmd) {
            Ok(command) => bankdash::run_command(command, cli.config_path.as_deref()).await,
            Err(e) => Err(e),
        },
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
