use super::ui;
use crate::core::model::{DecisionResult, DecisionStatus};
use crate::core::provider::DataProvider;
use anyhow::{Result, bail};
use tracing::info;

/// Operator action on a pending decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionAction {
    Approve,
    Reject { reason: String },
}

pub fn render(result: &DecisionResult) -> String {
    let style = match (result.success, result.status) {
        (false, _) => ui::StyleType::Error,
        (true, DecisionStatus::Approved) => ui::StyleType::Value,
        (true, DecisionStatus::Rejected) => ui::StyleType::Warning,
    };
    let mut line = format!("Decision {}: {}", result.decision_id, result.status);
    if let Some(reason) = &result.reason {
        line.push_str(&format!(" ({reason})"));
    }
    if !result.success {
        line.push_str(" - not applied");
    }
    ui::style_text(&line, style)
}

pub async fn run(
    provider: &dyn DataProvider,
    decision_id: &str,
    action: DecisionAction,
) -> Result<()> {
    if let DecisionAction::Reject { reason } = &action
        && reason.trim().is_empty()
    {
        bail!("A rejection reason is required");
    }

    let spinner = ui::new_spinner(&format!("Submitting decision {decision_id}..."));
    let result = match &action {
        DecisionAction::Approve => provider.approve_decision(decision_id).await,
        DecisionAction::Reject { reason } => provider.reject_decision(decision_id, reason).await,
    };
    spinner.finish_and_clear();

    match result {
        Ok(result) => {
            info!(decision_id, status = %result.status, "Decision submitted");
            println!("{}", render(&result));
        }
        Err(e) => println!(
            "{}",
            ui::style_text(
                &format!("Could not submit decision {decision_id}: {e}"),
                ui::StyleType::Error
            )
        ),
    }
    Ok(())
}
