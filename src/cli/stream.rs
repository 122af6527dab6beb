use super::ui;
use crate::core::badge::{Badge, risk_badge, status_badge};
use crate::core::format::format_inr;
use crate::core::model::StreamEvent;
use crate::providers::EventStream;
use anyhow::Result;
use console::style;
use tracing::{debug, info};

/// One line per pushed event.
pub fn render_event(event: &StreamEvent) -> String {
    let Some(txn) = event.as_transaction() else {
        return ui::style_text(
            &format!("[{}] {}", event.kind, event.data),
            ui::StyleType::Subtle,
        );
    };

    let status = paint(&txn.status.to_string(), status_badge(txn.status));
    let risk = paint(&format!("risk {}%", txn.risk_score), risk_badge(txn.risk_score));
    format!(
        "{} {} {} ({}) {} {} @ {} {} {}",
        txn.time,
        txn.transaction_id,
        txn.customer_name,
        txn.customer_id,
        txn.kind,
        format_inr(txn.amount),
        txn.location,
        risk,
        status
    )
}

fn paint(text: &str, badge: Badge) -> String {
    let styled = match badge {
        Badge::Success => style(text).green(),
        Badge::Warning => style(text).yellow(),
        Badge::Danger => style(text).red().bold(),
        Badge::Info => style(text).blue(),
        Badge::Secondary => style(text).dim(),
    };
    styled.to_string()
}

/// Prints events until `limit` have arrived, the channel closes, or Ctrl-C.
pub async fn run(mut events: EventStream, limit: Option<usize>) -> Result<usize> {
    println!(
        "{}",
        ui::style_text("Live Transaction Events", ui::StyleType::Title)
    );

    let mut received = 0;
    loop {
        tokio::select! {
            event = events.next() => {
                let Some(event) = event else {
                    debug!("Event stream ended");
                    break;
                };
                println!("{}", render_event(&event));
                received += 1;
                if limit.is_some_and(|n| received >= n) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }
    Ok(received)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fixture_data::fixtures;
    use crate::providers::stream::fixture_stream;
    use std::time::Duration;

    #[test]
    fn test_render_transaction_event() {
        let event = StreamEvent::transaction(&fixtures().transactions[4]);
        let line = render_event(&event);
        assert!(line.contains("TXN-005"));
        assert!(line.contains("Lisa Williams"));
        assert!(line.contains("₹70,833"));
        assert!(line.contains("risk 94%"));
        assert!(line.contains("BLOCKED"));
    }

    #[test]
    fn test_render_other_event() {
        let event = StreamEvent {
            kind: "HEARTBEAT".to_string(),
            data: serde_json::json!({"seq": 3}),
        };
        assert!(render_event(&event).contains("[HEARTBEAT]"));
    }

    #[tokio::test]
    async fn test_run_stops_after_limit() {
        let events = fixture_stream(Duration::from_millis(5));
        assert_eq!(run(events, Some(3)).await.unwrap(), 3);
    }
}
