//! Push channel of `{type, data}` events.
//!
//! The live source reads text frames from the backend's `/stream` WebSocket.
//! The fixture source cycles through the canned transactions on a timer.

use super::fixture_data::fixtures;
use crate::core::model::{StreamEvent, Transaction};
use crate::core::provider::ProviderError;
use chrono::Local;
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

const CHANNEL_CAPACITY: usize = 32;

/// Receiving end of a push subscription. Dropping it stops the producer.
pub struct EventStream {
    receiver: mpsc::Receiver<StreamEvent>,
    task: JoinHandle<()>,
}

impl EventStream {
    /// Next event, or `None` once the producer has finished.
    pub async fn next(&mut self) -> Option<StreamEvent> {
        self.receiver.recv().await
    }
}

impl Drop for EventStream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Emits one `TRANSACTION` event per `interval`, walking the fixture table
/// in order and wrapping around.
pub fn fixture_stream(interval: Duration) -> EventStream {
    let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
    let task = tokio::spawn(async move {
        let table = &fixtures().transactions;
        for txn in table.iter().cycle() {
            tokio::time::sleep(interval).await;
            let stamped = Transaction {
                time: Local::now().format("%-H:%M:%S").to_string(),
                ..txn.clone()
            };
            if sender.send(StreamEvent::transaction(&stamped)).await.is_err() {
                break;
            }
        }
    });

    EventStream { receiver, task }
}

/// `http://host/api` becomes `ws://host/api/stream`.
pub fn stream_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let ws = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    format!("{ws}/stream")
}

/// Opens the backend WebSocket. Frames that are not valid events are
/// logged and skipped.
pub async fn connect(base_url: &str) -> Result<EventStream, ProviderError> {
    let url = stream_url(base_url);
    let (mut socket, _) = tokio_tungstenite::connect_async(url.as_str()).await?;
    info!("Connected to {}", url);

    let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
    let task = tokio::spawn(async move {
        while let Some(frame) = socket.next().await {
            let text = match frame {
                Ok(Message::Text(text)) => text,
                Ok(Message::Close(_)) => break,
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "Stream connection failed");
                    break;
                }
            };
            match serde_json::from_str::<StreamEvent>(text.as_str()) {
                Ok(event) => {
                    if sender.send(event).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, frame = %text.as_str(), "Ignoring malformed stream frame")
                }
            }
        }
        debug!("Stream closed");
    });

    Ok(EventStream { receiver, task })
}
