//! Redraw loop shared by the auto-refreshing views.

use super::ui;
use crate::core::filter::TransactionFilter;
use crate::core::poller::{Poller, ViewState};
use anyhow::{Result, anyhow};
use std::io::IsTerminal;
use std::str::FromStr;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Keyboard input accepted by a live view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    Filter(TransactionFilter),
    ToggleAutoRefresh,
    Refresh,
    Quit,
}

impl FromStr for ViewCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" => Ok(ViewCommand::ToggleAutoRefresh),
            "r" => Ok(ViewCommand::Refresh),
            "q" => Ok(ViewCommand::Quit),
            other => other
                .parse::<TransactionFilter>()
                .map(ViewCommand::Filter)
                .map_err(|_| anyhow!("Unknown command: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LiveOptions {
    /// Stop after this many refreshes have been drawn.
    pub ticks: Option<usize>,
    /// Read commands from stdin and redraw in place.
    pub interactive: bool,
}

impl LiveOptions {
    /// Interactive only when both ends are a terminal and no tick limit is set.
    pub fn detect(ticks: Option<usize>) -> Self {
        LiveOptions {
            ticks,
            interactive: ticks.is_none()
                && std::io::stdin().is_terminal()
                && std::io::stdout().is_terminal(),
        }
    }
}

/// Forwards parsed stdin lines. Runs on a plain thread so a blocked read
/// never holds up runtime shutdown.
pub fn spawn_stdin_commands() -> mpsc::Receiver<ViewCommand> {
    let (tx, rx) = mpsc::channel(8);
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<ViewCommand>() {
                Ok(cmd) => {
                    if tx.blocking_send(cmd).is_err() {
                        break;
                    }
                }
                Err(e) => eprintln!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error)),
            }
        }
    });
    rx
}

async fn next_command(commands: &mut Option<mpsc::Receiver<ViewCommand>>) -> Option<ViewCommand> {
    match commands {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Starts the poller and prints `render` after every applied refresh until
/// the tick limit, `q`, or Ctrl-C. Returns the number of refreshes drawn.
pub async fn drive<P, T>(
    poller: &mut Poller<P, T>,
    options: LiveOptions,
    mut handle: impl FnMut(&mut Poller<P, T>, ViewCommand),
    render: impl Fn(&Poller<P, T>, &ViewState<T>) -> String,
) -> Result<usize>
where
    P: Clone + std::fmt::Debug + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let mut commands = options.interactive.then(spawn_stdin_commands);
    let mut updates = poller.subscribe();
    poller.start();

    println!("{}", render(poller, &poller.state()));

    let mut drawn = 0;
    let mut last_seq = 0;
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if state.applied_seq == last_seq {
                    continue;
                }
                last_seq = state.applied_seq;

                if options.interactive {
                    ui::clear_screen();
                }
                println!("{}", render(poller, &state));
                drawn += 1;
                if options.ticks.is_some_and(|limit| drawn >= limit) {
                    debug!(drawn, "Tick limit reached");
                    break;
                }
            }
            cmd = next_command(&mut commands) => match cmd {
                Some(ViewCommand::Quit) => break,
                Some(cmd) => handle(poller, cmd),
                None => commands = None,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    poller.stop();
    Ok(drawn)
}
