//! Interval-driven refresh of a single provider operation on behalf of a view.
//!
//! A [`Poller`] owns at most one timer task. Every fetch it issues is stamped
//! with a sequence number; completions are published through a
//! [`tokio::sync::watch`] channel only if they are newer than what is already
//! shown and the poller has not been torn down. In-flight requests are never
//! cancelled, their results are simply dropped when they arrive too late.

use super::provider::ProviderError;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded yet (or every attempt so far failed).
    Idle,
    Loading,
    Displaying,
    TornDown,
}

/// What a view renders from. `data` is replaced wholesale on every successful tick.
#[derive(Debug)]
pub struct ViewState<T> {
    pub phase: Phase,
    pub data: Option<Arc<T>>,
    pub last_error: Option<String>,
    /// Sequence number of the fetch whose outcome this state reflects; 0 before any.
    pub applied_seq: u64,
}

impl<T> Clone for ViewState<T> {
    fn clone(&self) -> Self {
        ViewState {
            phase: self.phase,
            data: self.data.clone(),
            last_error: self.last_error.clone(),
            applied_seq: self.applied_seq,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState {
            phase: Phase::Idle,
            data: None,
            last_error: None,
            applied_seq: 0,
        }
    }
}

pub enum Presentation<'a, T> {
    Loading,
    /// Data to show, plus the error of the latest refresh if that one failed.
    Ready {
        data: &'a T,
        stale_error: Option<&'a str>,
    },
    Unavailable(&'a str),
}

impl<T> ViewState<T> {
    pub fn presentation(&self) -> Presentation<'_, T> {
        match (&self.data, &self.last_error) {
            (Some(data), error) => Presentation::Ready {
                data: data.as_ref(),
                stale_error: error.as_deref(),
            },
            (None, Some(error)) => Presentation::Unavailable(error),
            (None, None) => Presentation::Loading,
        }
    }
}

type FetchFn<P, T> = Arc<dyn Fn(P) -> BoxFuture<'static, Result<T, ProviderError>> + Send + Sync>;

struct Binding<T> {
    name: &'static str,
    state: watch::Sender<ViewState<T>>,
    issued: AtomicU64,
    /// Completions at or below this sequence were issued before a reconfigure.
    floor: AtomicU64,
}

impl<T> Binding<T> {
    fn issue(&self) -> u64 {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_if_modified(|s| match s.phase {
            Phase::Idle | Phase::Displaying => {
                s.phase = Phase::Loading;
                true
            }
            Phase::Loading | Phase::TornDown => false,
        });
        seq
    }

    fn apply(&self, seq: u64, result: Result<T, ProviderError>) {
        let latest = self.issued.load(Ordering::SeqCst);
        let floor = self.floor.load(Ordering::SeqCst);
        let name = self.name;

        self.state.send_if_modified(|s| {
            if s.phase == Phase::TornDown {
                debug!(view = name, seq, "Dropping result for torn down view");
                return false;
            }
            if seq <= s.applied_seq || seq <= floor {
                debug!(
                    view = name,
                    seq,
                    applied = s.applied_seq,
                    "Dropping out-of-date result"
                );
                return false;
            }

            s.applied_seq = seq;
            match result {
                Ok(data) => {
                    s.data = Some(Arc::new(data));
                    s.last_error = None;
                }
                Err(e) => {
                    warn!(view = name, seq, error = %e, "Refresh failed");
                    s.last_error = Some(e.to_string());
                }
            }
            s.phase = if seq < latest {
                Phase::Loading
            } else if s.data.is_some() {
                Phase::Displaying
            } else {
                Phase::Idle
            };
            true
        });
    }

    fn discard_issued(&self) {
        self.floor
            .store(self.issued.load(Ordering::SeqCst), Ordering::SeqCst);
    }

    fn tear_down(&self) {
        self.state.send_modify(|s| s.phase = Phase::TornDown);
    }

    fn is_torn_down(&self) -> bool {
        self.state.borrow().phase == Phase::TornDown
    }
}

/// Cancellable refresh handle owned by a view.
///
/// `start` fetches once immediately and, with auto-refresh on, again after
/// every `interval`. `stop` (or dropping the poller) cancels the timer for good.
pub struct Poller<P, T> {
    fetch: FetchFn<P, T>,
    params: P,
    interval: Duration,
    auto_refresh: bool,
    binding: Arc<Binding<T>>,
    timer: Option<JoinHandle<()>>,
}

impl<P, T> Poller<P, T>
where
    P: Clone + Debug + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    pub fn new<F, Fut>(name: &'static str, params: P, interval: Duration, fetch: F) -> Self
    where
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ProviderError>> + Send + 'static,
    {
        let (state, _) = watch::channel(ViewState::default());
        Poller {
            fetch: Arc::new(move |params| fetch(params).boxed()),
            params,
            interval: interval.max(MIN_INTERVAL),
            auto_refresh: true,
            binding: Arc::new(Binding {
                name,
                state,
                issued: AtomicU64::new(0),
                floor: AtomicU64::new(0),
            }),
            timer: None,
        }
    }

    pub fn with_auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    pub fn start(&mut self) {
        if self.binding.is_torn_down() {
            warn!(view = self.binding.name, "Ignoring start on a torn down poller");
            return;
        }
        self.restart();
    }

    /// Swaps the fetch parameters and restarts the cycle right away.
    /// Anything still in flight for the old parameters is discarded on arrival.
    pub fn reconfigure(&mut self, params: P) {
        debug!(view = self.binding.name, ?params, "Reconfiguring");
        self.params = params;
        self.binding.discard_issued();
        self.restart();
    }

    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
        self.restart();
    }

    /// Fetches once now without touching the timer.
    pub fn refresh(&self) {
        if self.binding.is_torn_down() {
            return;
        }
        issue_fetch(&self.fetch, &self.binding, self.params.clone());
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn restart(&mut self) {
        if self.binding.is_torn_down() {
            return;
        }
        self.cancel_timer();
        issue_fetch(&self.fetch, &self.binding, self.params.clone());

        if self.auto_refresh {
            let fetch = Arc::clone(&self.fetch);
            let binding = Arc::clone(&self.binding);
            let params = self.params.clone();
            let interval = self.interval;
            self.timer = Some(tokio::spawn(async move {
                loop {
                    tokio::time::sleep(interval).await;
                    issue_fetch(&fetch, &binding, params.clone());
                }
            }));
        }
    }
}

impl<P, T> Poller<P, T> {
    /// Tears the view down: no more ticks, late results are ignored.
    pub fn stop(&mut self) {
        self.cancel_timer();
        self.binding.tear_down();
        debug!(view = self.binding.name, "Poller stopped");
    }

    pub fn has_pending_tick(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.binding.state.subscribe()
    }

    pub fn state(&self) -> ViewState<T> {
        self.binding.state.borrow().clone()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<P, T> Drop for Poller<P, T> {
    fn drop(&mut self) {
        self.cancel_timer();
        self.binding.tear_down();
    }
}

fn issue_fetch<P, T>(fetch: &FetchFn<P, T>, binding: &Arc<Binding<T>>, params: P)
where
    T: Send + Sync + 'static,
{
    let seq = binding.issue();
    let request = fetch(params);
    let binding = Arc::clone(binding);
    tokio::spawn(async move {
        let result = request.await;
        binding.apply(seq, result);
    });
}
