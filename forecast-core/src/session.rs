//! Query sequencing and the "current forecast" state shared with the display.
//!
//! Every query takes a ticket from a monotonic counter. Only the result for the
//! most recently issued ticket may replace the state; anything older is dropped,
//! so overlapping queries settle on the last one the user asked for rather than
//! the last one the network happened to answer.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::{
    derive::WindowStrategy,
    error::ProviderError,
    model::{ForecastPayload, ForecastRequest},
    provider::ForecastProvider,
    view::DerivedView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// What happened to the most recent query that was allowed to touch the state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing has been fetched yet.
    #[default]
    NoData,
    Fetched,
    /// The latest query failed; any earlier payload is still shown.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub payload: Option<Arc<ForecastPayload>>,
    pub status: FetchStatus,
    /// Sequence number of the ticket whose result produced this state, 0 if none.
    pub applied_sequence: u64,
}

/// Result of handing a finished query back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    /// Failed, state left as it was apart from the recorded failure.
    Failed(String),
    /// A newer query was issued meanwhile; this result was discarded.
    Stale,
}

#[derive(Debug)]
pub struct ForecastSession {
    provider: Box<dyn ForecastProvider>,
    issued: AtomicU64,
    state: RwLock<SessionState>,
}

impl ForecastSession {
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self { provider, issued: AtomicU64::new(0), state: RwLock::new(SessionState::default()) }
    }

    /// Issue a ticket for a new query, superseding every ticket issued before.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Apply a finished query, unless a newer one has been issued since.
    pub async fn complete(
        &self,
        ticket: RequestTicket,
        result: Result<ForecastPayload, ProviderError>,
    ) -> Outcome {
        let mut state = self.state.write().await;

        // Checked under the write lock so two completions cannot interleave.
        if !self.is_latest(ticket) || ticket.0 <= state.applied_sequence {
            debug!(sequence = ticket.0, "discarding stale forecast response");
            return Outcome::Stale;
        }

        state.applied_sequence = ticket.0;
        match result {
            Ok(payload) => {
                info!(sequence = ticket.0, location = %payload.location.name, "forecast updated");
                state.payload = Some(Arc::new(payload));
                state.status = FetchStatus::Fetched;
                Outcome::Updated
            }
            Err(err) => {
                warn!(sequence = ticket.0, error = %err, "forecast query failed, keeping previous state");
                let message = err.to_string();
                state.status = FetchStatus::Failed(message.clone());
                Outcome::Failed(message)
            }
        }
    }

    /// Fetch the forecast for `location` and apply it.
    pub async fn query(&self, location: &str) -> Outcome {
        let ticket = self.begin();
        let request = ForecastRequest::new(location);
        let result = self.provider.fetch_forecast(&request).await;
        self.complete(ticket, result).await
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn payload(&self) -> Option<Arc<ForecastPayload>> {
        self.state.read().await.payload.clone()
    }

    /// Derived view of the current payload, if any.
    pub async fn view(&self, now_hour: u32, strategy: WindowStrategy) -> Option<DerivedView> {
        self.payload().await.map(|payload| DerivedView::derive(&payload, now_hour, strategy))
    }
}
