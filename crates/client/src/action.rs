//! Simulated asynchronous actions.
//!
//! The web client has no backend: "network calls" are fixed delays that
//! resolve with canned data. [`SimulatedAction`] models one UI action
//! (a submit button) with an observable [`ActionStatus`]:
//!
//! - while a run is pending the control is disabled,
//! - each run resolves exactly once,
//! - a second run while pending is refused with [`ActionError::InFlight`]
//!   and its future is never polled.
//!
//! Delays go through `tokio::time`, so tests drive them with a paused clock.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;

use crate::config::ClientConfig;
use crate::error::ActionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStatus<T> {
    Idle,
    Pending,
    Resolved(T),
    Rejected(String),
}

impl<T> ActionStatus<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, ActionStatus::Pending)
    }
}

pub struct SimulatedAction<T> {
    name: &'static str,
    status: watch::Sender<ActionStatus<T>>,
}

impl<T: Clone> SimulatedAction<T> {
    pub fn new(name: &'static str) -> Self {
        let (status, _) = watch::channel(ActionStatus::Idle);
        Self { name, status }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn status(&self) -> ActionStatus<T> {
        self.status.borrow().clone()
    }

    /// Whether the triggering control should be disabled.
    pub fn is_disabled(&self) -> bool {
        self.status.borrow().is_pending()
    }

    /// Observe status transitions.
    pub fn watch(&self) -> watch::Receiver<ActionStatus<T>> {
        self.status.subscribe()
    }

    /// Run `operation` as this action.
    ///
    /// The transition to `Pending` is atomic: if another run is pending this
    /// returns [`ActionError::InFlight`] immediately and `operation` is
    /// dropped unpolled. If the returned future is dropped mid-flight the
    /// action is recorded as rejected so the control is re-enabled.
    pub async fn run<F>(&self, operation: F) -> Result<T, ActionError>
    where
        F: Future<Output = Result<T, String>>,
    {
        let started = self.status.send_if_modified(|status| {
            if status.is_pending() {
                false
            } else {
                *status = ActionStatus::Pending;
                true
            }
        });
        if !started {
            tracing::debug!(action = self.name, "Ignoring trigger while in flight");
            return Err(ActionError::InFlight { action: self.name });
        }

        tracing::debug!(action = self.name, "Action started");
        let mut guard = PendingGuard {
            status: &self.status,
            settled: false,
        };

        let outcome = operation.await;
        guard.settled = true;

        match outcome {
            Ok(value) => {
                tracing::info!(action = self.name, "Action resolved");
                self.status.send_replace(ActionStatus::Resolved(value.clone()));
                Ok(value)
            }
            Err(reason) => {
                tracing::warn!(action = self.name, %reason, "Action rejected");
                self.status.send_replace(ActionStatus::Rejected(reason.clone()));
                Err(ActionError::Rejected {
                    action: self.name,
                    reason,
                })
            }
        }
    }

    /// Return to `Idle` (e.g. after a success screen is dismissed). Has no
    /// effect while pending.
    pub fn reset(&self) {
        self.status.send_if_modified(|status| {
            if status.is_pending() || matches!(status, ActionStatus::Idle) {
                false
            } else {
                *status = ActionStatus::Idle;
                true
            }
        });
    }
}

struct PendingGuard<'a, T> {
    status: &'a watch::Sender<ActionStatus<T>>,
    settled: bool,
}

impl<T> Drop for PendingGuard<'_, T> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("Action dropped before completion");
            self.status
                .send_replace(ActionStatus::Rejected("cancelled".to_string()));
        }
    }
}

// ---------------------------------------------------------------------------
// SimulatedBackend
// ---------------------------------------------------------------------------

/// Stand-in for the missing server: every call waits a fixed latency and
/// then succeeds, or fails with the configured reason.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure: None,
        }
    }

    /// A succeeding backend with the configured `SIMULATED_LATENCY_MS`.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.simulated_latency)
    }

    /// A backend whose every call is rejected with `reason`.
    pub fn failing(latency: Duration, reason: impl Into<String>) -> Self {
        Self {
            latency,
            failure: Some(reason.into()),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub async fn call<T>(&self, response: T) -> Result<T, String> {
        let outcome = match &self.failure {
            Some(reason) => Err(reason.clone()),
            None => Ok(response),
        };
        simulate_call(self.latency, outcome).await
    }
}

/// Wait `latency`, then yield `outcome`.
pub async fn simulate_call<T>(latency: Duration, outcome: Result<T, String>) -> Result<T, String> {
    tokio::time::sleep(latency).await;
    outcome
}
