//! Observable state of the current authentication attempt.

use tokio::sync::watch;

use internhub_entity::session::Session;

use crate::error::AuthFailure;

/// Where the most recent authentication attempt stands.
///
/// `Idle → Pending → Resolved | Rejected`. Input validation failures go
/// straight to `Rejected`.
#[derive(Debug, Clone, Default)]
pub enum AuthState {
    /// No attempt has started since the last reset.
    #[default]
    Idle,
    /// An attempt is waiting on the (simulated) authority.
    Pending,
    /// The attempt produced this session.
    Resolved(Session),
    /// The attempt failed.
    Rejected(AuthFailure),
}

impl AuthState {
    /// Whether an attempt is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub(crate) fn from_outcome(outcome: &Result<Session, AuthFailure>) -> Self {
        match outcome {
            Ok(session) => Self::Resolved(session.clone()),
            Err(failure) => Self::Rejected(failure.clone()),
        }
    }
}

/// Holds the state at `Pending` for the lifetime of an attempt.
///
/// If the attempt future is dropped before it settles, the state falls
/// back to `Idle` so observers never see a pending attempt that will not
/// resolve.
pub(crate) struct PendingGuard<'a> {
    state: &'a watch::Sender<AuthState>,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    pub(crate) fn enter(state: &'a watch::Sender<AuthState>) -> Self {
        state.send_replace(AuthState::Pending);
        Self {
            state,
            settled: false,
        }
    }

    pub(crate) fn settle(mut self, outcome: &Result<Session, AuthFailure>) {
        self.state.send_replace(AuthState::from_outcome(outcome));
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.state.send_replace(AuthState::Idle);
        }
    }
}
