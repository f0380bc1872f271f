//! Authentication service: login, registration, and logout.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info};

use internhub_core::config::AuthConfig;
use internhub_core::error::AppError;
use internhub_core::types::AccountId;
use internhub_entity::account::{Account, Role};
use internhub_entity::session::Session;

use super::state::{AuthState, PendingGuard};
use crate::directory::CredentialDirectory;
use crate::error::AuthFailure;
use crate::password::{PasswordHasher, PasswordValidator};
use crate::session::SessionStore;

/// Validates credentials against the directory and issues sessions.
///
/// The only writer of both the credential directory and the session store.
/// Attempts emulate a round-trip to a remote authority: they enter
/// [`AuthState::Pending`], wait the configured latency, then resolve. At
/// most one attempt runs at a time; later callers queue behind it.
pub struct AuthenticationService {
    /// Role-slotted accounts.
    directory: Arc<CredentialDirectory>,
    /// Persisted session slot.
    sessions: Arc<SessionStore>,
    /// Secret hasher.
    hasher: Arc<PasswordHasher>,
    /// Registration secret policy.
    validator: PasswordValidator,
    /// Simulated authority round-trip.
    latency: Duration,
    /// Attempt state broadcast.
    state: watch::Sender<AuthState>,
    /// Serializes attempts.
    in_flight: Mutex<()>,
}

impl std::fmt::Debug for AuthenticationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationService")
            .field("latency", &self.latency)
            .field("validator", &self.validator)
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl AuthenticationService {
    /// Creates the service over an existing directory and session store.
    pub fn new(
        directory: Arc<CredentialDirectory>,
        sessions: Arc<SessionStore>,
        hasher: Arc<PasswordHasher>,
        config: &AuthConfig,
    ) -> Self {
        let (state, _) = watch::channel(AuthState::Idle);
        Self {
            directory,
            sessions,
            hasher,
            validator: PasswordValidator::new(config),
            latency: Duration::from_millis(config.simulated_latency_ms),
            state,
            in_flight: Mutex::new(()),
        }
    }

    /// Subscribes to attempt state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Snapshot of the current attempt state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Whether an attempt is in flight.
    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// The persisted session, re-read on every call.
    pub fn current_session(&self) -> Option<Session> {
        self.sessions.load()
    }

    /// The credential directory this service writes to.
    pub fn directory(&self) -> &Arc<CredentialDirectory> {
        &self.directory
    }

    /// Authenticates `email`/`secret` against the `role` slot.
    ///
    /// An empty slot, a different email, and a wrong secret all yield
    /// [`AuthFailure::InvalidCredentials`]. On success the session is
    /// persisted before it is returned.
    pub async fn login(&self, email: &str, secret: &str, role: Role) -> Result<Session, AuthFailure> {
        let _attempt = self.in_flight.lock().await;
        let pending = PendingGuard::enter(&self.state);

        tokio::time::sleep(self.latency).await;

        let outcome = self.resolve_login(email, secret, role);
        pending.settle(&outcome);
        outcome
    }

    fn resolve_login(&self, email: &str, secret: &str, role: Role) -> Result<Session, AuthFailure> {
        let account = match self.directory.find(role) {
            Some(account) if account.email == email => account,
            _ => {
                debug!(role = %role, "Login rejected: no matching account");
                return Err(AuthFailure::InvalidCredentials);
            }
        };

        if !self.hasher.verify_password(secret, &account.secret_hash)? {
            debug!(role = %role, "Login rejected: secret mismatch");
            return Err(AuthFailure::InvalidCredentials);
        }

        let session = account.to_session();
        self.sessions.save(&session)?;

        info!(account_id = %session.id, role = %role, "Login succeeded");
        Ok(session)
    }

    /// Registers a new account into the `role` slot and signs it in.
    ///
    /// Secrets below the minimum length are rejected before the attempt
    /// starts. An email already present in any slot is rejected with
    /// [`AuthFailure::DuplicateEmail`]. Otherwise the new account replaces
    /// the slot's previous occupant.
    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        secret: &str,
        role: Role,
    ) -> Result<Session, AuthFailure> {
        if let Err(failure) = self.validator.validate(secret) {
            debug!(role = %role, "Registration rejected: weak secret");
            self.publish_unless_in_flight(AuthState::Rejected(failure.clone()));
            return Err(failure);
        }

        let _attempt = self.in_flight.lock().await;
        let pending = PendingGuard::enter(&self.state);

        tokio::time::sleep(self.latency).await;

        let outcome = self.resolve_registration(display_name, email, secret, role);
        pending.settle(&outcome);
        outcome
    }

    fn resolve_registration(
        &self,
        display_name: &str,
        email: &str,
        secret: &str,
        role: Role,
    ) -> Result<Session, AuthFailure> {
        if self.directory.exists(email) {
            debug!(role = %role, "Registration rejected: duplicate email");
            return Err(AuthFailure::DuplicateEmail);
        }

        self.validator.warn_if_guessable(secret, &[email, display_name]);

        let account = Account {
            id: AccountId::generate(),
            email: email.to_string(),
            secret_hash: self.hasher.hash_password(secret)?,
            display_name: display_name.to_string(),
            role,
        };
        let session = account.to_session();

        let previous = self.directory.upsert(role, account)?;
        if let Err(e) = self.sessions.save(&session) {
            self.directory.restore(role, previous);
            return Err(e.into());
        }

        info!(
            account_id = %session.id,
            role = %role,
            replaced = previous.as_ref().map(|a| a.id.as_str()),
            "Registration succeeded"
        );
        Ok(session)
    }

    /// Ends the current session. Idempotent.
    ///
    /// An attempt already in flight is not cancelled and keeps its
    /// `Pending` state.
    pub fn logout(&self) -> Result<(), AppError> {
        let had_session = self.sessions.load().is_some();
        self.sessions.clear()?;
        self.publish_unless_in_flight(AuthState::Idle);
        if had_session {
            info!("Logged out");
        }
        Ok(())
    }

    /// Publishes `state` only while no attempt holds the attempt lock.
    fn publish_unless_in_flight(&self, state: AuthState) {
        match self.in_flight.try_lock() {
            Ok(_idle) => {
                self.state.send_replace(state);
            }
            Err(_) => debug!("Attempt in flight, state left as is"),
        }
    }
}
