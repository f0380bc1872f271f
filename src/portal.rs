//! The portal facade consumed by page-level collaborators.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

use internhub_auth::{
    AuthFailure, AuthState, AuthenticationService, AuthorizationGate, CredentialDirectory,
    GateDecision, Navigation, PasswordHasher, ProtectedArea, SessionStore,
};
use internhub_core::config::AppConfig;
use internhub_core::error::AppError;
use internhub_core::result::AppResult;
use internhub_core::traits::storage::KeyValueStore;
use internhub_core::types::InternshipId;
use internhub_entity::account::Role;
use internhub_entity::internship::{Internship, RecentInternship};
use internhub_entity::session::Session;
use internhub_service::{InternshipCatalog, InternshipDraft, InternshipFilter, InternshipPosting};

/// Result of [`Portal::register`], shaped for the registration form.
///
/// Serializes as `{ "ok": bool, "reason"?: string }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    /// Whether the account was created and signed in.
    pub ok: bool,
    /// User-facing failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RegistrationOutcome {
    fn from_result(result: Result<Session, AuthFailure>) -> Self {
        match result {
            Ok(_) => Self {
                ok: true,
                reason: None,
            },
            Err(failure) => Self {
                ok: false,
                reason: Some(failure.to_string()),
            },
        }
    }
}

/// Wires local storage, the credential authority, and the internship
/// services into the operations the portal pages call.
#[derive(Debug)]
pub struct Portal {
    /// Local-storage scope shared by every component.
    storage: Arc<dyn KeyValueStore>,
    /// Login, registration, logout.
    auth: AuthenticationService,
    /// Role gate.
    gate: AuthorizationGate,
    /// Open internships.
    catalog: InternshipCatalog,
    /// Internship posting.
    posting: InternshipPosting,
}

impl Portal {
    /// Builds the portal over the storage backend named in `config`.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let storage = internhub_storage::open_store(&config.storage)?;
        Self::with_storage(config, storage)
    }

    /// Builds the portal over an existing storage scope.
    pub fn with_storage(config: &AppConfig, storage: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let directory = if config.auth.seed_demo_accounts {
            CredentialDirectory::seeded(hasher.clone())?
        } else {
            CredentialDirectory::new(hasher.clone())
        };
        if directory.is_empty() {
            warn!("Credential directory is empty; only registration can sign anyone in");
        }
        let sessions = Arc::new(SessionStore::new(storage.clone(), &config.session));
        let auth = AuthenticationService::new(Arc::new(directory), sessions, hasher, &config.auth);
        let posting = InternshipPosting::new(storage.clone(), &config.portal);

        Ok(Self {
            storage,
            auth,
            gate: AuthorizationGate::new(),
            catalog: InternshipCatalog::new(),
            posting,
        })
    }

    /// Underlying storage scope.
    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    /// Authentication service, for callers that need typed failures.
    pub fn auth(&self) -> &AuthenticationService {
        &self.auth
    }

    /// Subscribes to login/registration attempt state.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.auth.subscribe()
    }

    /// The persisted session, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.auth.current_session()
    }

    /// Signs in. Every failure reads as `false`.
    pub async fn login(&self, email: &str, secret: &str, role: Role) -> bool {
        match self.auth.login(email, secret, role).await {
            Ok(_) => true,
            Err(AuthFailure::Internal(e)) => {
                warn!(role = %role, error = %e, "Login failed on a backend error");
                false
            }
            Err(_) => false,
        }
    }

    /// Registers and signs in a new account.
    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        secret: &str,
        role: Role,
    ) -> RegistrationOutcome {
        let result = self.auth.register(display_name, email, secret, role).await;
        if let Err(AuthFailure::Internal(e)) = &result {
            warn!(role = %role, error = %e, "Registration failed on a backend error");
        }
        RegistrationOutcome::from_result(result)
    }

    /// Signs out. Idempotent.
    pub fn logout(&self) -> AppResult<()> {
        self.auth.logout()
    }

    /// Gates the current session against `required_roles`.
    pub fn authorize(&self, required_roles: &[Role]) -> GateDecision {
        self.gate
            .authorize(self.current_session().as_ref(), required_roles)
    }

    /// Resolves navigation to `path` for the current session.
    pub fn navigate(&self, path: &str) -> Navigation {
        self.gate.navigate(self.current_session().as_ref(), path)
    }

    /// Catalog listings matching `filter`.
    pub fn internships(&self, filter: &InternshipFilter) -> Vec<Internship> {
        self.catalog.search(filter)
    }

    /// The internship catalog.
    pub fn catalog(&self) -> &InternshipCatalog {
        &self.catalog
    }

    /// Applies to an internship as the signed-in student.
    pub fn apply_internship(&self, id: &InternshipId) -> AppResult<Internship> {
        let session = self.admitted(ProtectedArea::StudentInternships)?;
        self.catalog.apply(&session, id)
    }

    /// Posts an internship as the signed-in mentor or admin.
    pub async fn post_internship(&self, draft: InternshipDraft) -> AppResult<RecentInternship> {
        let session = self.current_session();
        let area = session
            .as_ref()
            .and_then(|s| ProtectedArea::posting_area(s.role))
            .unwrap_or(ProtectedArea::MentorPostInternship);
        let session = self.admitted_as(session, area)?;

        let recent = self.posting.post(&session, draft).await?;
        info!(account_id = %session.id, title = %recent.title, "Recent internship updated");
        Ok(recent)
    }

    /// The recently posted internship, if still within its window.
    pub fn recent_internship(&self) -> AppResult<Option<RecentInternship>> {
        self.posting.recent(Utc::now())
    }

    /// Hides the recently posted internship.
    pub fn dismiss_recent_internship(&self) -> AppResult<()> {
        self.posting.dismiss()
    }

    fn admitted(&self, area: ProtectedArea) -> AppResult<Session> {
        self.admitted_as(self.current_session(), area)
    }

    fn admitted_as(&self, session: Option<Session>, area: ProtectedArea) -> AppResult<Session> {
        match (self.gate.authorize_area(session.as_ref(), area), session) {
            (GateDecision::Allow, Some(session)) => Ok(session),
            (decision, _) => Err(AppError::authorization(format!(
                "Not allowed into '{}' (redirect to {})",
                area.path(),
                decision.redirect_path().unwrap_or_else(|| Role::Student.login_path())
            ))),
        }
    }
}
