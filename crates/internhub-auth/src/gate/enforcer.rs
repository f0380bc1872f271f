//! Authorization decisions for protected navigation.

use tracing::debug;

use internhub_entity::account::Role;
use internhub_entity::session::Session;

use super::areas::ProtectedArea;

/// Where a denied caller is sent instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The login entry point of a role.
    Login {
        /// Role whose login form to open.
        role: Role,
    },
    /// The default area of the caller's own role.
    RoleHome(Role),
}

impl RedirectTarget {
    /// Route path of the target.
    pub fn path(&self) -> String {
        match self {
            Self::Login { role } => role.login_path(),
            Self::RoleHome(role) => role.home_path(),
        }
    }
}

/// Outcome of [`AuthorizationGate::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested area.
    Allow,
    /// Send the caller elsewhere.
    Redirect(RedirectTarget),
}

impl GateDecision {
    /// Whether the caller may enter.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Redirect path, if the caller is turned away.
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::Redirect(target) => Some(target.path()),
        }
    }
}

/// Outcome of [`AuthorizationGate::navigate`] for an arbitrary path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested path.
    Allow,
    /// Send the caller elsewhere.
    Redirect(RedirectTarget),
    /// No such route.
    NotFound,
}

impl From<GateDecision> for Navigation {
    fn from(decision: GateDecision) -> Self {
        match decision {
            GateDecision::Allow => Self::Allow,
            GateDecision::Redirect(target) => Self::Redirect(target),
        }
    }
}

/// Decides whether a session may enter a role-scoped area.
///
/// Stateless: the decision depends only on the session passed in, which
/// callers re-read on every navigation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationGate;

impl AuthorizationGate {
    /// Creates a gate.
    pub fn new() -> Self {
        Self
    }

    /// Admits `session` if its role is in `required_roles`.
    ///
    /// Anonymous callers go to the login page of the first required role,
    /// or the student login page when none is given. Callers of another
    /// role go to their own home area.
    pub fn authorize(&self, session: Option<&Session>, required_roles: &[Role]) -> GateDecision {
        let decision = match session {
            None => GateDecision::Redirect(RedirectTarget::Login {
                role: required_roles.first().copied().unwrap_or(Role::Student),
            }),
            Some(session) if required_roles.contains(&session.role) => GateDecision::Allow,
            Some(session) => GateDecision::Redirect(RedirectTarget::RoleHome(session.role)),
        };

        debug!(
            role = session.map(|s| s.role.as_str()),
            required = ?required_roles,
            decision = ?decision,
            "Authorization evaluated"
        );
        decision
    }

    /// Admits `session` into a protected area.
    pub fn authorize_area(&self, session: Option<&Session>, area: ProtectedArea) -> GateDecision {
        self.authorize(session, area.required_roles())
    }

    /// Resolves navigation to `path`.
    ///
    /// Protected areas go through [`authorize`](Self::authorize). The landing
    /// page sends authenticated callers to their home area. `/login/{role}`
    /// is always open. Anything else, bare `/login` included, is not found.
    pub fn navigate(&self, session: Option<&Session>, path: &str) -> Navigation {
        let path = normalize(path);

        if let Some(area) = ProtectedArea::from_path(path) {
            return self.authorize_area(session, area).into();
        }

        if path == "/" {
            return match session {
                Some(session) => Navigation::Redirect(RedirectTarget::RoleHome(session.role)),
                None => Navigation::Allow,
            };
        }

        match path.strip_prefix("/login/") {
            Some(role) if role.parse::<Role>().is_ok() => Navigation::Allow,
            _ => Navigation::NotFound,
        }
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
