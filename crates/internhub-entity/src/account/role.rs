//! Portal role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of portal roles.
///
/// Roles are peers, not a hierarchy: each role owns its own area of the
/// portal and access to one role's area never implies access to another's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses and applies to internships.
    Student,
    /// Posts internships and guides students.
    Mentor,
    /// Manages users and internships.
    Admin,
}

impl Role {
    /// Number of roles (and of credential directory slots).
    pub const COUNT: usize = 3;

    /// Every role, in slot order.
    pub const ALL: [Role; Role::COUNT] = [Role::Student, Role::Mentor, Role::Admin];

    /// Stable slot index of this role.
    pub fn index(&self) -> usize {
        match self {
            Self::Student => 0,
            Self::Mentor => 1,
            Self::Admin => 2,
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Mentor => "mentor",
            Self::Admin => "admin",
        }
    }

    /// Default area a session of this role lands on.
    pub fn home_path(&self) -> String {
        format!("/{}/dashboard", self.as_str())
    }

    /// Login entry point for this role.
    pub fn login_path(&self) -> String {
        format!("/login/{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = internhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "mentor" => Ok(Self::Mentor),
            "admin" => Ok(Self::Admin),
            _ => Err(internhub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: student, mentor, admin"
            ))),
        }
    }
}
