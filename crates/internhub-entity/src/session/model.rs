//! Session entity model.

use serde::{Deserialize, Serialize};

use internhub_core::types::AccountId;

use crate::account::Role;

/// The currently authenticated caller.
///
/// Persisted as `{ "id", "email", "name", "role" }` under the session
/// storage key. A session is either fully populated or absent; all four
/// fields are required when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identifier of the account this session belongs to.
    pub id: AccountId,
    /// Account email.
    pub email: String,
    /// Display name.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Role the caller authenticated as.
    pub role: Role,
}
