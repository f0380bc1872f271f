//! Internship posting and the "recently posted" dashboard record.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use validator::{Validate, ValidationError};

use internhub_core::config::PortalConfig;
use internhub_core::error::AppError;
use internhub_core::traits::storage::{KeyValueStore, KeyValueStoreExt};
use internhub_entity::internship::{InternshipKind, RecentInternship};
use internhub_entity::session::Session;

/// A new internship as submitted by a mentor or admin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct InternshipDraft {
    /// Position title.
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    /// Hiring company.
    #[validate(custom(function = "not_blank", message = "Company is required"))]
    pub company: String,
    /// City or `Remote`.
    #[serde(default)]
    pub location: String,
    /// Engagement type.
    #[serde(default, rename = "type")]
    pub kind: Option<InternshipKind>,
    /// Human-readable duration.
    #[serde(default)]
    pub duration: String,
    /// Human-readable stipend.
    #[serde(default)]
    pub stipend: String,
    /// Application deadline (ISO date).
    #[serde(default)]
    pub deadline: String,
    /// Free-text description.
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    /// Candidate requirements; blank entries are dropped on submit.
    #[serde(default)]
    #[validate(custom(
        function = "has_requirement",
        message = "At least one requirement is required"
    ))]
    pub requirements: Vec<String>,
}

impl InternshipDraft {
    /// Requirements with blank entries removed.
    pub fn effective_requirements(&self) -> Vec<String> {
        self.requirements
            .iter()
            .filter(|r| !r.trim().is_empty())
            .cloned()
            .collect()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn has_requirement(requirements: &[String]) -> Result<(), ValidationError> {
    if requirements.iter().all(|r| r.trim().is_empty()) {
        return Err(ValidationError::new("no_requirements"));
    }
    Ok(())
}

/// Posts internships and tracks the most recent one in local storage.
#[derive(Debug, Clone)]
pub struct InternshipPosting {
    /// Local-storage scope holding the recent record.
    storage: Arc<dyn KeyValueStore>,
    /// Storage key of the recent record.
    key: String,
    /// Visibility window of the recent record.
    ttl: TimeDelta,
    /// Simulated submission latency.
    latency: Duration,
}

impl InternshipPosting {
    /// Creates a posting service over `storage`.
    pub fn new(storage: Arc<dyn KeyValueStore>, config: &PortalConfig) -> Self {
        let ttl = i64::try_from(config.recent_ttl_hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .unwrap_or(TimeDelta::MAX);

        Self {
            storage,
            key: config.recent_internship_key.clone(),
            ttl,
            latency: Duration::from_millis(config.posting_latency_ms),
        }
    }

    /// Validates and submits `draft` on behalf of `author`.
    ///
    /// After the submission latency the draft becomes the recent record,
    /// replacing any previous one. Dropping the future before then leaves
    /// storage untouched.
    pub async fn post(
        &self,
        author: &Session,
        draft: InternshipDraft,
    ) -> Result<RecentInternship, AppError> {
        draft
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        tokio::time::sleep(self.latency).await;

        let recent = RecentInternship::new(draft.title.trim(), draft.company.trim(), Utc::now());
        self.storage.set_json(&self.key, &recent)?;

        info!(
            account_id = %author.id,
            role = %author.role,
            title = %recent.title,
            company = %recent.company,
            requirements = draft.effective_requirements().len(),
            "Internship posted"
        );
        Ok(recent)
    }

    /// The recent record if it is still fresh at `now`.
    ///
    /// An expired record is removed. A malformed record reads as absent.
    pub fn recent(&self, now: DateTime<Utc>) -> Result<Option<RecentInternship>, AppError> {
        let recent = match self.storage.get_json::<RecentInternship>(&self.key) {
            Ok(recent) => recent,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Ignoring corrupt recent internship");
                return Ok(None);
            }
        };

        match recent {
            Some(recent) if recent.is_fresh(now, self.ttl) => Ok(Some(recent)),
            Some(_) => {
                self.storage.remove(&self.key)?;
                debug!(key = %self.key, "Expired recent internship purged");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Removes the recent record. Dismissing nothing is a no-op.
    pub fn dismiss(&self) -> Result<(), AppError> {
        self.storage.remove(&self.key)
    }
}
