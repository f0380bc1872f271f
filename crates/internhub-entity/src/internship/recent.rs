//! The "just posted" internship record shown on mentor and admin dashboards.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Most recently posted internship, kept in a single local-storage slot.
///
/// Persisted as `{ "title", "company", "timestamp" }` with `timestamp`
/// in Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentInternship {
    /// Posted title.
    pub title: String,
    /// Posting company.
    pub company: String,
    /// Posting time, Unix milliseconds.
    pub timestamp: i64,
}

impl RecentInternship {
    /// Create a record stamped with `posted_at`.
    pub fn new(title: impl Into<String>, company: impl Into<String>, posted_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            timestamp: posted_at.timestamp_millis(),
        }
    }

    /// Posting time, if the stored timestamp is representable.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Whether the record is still within its visibility window at `now`.
    ///
    /// A timestamp too far from `now` to subtract is never fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.timestamp_millis()
            .checked_sub(self.timestamp)
            .is_some_and(|age| age < ttl.num_milliseconds())
    }
}
