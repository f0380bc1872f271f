//! Internship listing model.

use serde::{Deserialize, Serialize};
use std::fmt;

use internhub_core::types::InternshipId;

/// Engagement type of an internship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternshipKind {
    /// On-site, full-time.
    #[serde(rename = "Full-time")]
    FullTime,
    /// Fully remote.
    Remote,
    /// Split between office and remote.
    Hybrid,
}

impl fmt::Display for InternshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullTime => write!(f, "Full-time"),
            Self::Remote => write!(f, "Remote"),
            Self::Hybrid => write!(f, "Hybrid"),
        }
    }
}

/// A listed internship opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    /// Listing identifier.
    pub id: InternshipId,
    /// Position title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// City or `Remote`.
    pub location: String,
    /// Human-readable duration, e.g. `3 months`.
    pub duration: String,
    /// Human-readable stipend, e.g. `$2000/month`.
    pub stipend: String,
    /// Application deadline (ISO date).
    pub deadline: String,
    /// Free-text description.
    pub description: String,
    /// Candidate requirements.
    pub requirements: Vec<String>,
    /// Engagement type.
    #[serde(rename = "type")]
    pub kind: InternshipKind,
    /// Date the listing was posted (ISO date).
    pub posted_date: String,
}
