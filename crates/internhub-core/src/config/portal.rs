//! Portal feature configuration (internship posting).

use serde::{Deserialize, Serialize};

/// Settings for the internship posting flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Local-storage key holding the most recently posted internship.
    #[serde(default = "default_recent_key")]
    pub recent_internship_key: String,
    /// How long a posted internship stays visible on the dashboards, in hours.
    #[serde(default = "default_recent_ttl")]
    pub recent_ttl_hours: u64,
    /// Simulated submission latency, in milliseconds.
    #[serde(default = "default_posting_latency")]
    pub posting_latency_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            recent_internship_key: default_recent_key(),
            recent_ttl_hours: default_recent_ttl(),
            posting_latency_ms: default_posting_latency(),
        }
    }
}

fn default_recent_key() -> String {
    "recentInternship".to_string()
}

fn default_recent_ttl() -> u64 {
    24
}

fn default_posting_latency() -> u64 {
    1500
}
