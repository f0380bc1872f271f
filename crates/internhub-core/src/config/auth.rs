//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum secret length (in characters) accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Simulated round-trip latency of login and registration, in milliseconds.
    #[serde(default = "default_latency")]
    pub simulated_latency_ms: u64,
    /// Whether the three demo accounts are installed at startup.
    #[serde(default = "default_true")]
    pub seed_demo_accounts: bool,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            simulated_latency_ms: default_latency(),
            seed_demo_accounts: true,
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

fn default_password_min() -> usize {
    6
}

fn default_latency() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

// Argon2id defaults recommended by the argon2 crate (19 MiB, t=2, p=1).
fn default_hash_memory() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
