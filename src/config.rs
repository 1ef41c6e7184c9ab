// src/config.rs
// =============================================================================
// Scan configuration: every tunable of a run in one struct.
//
// Values come from three layers, later layers winning:
// 1. Built-in defaults (ScanConfig::default())
// 2. An optional TOML file (--config path/to/hunter.toml)
// 3. Command-line flags (applied in main.rs)
//
// Example TOML file:
//
//   concurrency = 50
//   timeout_secs = 5
//   not_found_keywords = ["not found", "no such user"]
//
//   [[platforms]]
//   name = "codeberg"
//   url = "https://codeberg.org/{username}"
// =============================================================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::checker::{DispatchOptions, FetchMethod, RetryPolicy};
use crate::error::{HunterError, Result};
use crate::platforms::PlatformSpec;

pub const DEFAULT_CONCURRENCY: usize = 150;
/// Largest gate the tokio Semaphore can hold.
pub const MAX_CONCURRENCY: usize = tokio::sync::Semaphore::MAX_PERMITS;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RETRIES: u32 = 1;
pub const DEFAULT_DELAY_MS: u64 = 20;
pub const DEFAULT_RETRY_WAIT_MS: u64 = 500;

/// Phrases in a page body that mean "this profile does not exist".
pub const DEFAULT_NOT_FOUND_KEYWORDS: &[&str] = &[
    "not found",
    "no such user",
    "profile not found",
    "user does not exist",
    "account not found",
    "page not found",
    "404",
    "doesn't exist",
    "no users found",
    "we couldn't find that account",
    "sorry, that page doesn\u{2019}t exist",
    "this account doesn't exist",
];

/// URL fragments that mean we were redirected to a generic page.
pub const DEFAULT_REDIRECT_BLACKLIST: &[&str] = &[
    "signup",
    "login",
    "search",
    "error",
    "sorry",
    "404",
    "not-found",
    "does-not-exist",
];

pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.4 Safari/605.1.15",
];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Maximum number of checks in flight at once, across all platforms
    pub concurrency: usize,
    /// Per-attempt request timeout
    pub timeout_secs: u64,
    /// Extra attempts per check (only used with retry_on_failure)
    pub retries: u32,
    /// Pause after taking a concurrency slot, before the request
    pub delay_ms: u64,
    /// Re-attempt checks that failed at the network level
    pub retry_on_failure: bool,
    /// Pause between attempts when retry_on_failure is on
    pub retry_wait_ms: u64,
    /// HEAD (default) or GET for body inspection
    pub method: FetchMethod,
    pub not_found_keywords: Vec<String>,
    pub redirect_blacklist: Vec<String>,
    pub user_agents: Vec<String>,
    /// Platforms added to (or replacing entries of) the built-in table
    pub platforms: Vec<PlatformSpec>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retries: DEFAULT_RETRIES,
            delay_ms: DEFAULT_DELAY_MS,
            retry_on_failure: false,
            retry_wait_ms: DEFAULT_RETRY_WAIT_MS,
            method: FetchMethod::Head,
            not_found_keywords: to_strings(DEFAULT_NOT_FOUND_KEYWORDS),
            redirect_blacklist: to_strings(DEFAULT_REDIRECT_BLACKLIST),
            user_agents: to_strings(DEFAULT_USER_AGENTS),
            platforms: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Loads a TOML file. Keys missing from the file keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| HunterError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| HunterError::Config {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(HunterError::Config {
                message: "concurrency must be at least 1".to_string(),
            });
        }
        if self.concurrency > MAX_CONCURRENCY {
            return Err(HunterError::Config {
                message: format!("concurrency must be at most {}", MAX_CONCURRENCY),
            });
        }
        if self.timeout_secs == 0 {
            return Err(HunterError::Config {
                message: "timeout_secs must be at least 1".to_string(),
            });
        }
        if self.user_agents.is_empty() {
            return Err(HunterError::Config {
                message: "user_agents must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn dispatch_options(&self) -> DispatchOptions {
        let retry_policy = if self.retry_on_failure {
            RetryPolicy::OnNetworkFailure {
                wait: Duration::from_millis(self.retry_wait_ms),
            }
        } else {
            RetryPolicy::FirstCompleted
        };

        DispatchOptions {
            concurrency: self.concurrency,
            pacing_delay: Duration::from_millis(self.delay_ms),
            retries: self.retries,
            retry_policy,
            method: self.method,
        }
    }
}
