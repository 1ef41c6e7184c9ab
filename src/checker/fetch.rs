// src/checker/fetch.rs
// =============================================================================
// This module makes the HTTP request for a single profile URL.
//
// Key functionality:
// - Makes HTTP HEAD requests by default (lightweight, no body download)
// - Makes GET requests when the caller wants the page body
// - Follows redirects and remembers where we ended up
// - Picks a random User-Agent from a pool on every request
// - NEVER fails: network errors become an outcome with status 0
//
// Retries are not done here. One call = one attempt. The dispatcher decides
// whether to call again.
//
// Rust concepts:
// - Traits: `Fetcher` lets tests swap the network for a fake
// - async-trait: async methods on a trait used through `Arc<dyn Fetcher>`
// - Lossy decoding: String::from_utf8_lossy never fails on bad bytes
// =============================================================================

use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::header::{ACCEPT, CONTENT_LENGTH, USER_AGENT};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::{ScanConfig, DEFAULT_USER_AGENTS};
use crate::error::Result;

/// HEAD responses only get their body read below this advertised size.
pub const MAX_HEAD_BODY_BYTES: u64 = 1024 * 1024;

/// Redirect hops followed before giving up on a URL.
const MAX_REDIRECTS: usize = 10;

/// Which HTTP verb to use for a check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchMethod {
    /// HEAD request, body only read when small
    #[default]
    Head,
    /// GET request, body always read
    Get,
}

/// The raw result of one request, before we decide what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// HTTP status code, or 0 if the request never got a response
    pub http_status: u16,
    /// URL after following redirects (the requested URL on failure)
    pub final_url: String,
    /// Decoded body text, empty when not read
    pub body: String,
}

impl FetchOutcome {
    /// The outcome used for timeouts, DNS failures, refused connections, etc.
    pub fn network_failure(url: &str) -> Self {
        Self {
            http_status: 0,
            final_url: url.to_string(),
            body: String::new(),
        }
    }

    pub fn is_network_failure(&self) -> bool {
        self.http_status == 0
    }
}

/// Performs exactly one request attempt and never returns an error.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, method: FetchMethod) -> FetchOutcome;
}

/// The real fetcher, backed by one shared reqwest client.
///
/// The client is reused for every request (connection pooling), so build one
/// HttpFetcher per run and share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    user_agents: Vec<String>,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agents: Vec<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        let user_agents = if user_agents.is_empty() {
            DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect()
        } else {
            user_agents
        };

        Ok(Self {
            client,
            user_agents,
        })
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(config.timeout(), config.user_agents.clone())
    }

    // ThreadRng is not Send, so it must not live across an .await.
    // Keeping the choice in a plain fn guarantees that.
    fn pick_user_agent(&self) -> &str {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_USER_AGENTS[0])
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, method: FetchMethod) -> FetchOutcome {
        let request = match method {
            FetchMethod::Head => self.client.head(url),
            FetchMethod::Get => self.client.get(url),
        }
        .header(USER_AGENT, self.pick_user_agent())
        .header(ACCEPT, "*/*");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %url, kind = failure_kind(&e), error = %e, "Request failed");
                return FetchOutcome::network_failure(url);
            }
        };

        let http_status = response.status().as_u16();
        let final_url = response.url().to_string();

        let body = if should_read_body(method, advertised_length(&response)) {
            read_body_lossy(url, response).await
        } else {
            String::new()
        };

        debug!(url = %url, status = http_status, final_url = %final_url, "Fetched");

        FetchOutcome {
            http_status,
            final_url,
            body,
        }
    }
}

// GET always reads the body. HEAD reads it only when the server advertised
// a non-empty body under the size ceiling.
fn should_read_body(method: FetchMethod, content_length: Option<u64>) -> bool {
    match method {
        FetchMethod::Get => true,
        FetchMethod::Head => {
            matches!(content_length, Some(len) if len > 0 && len < MAX_HEAD_BODY_BYTES)
        }
    }
}

// The announced Content-Length, read from the header itself since a HEAD
// response never carries the body it describes.
fn advertised_length(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

async fn read_body_lossy(url: &str, response: Response) -> String {
    match response.bytes().await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            // Status and final URL are still valid, only the body is lost
            debug!(url = %url, error = %e, "Failed to read body");
            String::new()
        }
    }
}

// Short label for logs, same buckets as reqwest exposes
fn failure_kind(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_redirect() {
        "too_many_redirects"
    } else if error.is_connect() {
        "connect"
    } else if error.is_builder() {
        "invalid_url"
    } else {
        "other"
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does fetch() return FetchOutcome and not Result?
//    - a timeout on one platform is a normal answer for us ("no response"),
//      not a reason to stop the scan
//    - the classifier turns status 0 into "notfound"
//
// 2. What is #[async_trait]?
//    - plain traits cannot be used as `dyn Trait` with async methods
//    - the macro rewrites them to return a boxed future
//
// 3. HEAD vs GET:
//    - HEAD asks for headers only, GET downloads the page
//    - with HEAD we see status + final URL; with GET we also see the text
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_outcome() {
        let outcome = FetchOutcome::network_failure("https://example.com/alice");
        assert_eq!(outcome.http_status, 0);
        assert_eq!(outcome.final_url, "https://example.com/alice");
        assert!(outcome.body.is_empty());
        assert!(outcome.is_network_failure());
    }

    #[test]
    fn test_get_always_reads_body() {
        assert!(should_read_body(FetchMethod::Get, None));
        assert!(should_read_body(FetchMethod::Get, Some(50 * 1024 * 1024)));
    }

    #[test]
    fn test_head_reads_only_small_advertised_bodies() {
        assert!(!should_read_body(FetchMethod::Head, None));
        assert!(!should_read_body(FetchMethod::Head, Some(0)));
        assert!(should_read_body(FetchMethod::Head, Some(512)));
        assert!(!should_read_body(FetchMethod::Head, Some(MAX_HEAD_BODY_BYTES)));
    }

    #[test]
    fn test_user_agent_comes_from_pool() {
        let pool = vec!["agent-a".to_string(), "agent-b".to_string()];
        let fetcher = HttpFetcher::new(Duration::from_secs(1), pool.clone()).unwrap();
        for _ in 0..20 {
            assert!(pool.iter().any(|ua| ua == fetcher.pick_user_agent()));
        }
    }

    #[test]
    fn test_empty_pool_falls_back_to_defaults() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1), Vec::new()).unwrap();
        assert_eq!(fetcher.user_agents.len(), DEFAULT_USER_AGENTS.len());
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_failure() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1), Vec::new()).unwrap();
        let outcome = fetcher.fetch("not a url at all", FetchMethod::Head).await;
        assert_eq!(outcome, FetchOutcome::network_failure("not a url at all"));
    }
}
