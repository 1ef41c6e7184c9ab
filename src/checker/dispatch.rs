// src/checker/dispatch.rs
// =============================================================================
// Runs every (username, platform) check concurrently and collects results.
//
// How a run works:
// 1. Build the work list: every username x every platform
// 2. Turn each work item into a future that:
//      a. waits for a slot in the concurrency gate (a Semaphore)
//      b. sleeps for the pacing delay
//      c. fetches the profile URL (see fetch.rs)
//      d. classifies the outcome (see classify.rs)
//      e. pushes one CheckResult into the sink
// 3. Drive those futures with buffer_unordered, so they finish in whatever
//    order the network allows
// 4. After each completion, publish progress on a watch channel
//
// The gate, the sink and the progress channel all belong to the Dispatcher
// (no globals), so two dispatchers never interfere with each other.
//
// Rust concepts:
// - Arc<T>: shared ownership of the fetcher and of each platform record
// - Semaphore: a counter of free slots; acquire() waits when it hits zero
// - watch channel: a single "latest value" that observers can read any time
// =============================================================================

use futures::future;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{watch, Semaphore};
use tracing::{debug, info};

use super::classify::Classifier;
use super::fetch::{FetchMethod, FetchOutcome, Fetcher};
use super::result::{CheckResult, ResultSink, SinkHandle};
use crate::config::{DEFAULT_CONCURRENCY, DEFAULT_DELAY_MS, DEFAULT_RETRIES};
use crate::platforms::PlatformSpec;

/// What to do with the configured retry count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// One attempt per check; the first classified outcome is the result.
    /// `retries` is accepted but never consumed.
    FirstCompleted,
    /// Attempt again (up to `retries` more times) while the request fails
    /// at the network level, sleeping `wait` between attempts.
    OnNetworkFailure { wait: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Maximum checks in flight, across the whole run
    pub concurrency: usize,
    /// Sleep after taking a slot, before the request
    pub pacing_delay: Duration,
    pub retries: u32,
    pub retry_policy: RetryPolicy,
    pub method: FetchMethod,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            pacing_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            retries: DEFAULT_RETRIES,
            retry_policy: RetryPolicy::FirstCompleted,
            method: FetchMethod::Head,
        }
    }
}

/// Completed / total checks of the current run. `completed` only grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}

/// One (username, platform) pair waiting to be checked.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub username: Arc<str>,
    pub platform: Arc<PlatformSpec>,
}

impl WorkItem {
    pub fn check_url(&self) -> String {
        self.platform.profile_url(&self.username)
    }
}

/// Builds the Cartesian product of usernames and platforms,
/// username-major (all platforms for the first username, then the next...).
pub fn work_items(usernames: &[String], platforms: &[PlatformSpec]) -> Vec<WorkItem> {
    let platforms: Vec<Arc<PlatformSpec>> = platforms.iter().cloned().map(Arc::new).collect();

    usernames
        .iter()
        .flat_map(|username| {
            let username: Arc<str> = Arc::from(username.as_str());
            platforms.iter().map(move |platform| WorkItem {
                username: Arc::clone(&username),
                platform: Arc::clone(platform),
            })
        })
        .collect()
}

pub struct Dispatcher {
    fetcher: Arc<dyn Fetcher>,
    classifier: Classifier,
    options: DispatchOptions,
    gate: Arc<Semaphore>,
    progress: watch::Sender<Progress>,
}

impl Dispatcher {
    pub fn new(fetcher: Arc<dyn Fetcher>, classifier: Classifier, options: DispatchOptions) -> Self {
        let concurrency = options.concurrency.clamp(1, Semaphore::MAX_PERMITS);
        let (progress, _) = watch::channel(Progress::default());

        Self {
            fetcher,
            classifier,
            options: DispatchOptions {
                concurrency,
                ..options
            },
            gate: Arc::new(Semaphore::new(concurrency)),
            progress,
        }
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    /// Watch progress of the current run. Reading never slows the run down.
    pub fn subscribe(&self) -> watch::Receiver<Progress> {
        self.progress.subscribe()
    }

    /// Checks every username on every platform.
    ///
    /// Returns exactly one CheckResult per (username, platform) pair, in the
    /// order the checks completed.
    pub async fn run(&self, usernames: &[String], platforms: &[PlatformSpec]) -> Vec<CheckResult> {
        let items = work_items(usernames, platforms);
        let total = items.len();
        let started = Instant::now();

        info!(
            usernames = usernames.len(),
            platforms = platforms.len(),
            checks = total,
            concurrency = self.options.concurrency,
            "Starting scan"
        );

        self.progress.send_replace(Progress {
            completed: 0,
            total,
        });

        let sink = ResultSink::new();
        let handle = sink.handle();
        let mut completed = 0;

        stream::iter(items)
            .map(|item| self.check(item, handle.clone()))
            .buffer_unordered(self.options.concurrency)
            .for_each(|()| {
                completed += 1;
                self.progress.send_replace(Progress { completed, total });
                future::ready(())
            })
            .await;

        drop(handle);
        let results = sink.drain();

        info!(
            checks = results.len(),
            found = results.iter().filter(|r| r.exists).count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Scan finished"
        );

        results
    }

    async fn check(&self, item: WorkItem, sink: SinkHandle) {
        let check_url = item.check_url();

        // The gate is never closed, so acquire() only fails if that changes;
        // holding the permit until the end of this fn keeps the slot taken.
        let _permit = self.gate.acquire().await.ok();

        if !self.options.pacing_delay.is_zero() {
            tokio::time::sleep(self.options.pacing_delay).await;
        }

        let outcome = self.fetch_with_retries(&check_url).await;
        let classification = self.classifier.classify(&outcome);

        debug!(
            username = %item.username,
            platform = %item.platform.name,
            status = outcome.http_status,
            exists = classification.exists,
            "Checked"
        );

        sink.push(CheckResult::new(
            &item.username,
            &item.platform.name,
            check_url,
            outcome,
            classification,
        ));
    }

    async fn fetch_with_retries(&self, url: &str) -> FetchOutcome {
        let method = self.options.method;
        let mut outcome = self.fetcher.fetch(url, method).await;

        if let RetryPolicy::OnNetworkFailure { wait } = self.options.retry_policy {
            let mut attempt = 0;
            while outcome.is_network_failure() && attempt < self.options.retries {
                attempt += 1;
                debug!(url = %url, attempt, "Network failure, retrying");
                if !wait.is_zero() {
                    tokio::time::sleep(wait).await;
                }
                outcome = self.fetcher.fetch(url, method).await;
            }
        }

        outcome
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why both buffer_unordered AND a Semaphore?
//    - buffer_unordered(N) decides how many futures are polled at once
//    - the Semaphore is the admission gate each check has to pass
//    - the gate belongs to the Dispatcher, so it also holds if two runs
//      share one Dispatcher
//
// 2. What is `_permit`?
//    - acquire() hands back a permit; the slot is free again when it drops
//    - naming it `_permit` (not `_`) keeps it alive until the end of check()
//    - `let _ = ...` would drop it immediately!
//
// 3. Why Arc<str> for usernames?
//    - every platform check of one username shares the same string
//    - cloning an Arc bumps a counter, it does not copy the text
//
// 4. What does send_replace do?
//    - stores the new Progress even if nobody is listening
//    - never waits, so reporting progress never slows a check down
// -----------------------------------------------------------------------------
