// src/checker/result.rs
// =============================================================================
// CheckResult records and the sink that collects them.
//
// Every finished check pushes exactly one CheckResult into the sink. Checks
// finish in any order, so the sink is a channel: pushing never needs a lock
// and the receiving side sees results in completion order.
// =============================================================================

use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::classify::Classification;
use super::fetch::FetchOutcome;

/// strftime format used for result timestamps and export file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// One row of output: the verdict for one (username, platform) pair.
///
/// Field order here is the column order of the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub timestamp: String,
    pub username: String,
    pub platform: String,
    pub check_url: String,
    pub final_url: String,
    pub http_status: u16,
    pub exists: bool,
    pub reason: String,
}

impl CheckResult {
    pub fn new(
        username: &str,
        platform: &str,
        check_url: String,
        outcome: FetchOutcome,
        classification: Classification,
    ) -> Self {
        Self {
            timestamp: timestamp_now(),
            username: username.to_string(),
            platform: platform.to_string(),
            check_url,
            final_url: outcome.final_url,
            http_status: outcome.http_status,
            exists: classification.exists,
            reason: classification.reason,
        }
    }

    /// True when no HTTP response was received at all.
    pub fn is_network_failure(&self) -> bool {
        self.http_status == 0
    }
}

/// Append-only collection of results, safe to push into from many checks.
#[derive(Debug)]
pub struct ResultSink {
    tx: mpsc::UnboundedSender<CheckResult>,
    rx: mpsc::UnboundedReceiver<CheckResult>,
}

/// A cheap, cloneable handle for pushing into a ResultSink.
#[derive(Debug, Clone)]
pub struct SinkHandle {
    tx: mpsc::UnboundedSender<CheckResult>,
}

impl Default for ResultSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn handle(&self) -> SinkHandle {
        SinkHandle {
            tx: self.tx.clone(),
        }
    }

    /// Closes the sink and returns everything pushed so far, in push order.
    pub fn drain(self) -> Vec<CheckResult> {
        let Self { tx, mut rx } = self;
        drop(tx);

        let mut results = Vec::new();
        while let Ok(result) = rx.try_recv() {
            results.push(result);
        }
        results
    }
}

impl SinkHandle {
    pub fn push(&self, result: CheckResult) {
        // The receiver lives in the ResultSink, which outlives every check
        let _ = self.tx.send(result);
    }
}

/// Counts for the end-of-run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub found: usize,
    pub not_found: usize,
    pub network_failures: usize,
}

impl Summary {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let found = results.iter().filter(|r| r.exists).count();
        Self {
            total: results.len(),
            found,
            not_found: results.len() - found,
            network_failures: results.iter().filter(|r| r.is_network_failure()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::classify::reason_code;

    fn result(platform: &str, status: u16, exists: bool) -> CheckResult {
        CheckResult::new(
            "alice",
            platform,
            format!("https://{}.test/alice", platform),
            FetchOutcome {
                http_status: status,
                final_url: format!("https://{}.test/alice", platform),
                body: String::new(),
            },
            Classification {
                exists,
                reason: reason_code(status),
            },
        )
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), 15);
        assert_eq!(&ts[8..9], "T");
    }

    #[test]
    fn test_sink_keeps_push_order() {
        let sink = ResultSink::new();
        let handle = sink.handle();
        let other = handle.clone();

        handle.push(result("github", 200, true));
        other.push(result("gitlab", 404, false));
        drop(handle);
        drop(other);

        let results = sink.drain();
        let platforms: Vec<_> = results.iter().map(|r| r.platform.as_str()).collect();
        assert_eq!(platforms, vec!["github", "gitlab"]);
    }

    #[test]
    fn test_drain_empty_sink() {
        assert!(ResultSink::new().drain().is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            result("github", 200, true),
            result("gitlab", 404, false),
            result("reddit", 0, false),
        ];
        let summary = Summary::from_results(&results);
        assert_eq!(
            summary,
            Summary {
                total: 3,
                found: 1,
                not_found: 2,
                network_failures: 1,
            }
        );
    }
}
