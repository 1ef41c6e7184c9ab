// src/checker/classify.rs
// =============================================================================
// Decides whether a fetched profile page means "the account exists".
//
// Platforms disagree on how to say "no such user":
// - some return a real 404 / 410
// - some return 200 with an error page ("Sorry, this page isn't available")
// - some redirect to a login, signup or search page
//
// So we look at the status code, the final URL AND the body. Not-found
// signals win over a 2xx/3xx status. The order of the checks:
//
//   1. status 404 or 410                      -> does not exist
//   2. body contains a "not found" phrase     -> does not exist
//   3. final URL contains a blacklisted piece -> does not exist
//   4. status 200, 301 or 302                 -> exists
//   5. anything else                          -> does not exist
//
// Known limits of this heuristic:
// - A platform that answers 200 with the same page for every username will
//   always be reported as "exists" (false positive).
// - There is no "unknown" verdict: timeouts, 403s, 5xx and rate limiting all
//   come out as "does not exist".
// =============================================================================

use serde::Serialize;

use super::fetch::FetchOutcome;
use crate::config::{ScanConfig, DEFAULT_NOT_FOUND_KEYWORDS, DEFAULT_REDIRECT_BLACKLIST};

/// The verdict for one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub exists: bool,
    /// `status_<code>`, or `notfound` when no response was received
    pub reason: String,
}

/// Builds the reason string for a status code.
pub fn reason_code(http_status: u16) -> String {
    if http_status == 0 {
        "notfound".to_string()
    } else {
        format!("status_{}", http_status)
    }
}

/// Keyword-based response classifier.
///
/// Keywords are lower-cased once here; `classify` lower-cases its input
/// and does plain substring matching. Pure: the same outcome always gets
/// the same classification.
#[derive(Debug, Clone)]
pub struct Classifier {
    not_found_keywords: Vec<String>,
    redirect_blacklist: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_NOT_FOUND_KEYWORDS.iter().map(|s| s.to_string()),
            DEFAULT_REDIRECT_BLACKLIST.iter().map(|s| s.to_string()),
        )
    }
}

impl Classifier {
    pub fn new(
        not_found_keywords: impl IntoIterator<Item = String>,
        redirect_blacklist: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            not_found_keywords: normalize(not_found_keywords),
            redirect_blacklist: normalize(redirect_blacklist),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(
            config.not_found_keywords.iter().cloned(),
            config.redirect_blacklist.iter().cloned(),
        )
    }

    pub fn classify(&self, outcome: &FetchOutcome) -> Classification {
        let status = outcome.http_status;

        let not_found = matches!(status, 404 | 410)
            || contains_any(&outcome.body, &self.not_found_keywords)
            || contains_any(&outcome.final_url, &self.redirect_blacklist);

        let exists = !not_found && matches!(status, 200 | 301 | 302);

        Classification {
            exists,
            reason: reason_code(status),
        }
    }
}

// Lower-case and drop empty entries (an empty keyword would match everything)
fn normalize(keywords: impl IntoIterator<Item = String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    if haystack.is_empty() {
        return false;
    }
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}
