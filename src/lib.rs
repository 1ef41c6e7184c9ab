// src/lib.rs
// =============================================================================
// social-hunter: check whether a username exists across many web platforms.
//
// Modules:
// - platforms: the registry of platform names and profile URL templates
// - checker: fetch, classify and dispatch, the concurrent checking engine
// - config: every tunable of a scan, with TOML loading
// - input: reading usernames from the command line and from files
// - export: CSV and JSON output
// - logger: tracing setup for the CLI
// - error: the library error type
// =============================================================================

pub mod checker;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod logger;
pub mod platforms;

pub use checker::{
    CheckResult, Classification, Classifier, DispatchOptions, Dispatcher, FetchMethod,
    FetchOutcome, Fetcher, HttpFetcher, Progress, RetryPolicy, Summary,
};
pub use config::ScanConfig;
pub use error::{HunterError, Result};
pub use platforms::{PlatformRegistry, PlatformSpec};
