// src/checker/mod.rs
// =============================================================================
// This module contains the username checking engine.
//
// Submodules:
// - fetch: Makes one HTTP request for a profile URL
// - classify: Turns an HTTP outcome into exists / does not exist
// - dispatch: Runs all checks concurrently under one global limit
// - result: The CheckResult record and the sink that collects them
//
// Data flow for one check:
//   WorkItem -> Fetcher -> FetchOutcome -> Classifier -> CheckResult -> sink
// =============================================================================

mod classify;
mod dispatch;
mod fetch;
mod result;

pub use classify::{reason_code, Classification, Classifier};
pub use dispatch::{work_items, DispatchOptions, Dispatcher, Progress, RetryPolicy, WorkItem};
pub use fetch::{FetchMethod, FetchOutcome, Fetcher, HttpFetcher, MAX_HEAD_BODY_BYTES};
pub use result::{timestamp_now, CheckResult, ResultSink, SinkHandle, Summary, TIMESTAMP_FORMAT};
