// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every scan flag is optional. A flag that is given overrides the same key
// from the --config file, which in turn overrides the built-in default.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Option<T>: "was this flag given at all?"
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use social_hunter::{FetchMethod, ScanConfig};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "social-hunter",
    version,
    about = "Check whether a username exists on 180+ web platforms",
    long_about = "social-hunter requests the profile URL of a username on every known platform \
                  and guesses from the response whether the account exists. \
                  Results are saved as CSV and JSON."
)]
pub struct Cli {
    /// Show debug logs (RUST_LOG overrides this)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check one or more usernames on every platform
    ///
    /// Example: social-hunter scan -u alice
    Scan(ScanArgs),

    /// List the platforms that would be checked
    ///
    /// Example: social-hunter platforms --config hunter.toml
    Platforms {
        /// TOML config file that may add or replace platforms
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Single username to scan
    #[arg(long, short)]
    pub username: Option<String>,

    /// File containing usernames, one per line
    #[arg(long, short = 'f')]
    pub userfile: Option<PathBuf>,

    /// Only check these platforms (repeat the flag or separate with commas)
    #[arg(long = "platform", short = 'p', value_delimiter = ',')]
    pub platforms: Vec<String>,

    /// TOML config file with tunables, keyword lists and extra platforms
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Maximum number of checks in flight at once [default: 150]
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds [default: 10]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Extra attempts per check, used with --retry-on-failure [default: 1]
    #[arg(long)]
    pub retries: Option<u32>,

    /// Pause before each request, in milliseconds [default: 20]
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Retry checks that got no HTTP response (timeouts, DNS, resets)
    #[arg(long)]
    pub retry_on_failure: bool,

    /// HTTP method: head is faster, get lets the body be inspected
    #[arg(long, value_enum)]
    pub method: Option<FetchMethod>,

    /// Directory for the CSV and JSON files
    #[arg(long, short, default_value = ".")]
    pub output_dir: PathBuf,

    /// Base file name for the exports [default: results_<timestamp>]
    #[arg(long)]
    pub output_name: Option<String>,

    /// Also print all results as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Applies the flags that were given on top of `config`.
    pub fn apply_to(&self, config: &mut ScanConfig) {
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(retries) = self.retries {
            config.retries = retries;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if self.retry_on_failure {
            config.retry_on_failure = true;
        }
        if let Some(method) = self.method {
            config.method = method;
        }
    }
}
