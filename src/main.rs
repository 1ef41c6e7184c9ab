// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Collect usernames, fail early if there are none
// 3. Build the scan configuration (defaults < config file < flags)
// 4. Run the dispatcher while showing progress
// 5. Print found accounts and save CSV + JSON
// 6. Exit with proper code (0 = success, 1 = bad input, 2 = other error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;

use cli::{Cli, Commands, ScanArgs};
use social_hunter::checker::{CheckResult, Classifier, Dispatcher, HttpFetcher, Progress, Summary};
use social_hunter::{export, input, logger, HunterError, PlatformRegistry, ScanConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

// Input problems get 1, like a usage error; everything else 2
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<HunterError>() {
        Some(err) if err.is_input_error() => 1,
        _ => 2,
    }
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Scan(args) => handle_scan(args).await,
        Commands::Platforms { config } => handle_platforms(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<ScanConfig> {
    let config = match path {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };
    Ok(config)
}

fn build_registry(config: &ScanConfig, only: &[String]) -> Result<PlatformRegistry> {
    let registry = PlatformRegistry::builtin()
        .merge(config.platforms.clone())?
        .select(only)?;
    Ok(registry)
}

// Handles the 'scan' subcommand
async fn handle_scan(args: ScanArgs) -> Result<i32> {
    let (usernames, config, registry) = prepare_scan(&args)?;

    println!(
        "🔍 Checking {} username(s) on {} platform(s)",
        usernames.len(),
        registry.len()
    );

    let fetcher = HttpFetcher::from_config(&config).context("could not set up HTTP client")?;
    let dispatcher = Dispatcher::new(
        Arc::new(fetcher),
        Classifier::from_config(&config),
        config.dispatch_options(),
    );

    let reporter = tokio::spawn(report_progress(dispatcher.subscribe()));
    let results = dispatcher.run(&usernames, registry.as_slice()).await;

    // Dropping the dispatcher closes the progress channel and ends the reporter
    drop(dispatcher);
    let _ = reporter.await;

    print_found(&results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    let base_name = args
        .output_name
        .clone()
        .unwrap_or_else(export::default_base_name);
    let paths = export::save_results(&results, &args.output_dir, &base_name)
        .context("could not save results")?;

    println!("📁 Saved CSV -> {}", paths.csv.display());
    println!("📁 Saved JSON -> {}", paths.json.display());

    Ok(0)
}

// Everything that can be wrong with the input fails here, before any request.
// Usernames come first so a missing username wins over a bad config file.
fn prepare_scan(args: &ScanArgs) -> Result<(Vec<String>, ScanConfig, PlatformRegistry)> {
    let usernames = input::collect_usernames(args.username.as_deref(), args.userfile.as_deref())?;

    let mut config = load_config(args.config.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;

    let registry = build_registry(&config, &args.platforms)?;
    Ok((usernames, config, registry))
}

// Handles the 'platforms' subcommand
fn handle_platforms(config_path: Option<&Path>) -> Result<i32> {
    let config = load_config(config_path)?;
    let registry = build_registry(&config, &[])?;

    println!("{:<20} {}", "PLATFORM", "URL TEMPLATE");
    println!("{}", "=".repeat(80));
    for platform in registry.iter() {
        println!("{:<20} {}", platform.name, platform.url_template);
    }
    println!();
    println!("📋 Total: {}", registry.len());

    Ok(0)
}

// Redraws a single progress line on stderr until the channel closes
async fn report_progress(mut progress: watch::Receiver<Progress>) {
    while progress.changed().await.is_ok() {
        let Progress { completed, total } = *progress.borrow_and_update();
        eprint!("\r   Progress: {}/{}", completed, total);
    }
    eprintln!();
}

// Prints the accounts that look like they exist, then a summary
fn print_found(results: &[CheckResult]) {
    let mut found: Vec<&CheckResult> = results.iter().filter(|r| r.exists).collect();
    found.sort_by(|a, b| (&a.username, &a.platform).cmp(&(&b.username, &b.platform)));

    println!();
    if found.is_empty() {
        println!("❌ No accounts found");
    } else {
        println!("{:<20} {:<20} {:<8} {:<60}", "USERNAME", "PLATFORM", "STATUS", "URL");
        println!("{}", "=".repeat(108));

        for result in &found {
            // Truncate URL if too long for display
            let url_display = if result.final_url.chars().count() > 57 {
                let cut: String = result.final_url.chars().take(57).collect();
                format!("{}...", cut)
            } else {
                result.final_url.clone()
            };

            println!(
                "{:<20} {:<20} {:<8} {:<60}",
                result.username, result.platform, result.http_status, url_display
            );
        }
    }

    let summary = Summary::from_results(results);
    println!();
    println!("📊 Summary:");
    println!("   ✅ Found: {}", summary.found);
    println!("   ❌ Not found: {}", summary.not_found);
    println!("   ⚠️  No response: {}", summary.network_failures);
    println!("   📋 Total: {}", summary.total);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_username_wins_over_bad_config() {
        let args = ScanArgs {
            config: Some(PathBuf::from("/no/such/hunter.toml")),
            ..ScanArgs::default()
        };

        let err = prepare_scan(&args).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<HunterError>(),
            Some(HunterError::NoUsernames)
        ));
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_bad_config_with_username_exits_2() {
        let args = ScanArgs {
            username: Some("alice".to_string()),
            config: Some(PathBuf::from("/no/such/hunter.toml")),
            ..ScanArgs::default()
        };

        let err = prepare_scan(&args).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<HunterError>(),
            Some(HunterError::Config { .. })
        ));
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn test_prepare_scan_applies_flags_and_filter() {
        let args = ScanArgs {
            username: Some("alice".to_string()),
            platforms: vec!["github".to_string()],
            concurrency: Some(7),
            ..ScanArgs::default()
        };

        let (usernames, config, registry) = prepare_scan(&args).unwrap();

        assert_eq!(usernames, vec!["alice"]);
        assert_eq!(config.concurrency, 7);
        assert_eq!(registry.len(), 1);
    }
}
