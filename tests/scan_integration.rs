use httpmock::prelude::*;
use social_hunter::checker::{Classifier, Dispatcher, FetchMethod, Fetcher, HttpFetcher};
use social_hunter::config::DEFAULT_REDIRECT_BLACKLIST;
use social_hunter::{export, PlatformSpec, ScanConfig};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(5), vec!["test-agent/1.0".to_string()]).unwrap()
}

// The mock server listens on a random port, which can contain "404"
fn blacklist_for_mock_server() -> Vec<String> {
    DEFAULT_REDIRECT_BLACKLIST
        .iter()
        .filter(|fragment| **fragment != "404")
        .map(|fragment| fragment.to_string())
        .collect()
}

fn fast_config() -> ScanConfig {
    ScanConfig {
        delay_ms: 0,
        timeout_secs: 5,
        redirect_blacklist: blacklist_for_mock_server(),
        ..ScanConfig::default()
    }
}

fn classifier() -> Classifier {
    Classifier::from_config(&fast_config())
}

#[tokio::test]
async fn test_existing_profile_head_request() {
    let server = MockServer::start_async().await;
    let profile = server
        .mock_async(|when, then| {
            when.path("/alice").header("user-agent", "test-agent/1.0");
            then.status(200);
        })
        .await;

    let outcome = fetcher().fetch(&server.url("/alice"), FetchMethod::Head).await;

    profile.assert_async().await;
    assert_eq!(outcome.http_status, 200);
    assert_eq!(outcome.final_url, server.url("/alice"));

    let verdict = classifier().classify(&outcome);
    assert!(verdict.exists);
    assert_eq!(verdict.reason, "status_200");
}

#[tokio::test]
async fn test_missing_profile_404() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/ghost");
            then.status(404);
        })
        .await;

    let outcome = fetcher().fetch(&server.url("/ghost"), FetchMethod::Head).await;
    let verdict = classifier().classify(&outcome);

    assert_eq!(outcome.http_status, 404);
    assert!(!verdict.exists);
    assert_eq!(verdict.reason, "status_404");
}

#[tokio::test]
async fn test_redirect_to_login_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/bob");
            then.status(302).header("Location", "/login?next=bob");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/login");
            then.status(200);
        })
        .await;

    let outcome = fetcher().fetch(&server.url("/bob"), FetchMethod::Head).await;

    assert_eq!(outcome.http_status, 200);
    assert!(outcome.final_url.contains("/login"));

    let verdict = classifier().classify(&outcome);
    assert!(!verdict.exists);
    assert_eq!(verdict.reason, "status_200");
}

#[tokio::test]
async fn test_get_reads_body_for_not_found_phrase() {
    let server = MockServer::start_async().await;
    let page = server
        .mock_async(|when, then| {
            when.method(GET).path("/carol");
            then.status(200)
                .header("Content-Type", "text/html")
                .body("<html><h1>Sorry, Profile Not Found</h1></html>");
        })
        .await;

    let outcome = fetcher().fetch(&server.url("/carol"), FetchMethod::Get).await;

    page.assert_async().await;
    assert_eq!(outcome.http_status, 200);
    assert!(outcome.body.contains("Profile Not Found"));
    assert!(!classifier().classify(&outcome).exists);
}

#[tokio::test]
async fn test_invalid_utf8_body_is_decoded_lossily() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/dave");
            then.status(200).body(vec![b'o', b'k', 0xff, 0xfe, b'!']);
        })
        .await;

    let outcome = fetcher().fetch(&server.url("/dave"), FetchMethod::Get).await;

    assert_eq!(outcome.http_status, 200);
    assert!(outcome.body.starts_with("ok"));
    assert!(outcome.body.ends_with('!'));
}

#[tokio::test]
async fn test_unreachable_host_is_status_zero() {
    let fetcher = HttpFetcher::new(Duration::from_secs(2), Vec::new()).unwrap();
    let url = "http://127.0.0.1:1/alice";

    let outcome = fetcher.fetch(url, FetchMethod::Head).await;

    assert_eq!(outcome.http_status, 0);
    assert_eq!(outcome.final_url, url);
    assert!(outcome.body.is_empty());

    let verdict = classifier().classify(&outcome);
    assert!(!verdict.exists);
    assert_eq!(verdict.reason, "notfound");
}

#[tokio::test]
async fn test_full_scan_against_mock_platforms() {
    let server = MockServer::start_async().await;

    // "code" knows alice, "pics" redirects everyone to signup, "chat" knows bob
    server
        .mock_async(|when, then| {
            when.path("/code/alice");
            then.status(200);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path_contains("/pics/");
            then.status(301).header("Location", "/signup");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/signup");
            then.status(200);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/chat/bob");
            then.status(200);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/chat/alice");
            then.status(410);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/code/bob");
            then.status(404);
        })
        .await;

    let platforms: Vec<PlatformSpec> = ["code", "pics", "chat"]
        .iter()
        .map(|name| {
            PlatformSpec::new(*name, format!("{}/{}/{{username}}", server.base_url(), name)).unwrap()
        })
        .collect();
    let usernames = vec!["alice".to_string(), "bob".to_string()];

    let config = fast_config();
    let dispatcher = Dispatcher::new(
        Arc::new(HttpFetcher::from_config(&config).unwrap()),
        Classifier::from_config(&config),
        config.dispatch_options(),
    );
    let results = dispatcher.run(&usernames, &platforms).await;

    assert_eq!(results.len(), 6);

    let verdicts: HashMap<(String, String), (bool, String)> = results
        .iter()
        .map(|r| {
            (
                (r.username.clone(), r.platform.clone()),
                (r.exists, r.reason.clone()),
            )
        })
        .collect();
    let verdict = |user: &str, platform: &str| verdicts[&(user.to_string(), platform.to_string())].clone();

    assert_eq!(verdict("alice", "code"), (true, "status_200".to_string()));
    assert_eq!(verdict("alice", "pics"), (false, "status_200".to_string()));
    assert_eq!(verdict("alice", "chat"), (false, "status_410".to_string()));
    assert_eq!(verdict("bob", "code"), (false, "status_404".to_string()));
    assert_eq!(verdict("bob", "pics"), (false, "status_200".to_string()));
    assert_eq!(verdict("bob", "chat"), (true, "status_200".to_string()));

    // Both exports carry every row
    let dir = TempDir::new().unwrap();
    let paths = export::save_results(&results, dir.path(), "scan").unwrap();

    let csv = std::fs::read_to_string(&paths.csv).unwrap();
    assert_eq!(csv.lines().count(), 7);

    let json: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&paths.json).unwrap()).unwrap();
    assert_eq!(json.len(), 6);
    assert_eq!(json.iter().filter(|row| row["exists"] == true).count(), 2);
}
