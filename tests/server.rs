//! HTTP tests for the content analyzer endpoint.
//!
//! Each test starts the real server on a free port in the background and
//! talks to it with `reqwest`.

use claims_content::config::Config;
use claims_content::server::run_server;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

// ─── Helpers ────────────────────────────────────────────────────────

fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn test_config(tmp: &TempDir, port: u16) -> Config {
    let catalog = tmp.path().join("seo_keywords.md");
    fs::write(
        &catalog,
        "## Primary Keywords\n\n1. insurance claims\n2. storm damage\n\n## Semantic Keywords\n\n- adjuster\n",
    )
    .unwrap();

    let config_content = format!(
        r#"
[keywords]
catalog = "{}"

[server]
bind = "127.0.0.1:{}"
"#,
        catalog.display(),
        port
    );
    toml::from_str(&config_content).unwrap()
}

async fn wait_for_server(port: u16) {
    let client = reqwest::Client::new();
    let url = format!("http://127.0.0.1:{}/health", port);
    for _ in 0..50 {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        if let Ok(resp) = client.get(&url).send().await {
            if resp.status().is_success() {
                return;
            }
        }
    }
    panic!("Server did not become ready within 5 seconds");
}

/// Start a server and return its base URL plus the guards keeping it alive.
async fn start_server() -> (String, TempDir, tokio::task::JoinHandle<()>) {
    let port = find_free_port();
    let tmp = TempDir::new().unwrap();
    let cfg = test_config(&tmp, port);

    let handle = tokio::spawn(async move {
        run_server(&cfg).await.ok();
    });
    wait_for_server(port).await;

    (format!("http://127.0.0.1:{}", port), tmp, handle)
}

async fn post_test(base: &str, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{}/api/test", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

// ─── Tests ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let (base, _tmp, handle) = start_server().await;

    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    handle.abort();
}

#[tokio::test]
async fn test_analyze_success_shape() {
    let (base, _tmp, handle) = start_server().await;

    let (status, body) = post_test(
        &base,
        json!({
            "content": "insurance claims insurance claims insurance claims storm damage",
            "targetKeywords": ["insurance claims", "storm damage"]
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["detectedKeywords"],
        json!(["insurance claims", "storm damage"])
    );
    assert!(body["keywordDensity"].as_f64().unwrap() > 0.0);
    assert!(body["seoScore"].as_u64().unwrap() <= 100);
    assert!(body["readabilityGrade"].is_string());
    let suggestions = body["suggestions"].as_array().unwrap();
    assert!(!suggestions
        .iter()
        .any(|s| s.as_str().unwrap().starts_with("Target keyword not found")));
    assert!(body.get("error").is_none());

    handle.abort();
}

#[tokio::test]
async fn test_empty_content_is_structured_error() {
    let (base, _tmp, handle) = start_server().await;

    let (status, body) = post_test(&base, json!({ "content": "   " })).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({ "success": false, "error": "content must not be empty" }));

    // Missing content behaves the same.
    let (status, body) = post_test(&base, json!({ "targetKeywords": ["x"] })).await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(body.get("seoScore").is_none());

    handle.abort();
}

#[tokio::test]
async fn test_malformed_payload_is_structured_error() {
    let (base, _tmp, handle) = start_server().await;

    let resp = reqwest::Client::new()
        .post(format!("{}/api/test", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());

    let (status, body) = post_test(&base, json!({ "content": "text", "source": "archived" })).await;
    assert!(status == 400 || status == 422, "unexpected status {}", status);
    assert_eq!(body["success"], false);

    handle.abort();
}

#[tokio::test]
async fn test_auto_and_comma_keywords() {
    let (base, _tmp, handle) = start_server().await;

    let text = "Call an adjuster about storm damage. Storm damage claims need photos.";

    let (status, body) =
        post_test(&base, json!({ "content": text, "targetKeywords": "auto" })).await;
    assert_eq!(status, 200);
    // Auto selection uses primary and secondary keywords only.
    assert_eq!(body["detectedKeywords"], json!(["storm damage"]));
    assert!(body["suggestions"]
        .as_array()
        .unwrap()
        .contains(&json!("Target keyword not found in content: \"insurance claims\"")));

    let (status, body) = post_test(
        &base,
        json!({ "content": text, "targetKeywords": "adjuster, hail" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["detectedKeywords"], json!(["adjuster"]));

    handle.abort();
}

#[tokio::test]
async fn test_missing_keywords_default_to_catalog() {
    let (base, _tmp, handle) = start_server().await;

    let (status, body) = post_test(
        &base,
        json!({ "content": "Insurance claims after storm damage take patience." }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body["detectedKeywords"],
        json!(["insurance claims", "storm damage"])
    );
    assert!(!body["suggestions"]
        .as_array()
        .unwrap()
        .contains(&json!("Specify target keywords to measure keyword usage")));

    handle.abort();
}

#[tokio::test]
async fn test_identical_requests_identical_responses() {
    let (base, _tmp, handle) = start_server().await;

    let payload = json!({
        "content": "# Hail Damage\n\nHail damage can crack shingles. Photograph hail damage early.",
        "targetKeywords": ["hail damage", "roof"],
        "source": "published"
    });
    let (_, a) = post_test(&base, payload.clone()).await;
    let (_, b) = post_test(&base, payload).await;
    assert_eq!(a, b);

    handle.abort();
}

#[tokio::test]
async fn test_keywords_endpoint() {
    let (base, _tmp, handle) = start_server().await;

    let body: Value = reqwest::get(format!("{}/api/keywords", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["primary"], json!(["insurance claims", "storm damage"]));
    assert_eq!(body["semantic"], json!(["adjuster"]));

    handle.abort();
}
