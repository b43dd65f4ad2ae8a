//! Integration tests for the connection builder and the file session cache.

use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zabbix_api::auth::{SessionCache, SessionFileCache};
use zabbix_api::{Endpoint, Password, Session, SessionRecord};

fn endpoint(server: &MockServer) -> Endpoint {
    Endpoint::new(format!("{}/api_jsonrpc.php", server.uri())).unwrap()
}

async fn mount_login_flow(server: &MockServer, expected_logins: u64) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "apiinfo.version"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": "7.0.0",
            "id": 1
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": "fresh-token",
            "id": 2
        })))
        .expect(expected_logins)
        .mount(server)
        .await;
}

fn cache_in(dir: &TempDir) -> SessionFileCache {
    SessionFileCache::new().with_path(dir.path().join(".zabbix_session"))
}

// ============================================================================
// Builder
// ============================================================================

#[tokio::test]
async fn test_builder_logs_in_and_saves_when_cache_is_empty() {
    let server = MockServer::start().await;
    mount_login_flow(&server, 1).await;
    let dir = TempDir::new().unwrap();

    let session = Session::builder(endpoint(&server))
        .cache(cache_in(&dir))
        .credentials("Admin", Password::new("zabbix"))
        .connect()
        .await
        .unwrap();

    assert_eq!(session.auth_token(), "fresh-token");
    let saved = cache_in(&dir).load().unwrap();
    assert_eq!(saved, session.record());
    assert_eq!(saved.api_version.unwrap().to_string(), "7.0.0");
}

#[tokio::test]
async fn test_builder_restores_fresh_cache_without_network() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    cache_in(&dir)
        .save(&SessionRecord {
            url: endpoint(&server),
            token: "cached-token".to_string(),
            api_version: Some("6.4.8".parse().unwrap()),
        })
        .unwrap();

    let session = Session::builder(endpoint(&server))
        .cache(cache_in(&dir))
        .connect()
        .await
        .unwrap();

    assert_eq!(session.auth_token(), "cached-token");
    assert_eq!(session.api_version().unwrap().to_string(), "6.4.8");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_builder_ignores_expired_cache() {
    let server = MockServer::start().await;
    mount_login_flow(&server, 1).await;
    let dir = TempDir::new().unwrap();
    cache_in(&dir)
        .save(&SessionRecord {
            url: endpoint(&server),
            token: "stale-token".to_string(),
            api_version: None,
        })
        .unwrap();

    let session = Session::builder(endpoint(&server))
        .cache(cache_in(&dir).with_lifetime(Duration::ZERO))
        .credentials("Admin", Password::new("zabbix"))
        .connect()
        .await
        .unwrap();

    assert_eq!(session.auth_token(), "fresh-token");
}

#[tokio::test]
async fn test_builder_ignores_cache_for_other_endpoint() {
    let server = MockServer::start().await;
    mount_login_flow(&server, 1).await;
    let dir = TempDir::new().unwrap();
    cache_in(&dir)
        .save(&SessionRecord {
            url: Endpoint::new("https://other.example.com/api_jsonrpc.php").unwrap(),
            token: "foreign-token".to_string(),
            api_version: None,
        })
        .unwrap();

    let session = Session::builder(endpoint(&server))
        .cache(cache_in(&dir))
        .credentials("Admin", Password::new("zabbix"))
        .connect()
        .await
        .unwrap();

    assert_eq!(session.auth_token(), "fresh-token");
    assert_eq!(cache_in(&dir).load().unwrap().url, endpoint(&server));
}

#[tokio::test]
async fn test_builder_without_cache_always_logs_in() {
    let server = MockServer::start().await;
    mount_login_flow(&server, 2).await;

    for _ in 0..2 {
        let session = Session::builder(endpoint(&server))
            .credentials("Admin", Password::new("zabbix"))
            .connect()
            .await
            .unwrap();
        assert_eq!(session.auth_token(), "fresh-token");
    }
}

// ============================================================================
// File Cache
// ============================================================================

#[test]
fn test_flush_removes_cached_session() {
    let dir = TempDir::new().unwrap();
    let cache = cache_in(&dir);
    cache
        .save(&SessionRecord {
            url: Endpoint::new("http://localhost/api_jsonrpc.php").unwrap(),
            token: "token".to_string(),
            api_version: None,
        })
        .unwrap();
    assert!(cache.has_session());

    cache.flush().unwrap();

    assert!(!cache.has_session());
    assert!(cache.flush().is_ok());
}
