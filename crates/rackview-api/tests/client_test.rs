#![allow(clippy::unwrap_used)]
// Integration tests for `InventoryClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rackview_api::{Error, InventoryClient, ServerCreateRequest};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, InventoryClient) {
    let server = MockServer::start().await;
    let client = InventoryClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn token() -> SecretString {
    SecretString::from("test-token".to_owned())
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "admin", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-abc",
            "username": "admin",
            "role": "admin"
        })))
        .mount(&server)
        .await;

    let secret = SecretString::from("hunter2".to_owned());
    let login = client.login("admin", &secret).await.unwrap();

    assert_eq!(login.access_token, "jwt-abc");
    assert_eq!(login.username, "admin");
    assert_eq!(login.role, "admin");
}

#[tokio::test]
async fn test_login_bad_credentials_is_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let secret = SecretString::from("wrong".to_owned());
    let result = client.login("admin", &secret).await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

// ── Server tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_servers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/servers"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "hostname": "db-01",
            "os_type": "Linux",
            "os_version": "22.04",
            "server_type": "physical",
            "private_ip": "10.0.0.5",
            "public_ip": null,
            "primary_owner": "dba-team",
            "secondary_owner": null,
            "datacenter": "fra1",
            "environment": "production",
            "created_at": "2024-06-15T10:30:00",
            "created_by": "admin"
        }])))
        .mount(&server)
        .await;

    let servers = client.list_servers(&token()).await.unwrap();

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, 1);
    assert_eq!(servers[0].hostname, "db-01");
    assert_eq!(servers[0].server_type, "physical");
    assert!(servers[0].public_ip.is_none());
}

#[tokio::test]
async fn test_list_servers_expired_token_is_session_invalid() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/servers"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "Token has expired"})))
        .mount(&server)
        .await;

    let result = client.list_servers(&token()).await;

    assert!(
        matches!(result, Err(Error::SessionInvalid)),
        "expected SessionInvalid, got: {result:?}"
    );
}

#[tokio::test]
async fn test_create_server_validation_error_passes_message_through() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/servers"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "Invalid private IP address"})),
        )
        .mount(&server)
        .await;

    let req = ServerCreateRequest {
        hostname: Some("web-01".into()),
        private_ip: Some("not-an-ip".into()),
        ..ServerCreateRequest::default()
    };
    let result = client.create_server(&token(), &req).await;

    match result {
        Err(Error::Validation { ref message }) => {
            assert_eq!(message, "Invalid private IP address");
        }
        other => panic!("expected Validation error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_server_omits_absent_fields() {
    let (server, client) = setup().await;

    // Exact body match: no nulls, no empty strings for omitted fields.
    Mock::given(method("POST"))
        .and(path("/api/servers"))
        .and(body_json(json!({
            "hostname": "web-01",
            "os_type": "Linux",
            "os_version": "22.04",
            "server_type": "virtual",
            "private_ip": "10.0.0.9",
            "primary_owner": "web-team",
            "datacenter": "fra1",
            "environment": "staging"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"message": "Server added successfully", "id": 7})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let req = ServerCreateRequest {
        hostname: Some("web-01".into()),
        os_type: Some("Linux".into()),
        os_version: Some("22.04".into()),
        server_type: Some("virtual".into()),
        private_ip: Some("10.0.0.9".into()),
        primary_owner: Some("web-team".into()),
        datacenter: Some("fra1".into()),
        environment: Some("staging".into()),
        ..ServerCreateRequest::default()
    };
    let ack = client.create_server(&token(), &req).await.unwrap();

    assert_eq!(ack.id, Some(7));
}

#[tokio::test]
async fn test_delete_server_forbidden() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/servers/3"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"error": "Admin access required"})),
        )
        .mount(&server)
        .await;

    let result = client.delete_server(&token(), 3).await;

    match result {
        Err(Error::Forbidden { ref message }) => {
            assert_eq!(message, "Admin access required");
        }
        other => panic!("expected Forbidden error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_server_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/servers/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not Found"})))
        .mount(&server)
        .await;

    let result = client.delete_server(&token(), 99).await;

    assert!(
        result.as_ref().is_err_and(rackview_api::Error::is_not_found),
        "expected NotFound, got: {result:?}"
    );
}

// ── Log tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_logs() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 12,
                "user": "admin",
                "action": "SERVER_DELETED",
                "resource": "server:db-01",
                "details": null,
                "timestamp": "2024-06-15T10:35:00",
                "ip_address": "192.168.1.50"
            },
            {
                "id": 11,
                "user": "unknown",
                "action": "LOGIN_FAILED",
                "resource": "system",
                "details": null,
                "timestamp": "2024-06-15T10:30:00",
                "ip_address": null
            }
        ])))
        .mount(&server)
        .await;

    let logs = client.list_logs(&token()).await.unwrap();

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].action, "SERVER_DELETED");
    assert_eq!(logs[0].ip_address.as_deref(), Some("192.168.1.50"));
    assert!(logs[1].ip_address.is_none());
}

// ── Malformed payload tests ─────────────────────────────────────────

#[tokio::test]
async fn test_long_multibyte_body_fails_closed_without_panicking() {
    let (server, client) = setup().await;

    // Over 200 bytes of multibyte characters, so naive byte-indexed
    // truncation of the preview would split a character.
    let body = format!("a{}", "é".repeat(150));
    Mock::given(method("GET"))
        .and(path("/api/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let result = client.list_servers(&token()).await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_success_body_fails_closed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let result = client.list_servers(&token()).await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}
