//! Integration tests for the KYC provider client

use chimera_core::types::KycAuthParams;
use chimera_kyc::client::KycClient;
use chimera_kyc::error::ClientError;
use chrono::{Duration, Utc};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auth_params() -> KycAuthParams {
    KycAuthParams {
        uid: "user-1".to_string(),
        code: "code-1".to_string(),
        kind: None,
    }
}

#[tokio::test]
async fn test_client_builder() {
    let client = KycClient::builder()
        .base_url("http://localhost:8080/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = KycClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_confirm_magic_link_success() {
    let mock_server = MockServer::start().await;
    let expiry = Utc::now() + Duration::hours(2);

    Mock::given(method("POST"))
        .and(path("/api/auth/magic-link-confirm"))
        .and(body_json(json!({"userId": "user-1", "code": "code-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": {
                "accessToken": "access-1",
                "refreshToken": "refresh-1",
                "expiryTime": expiry.to_rfc3339(),
            }
        })))
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let tokens = client.confirm_magic_link(&auth_params()).await.unwrap();

    assert_eq!(tokens.access_token, "access-1");
    assert_eq!(tokens.refresh_token, "refresh-1");
    // Remaining lifetime derived from the absolute expiry
    assert!(tokens.expires_in > 7100 && tokens.expires_in <= 7200);
}

#[tokio::test]
async fn test_confirm_magic_link_defaults_lifetime() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/magic-link-confirm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": {
                "accessToken": "access-1",
                "refreshToken": "refresh-1",
            }
        })))
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let tokens = client.confirm_magic_link(&auth_params()).await.unwrap();

    assert_eq!(tokens.expires_in, 3600);
}

#[tokio::test]
async fn test_confirm_magic_link_missing_access_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/magic-link-confirm"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"token": {"refreshToken": "refresh-1"}})),
        )
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let result = client.confirm_magic_link(&auth_params()).await;

    assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_confirm_magic_link_missing_token_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/magic-link-confirm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": null})))
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let result = client.confirm_magic_link(&auth_params()).await;

    assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_confirm_magic_link_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/magic-link-confirm"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad link"))
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let result = client.confirm_magic_link(&auth_params()).await;

    assert!(matches!(result, Err(ClientError::BadRequest(_))));
}

#[tokio::test]
async fn test_confirm_magic_link_sends_link_kind() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/magic-link-confirm"))
        .and(body_json(json!({
            "userId": "user-1",
            "code": "code-1",
            "type": "resubmit",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": {"accessToken": "access-1", "refreshToken": "refresh-1"}
        })))
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let params = KycAuthParams {
        kind: Some("resubmit".to_string()),
        ..auth_params()
    };
    assert!(client.confirm_magic_link(&params).await.is_ok());
}

#[tokio::test]
async fn test_refresh_token_request_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh-token"))
        .and(body_json(json!({"refreshToken": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "access-2",
            "refreshToken": "refresh-2",
            "expiresIn": 1800,
        })))
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let response = client.refresh_token("refresh-1").await.unwrap();

    assert_eq!(response.access_token, "access-2");
    assert_eq!(response.refresh_token.as_deref(), Some("refresh-2"));
    assert_eq!(response.expires_in, Some(1800));
}

#[tokio::test]
async fn test_registration_status_sends_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Registration/status"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "approved", "message": "done"})),
        )
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let response = client.registration_status("access-1").await.unwrap();

    assert_eq!(response.status.as_deref(), Some("approved"));
    assert_eq!(response.message.as_deref(), Some("done"));
}

#[tokio::test]
async fn test_registration_status_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/Registration/status"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = KycClient::new(mock_server.uri()).unwrap();
    let result = client.registration_status("stale").await;

    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}
