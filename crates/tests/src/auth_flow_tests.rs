use api_client::{ClientError, TokenStore};
use pretty_assertions::assert_eq;
use shared_types::{LoginRequest, RegisterRequest, UserRole};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_for, client_with_tokens, mock_backend};

#[tokio::test]
async fn login_returns_user_and_persists_both_tokens() {
    let server = mock_backend().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "john@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": "acc-1",
            "refreshToken": "ref-1",
            "userId": "u-1",
            "name": "John Smith",
            "email": "john@example.com",
            "role": "CLIENT"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    let response = client
        .login(&LoginRequest {
            email: "john@example.com".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.user.name, "John Smith");
    assert_eq!(response.user.role, UserRole::Client);
    assert_eq!(store.access_token().as_deref(), Some("acc-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("ref-1"));
}

#[tokio::test]
async fn register_signs_the_new_user_in() {
    let server = mock_backend().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@firm.com",
            "password": "lexlexlex",
            "role": "LAWYER"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": "acc-2",
            "refreshToken": "ref-2",
            "userId": "u-2",
            "name": "Jane Doe",
            "email": "jane@firm.com",
            "role": "LAWYER"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    let response = client
        .register(&RegisterRequest {
            name: "Jane Doe".into(),
            email: "jane@firm.com".into(),
            password: "lexlexlex".into(),
            role: UserRole::Lawyer,
        })
        .await
        .unwrap();

    assert_eq!(response.user.role, UserRole::Lawyer);
    assert_eq!(store.access_token().as_deref(), Some("acc-2"));
}

#[tokio::test]
async fn login_failure_surfaces_backend_message() {
    let server = mock_backend().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    let result = client
        .login(&LoginRequest {
            email: "john@example.com".into(),
            password: "wrong".into(),
        })
        .await;

    match result {
        Err(err @ ClientError::Api(_)) => {
            assert_eq!(err.friendly_message(), "Invalid credentials");
        }
        other => panic!("expected api error, got {other:?}"),
    }
    assert_eq!(store.access_token(), None);
}

#[tokio::test]
async fn logout_revokes_refresh_token_and_clears_store() {
    let server = mock_backend().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(body_json(serde_json::json!({"refreshToken": "ref-9"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Logged out"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_with_tokens(&server, "acc-9", "ref-9");
    client.logout().await.unwrap();

    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
}

#[tokio::test]
async fn logout_clears_store_even_when_backend_fails() {
    let server = mock_backend().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (client, store) = client_with_tokens(&server, "acc-9", "ref-9");
    let result = client.logout().await;

    assert!(result.is_err());
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
}
