use api_client::{ClientError, TokenStore};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_with_tokens, consultation_json, mock_backend};

#[tokio::test]
async fn expired_access_token_refreshes_once_and_retries_with_new_token() {
    let server = mock_backend().await;

    // Original request with the stale token fails once
    Mock::given(method("GET"))
        .and(path("/consultations/client/u-1"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Exactly one refresh exchange
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(serde_json::json!({"refreshToken": "ref-1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"accessToken": "fresh"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Exactly one retry carrying the new token
    Mock::given(method("GET"))
        .and(path("/consultations/client/u-1"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([consultation_json("c-1", "PENDING")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_with_tokens(&server, "stale", "ref-1");
    let consultations = client.list_consultations_for_client("u-1").await.unwrap();

    assert_eq!(consultations.len(), 1);
    assert_eq!(store.access_token().as_deref(), Some("fresh"));
    // The refresh token is not rotated by the exchange
    assert_eq!(store.refresh_token().as_deref(), Some("ref-1"));
}

#[tokio::test]
async fn missing_refresh_token_surfaces_original_error_without_refresh_call() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/consultations/client/u-1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, store) = crate::common::client_for(&server);
    store.set_access_token("stale");

    let result = client.list_consultations_for_client("u-1").await;

    match result {
        Err(err @ ClientError::Api(_)) => {
            assert!(err.is_auth_failure());
            assert_eq!(err.friendly_message(), "Token expired");
        }
        other => panic!("expected surfaced auth failure, got {other:?}"),
    }
    // The stale token stays in place; nothing was cleared
    assert_eq!(store.access_token().as_deref(), Some("stale"));
}

#[tokio::test]
async fn second_unauthorized_after_refresh_propagates_as_ordinary_error() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/lawyers"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"accessToken": "fresh"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // The retried request is rejected as well; no second refresh loop
    Mock::given(method("GET"))
        .and(path("/lawyers"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Still unauthorized"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_with_tokens(&server, "stale", "ref-1");
    let result = client.list_lawyers(None).await;

    match result {
        Err(err @ ClientError::Api(_)) => assert!(err.is_auth_failure()),
        other => panic!("expected ordinary auth error, got {other:?}"),
    }
    // Session state survives; only a failed refresh exchange tears it down
    assert_eq!(store.access_token().as_deref(), Some("fresh"));
    assert_eq!(store.refresh_token().as_deref(), Some("ref-1"));
}
