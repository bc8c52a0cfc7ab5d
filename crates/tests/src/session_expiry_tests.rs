use std::sync::atomic::Ordering;

use api_client::{ClientError, TokenStore};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_with_expiry_hook, mock_backend};

#[tokio::test]
async fn failed_refresh_clears_both_tokens_and_fires_hook_once() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/consultations/lawyer/l-1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Refresh token revoked"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store, expired) = client_with_expiry_hook(&server, "stale", "revoked-ref");
    let result = client.list_consultations_for_lawyer("l-1").await;

    assert!(matches!(result, Err(ClientError::SessionExpired)));
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
    assert_eq!(expired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn successful_requests_never_fire_the_expiry_hook() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/lawyers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let (client, _store, expired) = client_with_expiry_hook(&server, "acc", "ref");
    client.list_lawyers(None).await.unwrap();

    assert_eq!(expired.load(Ordering::SeqCst), 0);
}
