use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_for, client_with_tokens, mock_backend};

#[tokio::test]
async fn request_with_stored_access_token_sends_bearer_header() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/lawyers"))
        .and(header("authorization", "Bearer acc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc-123", "ref-456");
    let lawyers = client.list_lawyers(None).await.unwrap();

    assert_eq!(lawyers.len(), 0);
}

#[tokio::test]
async fn request_without_token_omits_authorization_header() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/lawyers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    client.list_lawyers(None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}
