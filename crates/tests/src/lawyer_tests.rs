use pretty_assertions::assert_eq;
use shared_types::UpdateLawyerRequest;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_with_tokens, lawyer_json, mock_backend};

#[tokio::test]
async fn list_lawyers_without_filter_returns_full_directory() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/lawyers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            lawyer_json("l-1", "Jane Doe", "Family Law"),
            lawyer_json("l-2", "Sam Rivers", "Tax Law"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc", "ref");
    let lawyers = client.list_lawyers(None).await.unwrap();

    assert_eq!(lawyers.len(), 2);
    assert_eq!(lawyers[0].specialization, "Family Law");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn list_lawyers_passes_search_query_param() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/lawyers"))
        .and(query_param("q", "family"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            lawyer_json("l-1", "Jane Doe", "Family Law"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc", "ref");
    let lawyers = client.list_lawyers(Some("family")).await.unwrap();

    assert_eq!(lawyers.len(), 1);
}

#[tokio::test]
async fn get_lawyer_fetches_by_id() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/lawyers/l-3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(lawyer_json("l-3", "Maria Alvarez", "Immigration")),
        )
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc", "ref");
    let lawyer = client.get_lawyer("l-3").await.unwrap();

    assert_eq!(lawyer.name, "Maria Alvarez");
    assert_eq!(lawyer.hourly_rate, 180.0);
}

#[tokio::test]
async fn update_lawyer_puts_editable_fields() {
    let server = mock_backend().await;

    Mock::given(method("PUT"))
        .and(path("/lawyers/l-3"))
        .and(body_json(serde_json::json!({
            "specialization": "Immigration",
            "bio": "Asylum and visa cases.",
            "hourlyRate": 200.0
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(lawyer_json("l-3", "Maria Alvarez", "Immigration")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc", "ref");
    let updated = client
        .update_lawyer(
            "l-3",
            &UpdateLawyerRequest {
                specialization: "Immigration".into(),
                bio: "Asylum and visa cases.".into(),
                hourly_rate: 200.0,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.specialization, "Immigration");
}
