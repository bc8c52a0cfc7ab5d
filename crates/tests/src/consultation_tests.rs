use pretty_assertions::assert_eq;
use shared_types::{with_status, ConsultationStatus, CreateConsultationRequest};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{client_with_tokens, consultation_json, mock_backend};

#[tokio::test]
async fn empty_backend_result_yields_empty_list_not_error() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/consultations/client/u-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc", "ref");
    let consultations = client.list_consultations_for_client("u-9").await.unwrap();

    assert_eq!(consultations.len(), 0);
}

#[tokio::test]
async fn create_consultation_posts_required_fields() {
    let server = mock_backend().await;

    Mock::given(method("POST"))
        .and(path("/consultations"))
        .and(body_json(serde_json::json!({
            "lawyerId": "l-1",
            "scheduledAt": "2026-09-01T10:00:00"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(consultation_json("c-7", "PENDING")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc", "ref");
    let created = client
        .create_consultation(&CreateConsultationRequest {
            lawyer_id: "l-1".into(),
            scheduled_at: "2026-09-01T10:00:00".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, "c-7");
    assert_eq!(created.status, ConsultationStatus::Pending);
}

#[tokio::test]
async fn confirming_a_request_removes_it_from_pending_on_refetch() {
    let server = mock_backend().await;

    // First fetch: the request is still pending
    Mock::given(method("GET"))
        .and(path("/consultations/lawyer/l-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([consultation_json("c-1", "PENDING")])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/consultations/c-1/status"))
        .and(body_json(serde_json::json!({"status": "CONFIRMED"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(consultation_json("c-1", "CONFIRMED")),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Refetch after the update reflects the new status
    Mock::given(method("GET"))
        .and(path("/consultations/lawyer/l-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([consultation_json("c-1", "CONFIRMED")])),
        )
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc", "ref");

    let before = client.list_consultations_for_lawyer("l-1").await.unwrap();
    assert_eq!(with_status(&before, ConsultationStatus::Pending).len(), 1);

    let updated = client
        .update_consultation_status("c-1", ConsultationStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(updated.status, ConsultationStatus::Confirmed);

    let after = client.list_consultations_for_lawyer("l-1").await.unwrap();
    assert_eq!(with_status(&after, ConsultationStatus::Pending).len(), 0);
    assert_eq!(with_status(&after, ConsultationStatus::Confirmed).len(), 1);
}

#[tokio::test]
async fn list_parses_nested_party_shapes() {
    let server = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/consultations/client/u-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": "c-3",
            "status": "CONFIRMED",
            "scheduledAt": "2026-08-12T09:00:00",
            "lawyer": {"id": "l-4", "user": {"name": "Maria Alvarez", "email": "maria@firm.com"}}
        }])))
        .mount(&server)
        .await;

    let (client, _store) = client_with_tokens(&server, "acc", "ref");
    let consultations = client.list_consultations_for_client("u-2").await.unwrap();

    let lawyer = consultations[0].lawyer.as_ref().unwrap();
    assert_eq!(lawyer.display_name("Unknown"), "Maria Alvarez");
}
