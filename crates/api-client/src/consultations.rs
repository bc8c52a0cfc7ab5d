//! Consultation operations.

use reqwest::Method;
use shared_types::{
    Consultation, ConsultationStatus, CreateConsultationRequest, UpdateConsultationStatusRequest,
};

use crate::client::{ApiClient, NO_BODY};
use crate::error::ClientError;

impl ApiClient {
    /// Book a consultation with a lawyer.
    pub async fn create_consultation(
        &self,
        request: &CreateConsultationRequest,
    ) -> Result<Consultation, ClientError> {
        self.send(Method::POST, "/consultations", None, Some(request))
            .await
    }

    /// List the consultations booked by a client.
    pub async fn list_consultations_for_client(
        &self,
        client_id: &str,
    ) -> Result<Vec<Consultation>, ClientError> {
        self.send(
            Method::GET,
            &format!("/consultations/client/{client_id}"),
            None,
            NO_BODY,
        )
        .await
    }

    /// List the consultations assigned to a lawyer.
    pub async fn list_consultations_for_lawyer(
        &self,
        lawyer_id: &str,
    ) -> Result<Vec<Consultation>, ClientError> {
        self.send(
            Method::GET,
            &format!("/consultations/lawyer/{lawyer_id}"),
            None,
            NO_BODY,
        )
        .await
    }

    /// Move a consultation to a new status (accept, decline, complete).
    pub async fn update_consultation_status(
        &self,
        id: &str,
        status: ConsultationStatus,
    ) -> Result<Consultation, ClientError> {
        let request = UpdateConsultationStatusRequest { status };
        self.send(
            Method::PATCH,
            &format!("/consultations/{id}/status"),
            None,
            Some(&request),
        )
        .await
    }
}
