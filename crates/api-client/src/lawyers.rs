//! Lawyer profile operations.

use reqwest::Method;
use shared_types::{LawyerProfile, UpdateLawyerRequest};

use crate::client::{ApiClient, NO_BODY};
use crate::error::ClientError;

impl ApiClient {
    /// List lawyer profiles, optionally filtered by a free-text query.
    pub async fn list_lawyers(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<LawyerProfile>, ClientError> {
        let params = query.map(|q| vec![("q", q.to_string())]);
        self.send(Method::GET, "/lawyers", params.as_deref(), NO_BODY)
            .await
    }

    /// Fetch a single lawyer profile.
    pub async fn get_lawyer(&self, id: &str) -> Result<LawyerProfile, ClientError> {
        self.send(Method::GET, &format!("/lawyers/{id}"), None, NO_BODY)
            .await
    }

    /// Update a lawyer's practice profile.
    pub async fn update_lawyer(
        &self,
        id: &str,
        request: &UpdateLawyerRequest,
    ) -> Result<LawyerProfile, ClientError> {
        self.send(Method::PUT, &format!("/lawyers/{id}"), None, Some(request))
            .await
    }
}
