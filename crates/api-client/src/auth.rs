//! Authentication operations.

use reqwest::Method;
use shared_types::{AuthResponse, LoginRequest, LogoutRequest, RegisterRequest};

use crate::client::{ApiClient, NO_BODY};
use crate::error::ClientError;

impl ApiClient {
    /// Authenticate with email and password. On success both tokens are
    /// persisted to the store.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .send(Method::POST, "/auth/login", None, Some(request))
            .await?;
        self.token_store()
            .set_tokens(&response.access_token, &response.refresh_token);
        Ok(response)
    }

    /// Create an account. The backend signs the new user in directly, so
    /// the returned tokens are persisted like a login.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .send(Method::POST, "/auth/register", None, Some(request))
            .await?;
        self.token_store()
            .set_tokens(&response.access_token, &response.refresh_token);
        Ok(response)
    }

    /// End the session: revoke the refresh token server-side, then clear
    /// local state. The local teardown happens even when the revoke call
    /// fails; an unreachable backend must not keep a session alive.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let result = match self.token_store().refresh_token() {
            Some(refresh_token) => {
                let request = LogoutRequest { refresh_token };
                self.send_ok(Method::POST, "/auth/logout", None, Some(&request))
                    .await
            }
            None => self.send_ok(Method::POST, "/auth/logout", None, NO_BODY).await,
        };
        self.token_store().clear();
        result
    }
}
