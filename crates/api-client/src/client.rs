use std::sync::Arc;

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{RefreshRequest, RefreshResponse};

use crate::error::ClientError;
use crate::store::TokenStore;

/// Query-string pairs for a request.
pub(crate) type Query<'a> = &'a [(&'a str, String)];

/// Marker for requests without a JSON body.
pub(crate) const NO_BODY: Option<&'static ()> = None;

/// Invoked after a failed refresh exchange, once local session state has
/// been cleared. The application hands control to its login entry point.
type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the LegalEase REST API.
///
/// Cheap to clone; all clones share the same token store, so a refresh
/// performed by one in-flight request is visible to the others. Concurrent
/// 401s are not coordinated: each failing request runs its own refresh
/// exchange and the last writer wins on the access-token slot.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a request and deserialize the JSON response body.
    pub(crate) async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<Query<'_>>,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send_with_refresh(method, path, query, body).await?;
        Self::read_json(response).await
    }

    /// Issue a request where only the status matters (e.g. logout).
    pub(crate) async fn send_ok<B>(
        &self,
        method: Method,
        path: &str,
        query: Option<Query<'_>>,
        body: Option<&B>,
    ) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send_with_refresh(method, path, query, body).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// The refresh-and-retry interceptor.
    ///
    /// On a 401: with no stored refresh token the response is passed
    /// through unchanged; otherwise the refresh token is exchanged for a
    /// new access token and the original request is re-issued exactly once.
    /// A failed exchange clears all session state and fires the
    /// session-expired hook. There is no loop; a second 401 after the
    /// retry propagates as an ordinary error.
    async fn send_with_refresh<B>(
        &self,
        method: Method,
        path: &str,
        query: Option<Query<'_>>,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let token = self.store.access_token();
        let response = self
            .dispatch(method.clone(), path, query, body, token)
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let Some(refresh_token) = self.store.refresh_token() else {
            return Ok(response);
        };

        match self.exchange_refresh(&refresh_token).await {
            Ok(access_token) => {
                self.store.set_access_token(&access_token);
                tracing::debug!(path, "access token refreshed, retrying request");
                self.dispatch(method, path, query, body, Some(access_token))
                    .await
            }
            Err(err) => {
                tracing::warn!(error = %err, "token refresh failed, clearing session");
                self.store.clear();
                if let Some(hook) = &self.on_session_expired {
                    hook();
                }
                Err(ClientError::SessionExpired)
            }
        }
    }

    /// Build and transmit a single request attempt.
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        query: Option<Query<'_>>,
        body: Option<&B>,
        bearer: Option<String>,
    ) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method, self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(token) = bearer {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Goes through a bare dispatch: no bearer header, no retry.
    async fn exchange_refresh(&self, refresh_token: &str) -> Result<String, ClientError> {
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let response = self
            .dispatch(Method::POST, "/auth/refresh", None, Some(&request), None)
            .await?;
        let refreshed: RefreshResponse = Self::read_json(response).await?;
        Ok(refreshed.access_token)
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ClientError::from_status(status, &body)
    }
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    base_url: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            store: None,
            on_session_expired: None,
        }
    }

    /// Set the API base URL (e.g. `http://localhost:8081/api`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use a specific token store instead of the platform default.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Register the handler invoked when the session is irrecoverably lost.
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?
            .trim_end_matches('/')
            .to_string();

        let store = self.store.unwrap_or_else(default_store);

        let http = reqwest::ClientBuilder::new()
            .user_agent("legalease-web/0.1.0")
            .build()?;

        Ok(ApiClient {
            http,
            base_url,
            store,
            on_session_expired: self.on_session_expired,
        })
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> Arc<dyn TokenStore> {
    Arc::new(crate::store::MemoryTokenStore::new())
}

#[cfg(target_arch = "wasm32")]
fn default_store() -> Arc<dyn TokenStore> {
    Arc::new(crate::store::BrowserTokenStore::new())
}
