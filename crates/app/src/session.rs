use api_client::ApiClient;

/// Backend endpoint used when no window origin is available (native dev).
const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";

/// Build the shared API client.
///
/// The session-expired hook hands control to the login entry point with a
/// full page navigation, which also drops all in-memory state.
pub fn create_client() -> ApiClient {
    ApiClient::builder()
        .base_url(api_base_url())
        .on_session_expired(redirect_to_login)
        .build()
        .expect("static API client configuration must be valid")
}

fn api_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return format!("{origin}/api");
            }
        }
    }
    DEFAULT_BASE_URL.to_string()
}

fn redirect_to_login() {
    tracing::warn!("session expired, returning to login");
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
