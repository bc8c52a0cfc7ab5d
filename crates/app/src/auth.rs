use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

/// Global authentication state.
///
/// Holds the signed-in user for the lifetime of the page. Tokens persist in
/// the client's token store; the profile itself is in-memory only, so a
/// hard reload goes back through the login screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The current user's role. Signed-out visitors count as clients.
pub fn use_user_role() -> UserRole {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().map(|u| u.role).unwrap_or_default()
}

/// The current user's id, or empty when signed out.
pub fn use_user_id() -> String {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding
        .as_ref()
        .map(|u| u.user_id.clone())
        .unwrap_or_default()
}
