//! Token persistence behind a small trait so the client works both in the
//! browser (localStorage) and in native tests (in-memory).

use std::sync::Mutex;

/// Storage key for the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The two persistent string slots holding session credentials.
///
/// Expiry is never tracked locally; an expired access token is discovered
/// reactively through a failed request.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Persist both tokens (on login/register).
    fn set_tokens(&self, access: &str, refresh: &str);
    /// Replace only the access token (after a refresh exchange).
    fn set_access_token(&self, access: &str);
    /// Remove all session state.
    fn clear(&self);
}

/// In-memory token store used on native targets and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Tokens>,
}

#[derive(Debug, Default)]
struct Tokens {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct with pre-seeded tokens.
    pub fn with_tokens(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_tokens(&access.into(), &refresh.into());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.inner.lock().expect("token store poisoned").access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.lock().expect("token store poisoned").refresh.clone()
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        let mut inner = self.inner.lock().expect("token store poisoned");
        inner.access = Some(access.to_string());
        inner.refresh = Some(refresh.to_string());
    }

    fn set_access_token(&self, access: &str) {
        let mut inner = self.inner.lock().expect("token store poisoned");
        inner.access = Some(access.to_string());
    }

    fn clear(&self) {
        let mut inner = self.inner.lock().expect("token store poisoned");
        inner.access = None;
        inner.refresh = None;
    }
}

/// Browser token store backed by `window.localStorage`.
///
/// Uses the same keys the backend's original web client wrote, so existing
/// sessions keep working. All storage failures degrade to "no token".
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
impl BrowserTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn access_token(&self) -> Option<String> {
        Self::storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }

    fn refresh_token(&self) -> Option<String> {
        Self::storage()?.get_item(REFRESH_TOKEN_KEY).ok().flatten()
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
        }
    }

    fn set_access_token(&self, access: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
