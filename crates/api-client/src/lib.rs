//! Authenticated REST client for the LegalEase backend.
//!
//! Wraps `reqwest` with bearer-token injection from a [`TokenStore`] and a
//! one-shot refresh-and-retry on authorization failure. Domain operations
//! (auth, lawyers, consultations) are thin request/response pairs that
//! return the backend JSON deserialized into `shared-types` records.

mod auth;
mod client;
mod consultations;
mod error;
mod lawyers;
mod store;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::ClientError;
pub use store::{MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

#[cfg(target_arch = "wasm32")]
pub use store::BrowserTokenStore;
