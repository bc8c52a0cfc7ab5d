use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use api_client::{ApiClient, MemoryTokenStore};
use wiremock::MockServer;

/// Start a mock backend for one test.
pub async fn mock_backend() -> MockServer {
    MockServer::start().await
}

/// Build a client against the mock backend with an empty token store.
pub fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::builder()
        .base_url(server.uri())
        .token_store(store.clone())
        .build()
        .expect("client must build against mock backend");
    (client, store)
}

/// Build a client with both tokens pre-seeded.
pub fn client_with_tokens(
    server: &MockServer,
    access: &str,
    refresh: &str,
) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::with_tokens(access, refresh));
    let client = ApiClient::builder()
        .base_url(server.uri())
        .token_store(store.clone())
        .build()
        .expect("client must build against mock backend");
    (client, store)
}

/// Build a client that counts session-expired hook invocations.
pub fn client_with_expiry_hook(
    server: &MockServer,
    access: &str,
    refresh: &str,
) -> (ApiClient, Arc<MemoryTokenStore>, Arc<AtomicUsize>) {
    let store = Arc::new(MemoryTokenStore::with_tokens(access, refresh));
    let expired = Arc::new(AtomicUsize::new(0));
    let counter = expired.clone();
    let client = ApiClient::builder()
        .base_url(server.uri())
        .token_store(store.clone())
        .on_session_expired(move || {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        })
        .build()
        .expect("client must build against mock backend");
    (client, store, expired)
}

/// A consultation JSON body as the backend returns it.
pub fn consultation_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "status": status,
        "scheduledAt": "2026-08-10T14:00:00",
        "client": {"id": "u-2", "name": "John Smith", "email": "john@mail.com"},
        "lawyer": {"id": "l-1", "name": "Jane Doe", "email": "jane@firm.com"}
    })
}

/// A lawyer profile JSON body as the backend returns it.
pub fn lawyer_json(id: &str, name: &str, specialization: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": "lawyer@firm.com",
        "specialization": specialization,
        "bio": "Trial-tested advocate.",
        "hourlyRate": 180.0,
        "yearsOfExperience": 12
    })
}
