use std::sync::Arc;

use brainstudio_core::store::ConsoleStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone. Handlers build a fresh registry or form session from
/// the store per request; nothing mutable is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Backing store (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn ConsoleStore>,
}
