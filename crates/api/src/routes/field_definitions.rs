//! Route definitions for the `/field-definitions` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::field_definitions;
use crate::state::AppState;

/// Routes mounted at `/field-definitions`.
///
/// ```text
/// GET    /        -> list_definitions
/// PUT    /        -> replace_definitions
/// POST   /        -> create_definition
/// PUT    /{id}    -> update_definition
/// DELETE /{id}    -> delete_definition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(field_definitions::list_definitions)
                .put(field_definitions::replace_definitions)
                .post(field_definitions::create_definition),
        )
        .route(
            "/{id}",
            put(field_definitions::update_definition).delete(field_definitions::delete_definition),
        )
}
