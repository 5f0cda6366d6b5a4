use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brainstudio_core::error::CoreError;
use brainstudio_core::form_fields::FieldErrors;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the rejected-form case.
/// Every variant renders as `{ "error": message, "code": CODE }`; a
/// rejected form also carries its per-field `fields` map.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `brainstudio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Submitted form values failed field validation.
    #[error("Form has {} invalid field(s)", .0.len())]
    InvalidForm(FieldErrors),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Persistence(msg) => {
                    tracing::warn!(error = %msg, "Store unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "SERVICE_UNAVAILABLE",
                        msg.clone(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::InvalidForm(errors) => {
                let body = json!({
                    "error": self.to_string(),
                    "code": "INVALID_FORM",
                    "fields": errors,
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
