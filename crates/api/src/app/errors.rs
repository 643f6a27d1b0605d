use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use freightdesk_auth::AuthzError;
use freightdesk_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_input", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        e @ DomainError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", e.to_string()),
    }
}

/// Every denial looks the same to the caller, whatever the reason.
pub fn authz_error_to_response(err: &AuthzError) -> axum::response::Response {
    tracing::debug!(reason = %err, "request halted by access guard");
    forbidden()
}

fn forbidden() -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, "unauthorized", "access not authorized")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
