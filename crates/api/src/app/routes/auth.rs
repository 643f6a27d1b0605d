use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use serde_json::Value;

use crate::app::dto::{LoginFailed, LoginRequest, LoginSucceeded};
use crate::app::services::AppServices;

/// A body that cannot be read as JSON counts as empty, so every failed
/// attempt gets the same 401.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    let body = body.map(|Json(value)| value).unwrap_or_default();
    let body = LoginRequest::from_value(&body);

    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    match services.accounts.login(&username, &password) {
        Ok(account) => (
            StatusCode::OK,
            Json(LoginSucceeded {
                success: true,
                user: account.summary(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::UNAUTHORIZED,
            Json(LoginFailed {
                success: false,
                message: e.to_string(),
            }),
        )
            .into_response(),
    }
}
