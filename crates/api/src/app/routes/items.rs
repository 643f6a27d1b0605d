//! Schemaless item documents: stored and echoed back as given.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use freightdesk_core::DomainError;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", get(get_item))
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (StatusCode::OK, Json(services.items.list())).into_response()
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    match body {
        Ok(Json(Value::Object(doc))) => (StatusCode::CREATED, Json(services.items.insert(doc))).into_response(),
        Ok(Json(_)) => errors::json_error(StatusCode::BAD_REQUEST, "invalid_input", "item must be a JSON object"),
        Err(rejection) => errors::json_error(StatusCode::BAD_REQUEST, "invalid_input", rejection.body_text()),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // A non-numeric id cannot match anything: same answer as an unknown one.
    let found = id
        .parse::<u64>()
        .map_err(|_| DomainError::not_found("item"))
        .and_then(|id| services.items.get(id));

    match found {
        Ok(doc) => (StatusCode::OK, Json(doc)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
