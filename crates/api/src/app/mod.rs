//! HTTP API application wiring (Axum router + shared state).
//!
//! - `services.rs`: process-wide state (accounts, transport registry, items)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router over the given state.
pub fn build_app(services: Arc<AppServices>) -> Router {
    // Protected routes: every request gets a resolved (possibly anonymous) caller.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        Arc::clone(&services),
        middleware::identity_middleware,
    ));

    Router::new()
        .merge(routes::public_router())
        .merge(protected)
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Router over fresh in-memory state (public entrypoint used by `main.rs`).
pub fn build_default_app() -> Router {
    build_app(Arc::new(AppServices::in_memory()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, user_id: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::post(uri).header("content-type", "application/json");
        if let Some(id) = user_id {
            builder = builder.header(middleware::USER_ID_HEADER, id);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str, user_id: Option<&str>) -> Request<Body> {
        let mut builder = Request::get(uri);
        if let Some(id) = user_id {
            builder = builder.header(middleware::USER_ID_HEADER, id);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn payload() -> Value {
        json!({
            "numeroViaje": "T1",
            "origen": "A",
            "destino": "B",
            "transportista": "Acme",
            "tarifaAcordada": "150.5",
            "fechaSalida": "2024-01-01",
            "fechaEntrega": "2024-01-05",
        })
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = build_default_app();
        let (status, _) = call(&app, get("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn registration_scenario_from_manager_then_stranger() {
        let services = Arc::new(AppServices::in_memory());
        let app = build_app(Arc::clone(&services));

        let (status, body) = call(&app, post_json("/transportes", Some("1"), payload())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["transporte"]["tarifaAcordada"], 150.5);
        assert_eq!(body["transporte"]["fechaEntrega"], "2024-01-05");

        let (status, body) = call(&app, post_json("/transportes", Some("999"), payload())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "unauthorized");
        assert_eq!(services.transports.len(), 1);
    }

    #[tokio::test]
    async fn guard_runs_before_body_parsing() {
        let app = build_default_app();
        let req = Request::post("/transportes")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = call(&app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn malformed_body_from_authorized_caller_is_bad_request() {
        let app = build_default_app();
        let req = Request::post("/transportes")
            .header("content-type", "application/json")
            .header(middleware::USER_ID_HEADER, "2")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = call(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
    }

    #[tokio::test]
    async fn items_round_trip_and_unknown_id_is_404() {
        let app = build_default_app();

        let (status, created) = call(&app, post_json("/items", None, json!({ "name": "crate" }))).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_u64().unwrap();

        let (status, item) = call(&app, get(&format!("/items/{id}"), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["name"], "crate");

        let (status, listed) = call(&app, get("/items", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, body) = call(&app, get("/items/12345", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "item not found");

        let (status, _) = call(&app, get("/items/abc", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_object_item_is_rejected() {
        let app = build_default_app();
        let (status, _) = call(&app, post_json("/items", None, json!([1, 2, 3]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
