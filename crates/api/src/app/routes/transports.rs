use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use freightdesk_auth::Role;
use freightdesk_transport::TransportDraft;

use crate::app::dto::TransportRegistered;
use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CallerContext;

pub fn router() -> Router {
    Router::new().route("/transportes", post(register_transport).get(list_transports))
}

pub async fn register_transport(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    body: Result<Json<TransportDraft>, JsonRejection>,
) -> axum::response::Response {
    if let Err(e) = crate::authz::require_role(&caller, &Role::LogisticsManager) {
        return errors::authz_error_to_response(&e);
    }

    // Body errors are only reported to callers that passed the guard.
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_input", rejection.body_text());
        }
    };

    match services.transports.register(&draft) {
        Ok(transporte) => (
            StatusCode::CREATED,
            Json(TransportRegistered {
                message: "transport registered",
                transporte,
            }),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_transports(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
) -> axum::response::Response {
    if let Err(e) = crate::authz::require_role(&caller, &Role::LogisticsManager) {
        return errors::authz_error_to_response(&e);
    }

    (StatusCode::OK, Json(services.transports.list())).into_response()
}
