use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use freightdesk_auth::IdentityResolver;

use crate::app::services::AppServices;
use crate::context::CallerContext;

/// Header carrying the caller's claimed account id.
pub const USER_ID_HEADER: &str = "user-id";

/// Resolve the caller's identity and attach it as a [`CallerContext`].
///
/// This never rejects: an unresolvable claim yields an anonymous context and
/// the route's guard decides. The claim is trusted as stated (no signature, no
/// session), which is only acceptable for a demo deployment.
pub async fn identity_middleware(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let claim = extract_claim(req.headers());
    let account = services.accounts.resolve(claim).cloned();

    if account.is_none() {
        tracing::debug!(claim = ?claim, "identity claim did not resolve");
    }

    req.extensions_mut().insert(CallerContext::new(account));
    next.run(req).await
}

fn extract_claim(headers: &HeaderMap) -> Option<&str> {
    headers.get(USER_ID_HEADER)?.to_str().ok()
}
