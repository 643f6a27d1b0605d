use axum::{
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod items;
pub mod system;
pub mod transports;

/// Routes open to everyone.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/login", post(auth::login))
        .merge(items::router())
}

/// Routes that run behind the identity middleware and check a role.
pub fn protected_router() -> Router {
    transports::router()
}
