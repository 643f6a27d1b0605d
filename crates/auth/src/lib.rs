//! `freightdesk-auth` — identity resolution and role-based access decisions.
//!
//! This crate is intentionally decoupled from HTTP: the API layer extracts the
//! raw identity claim and maps the decisions made here to status codes.

pub mod account;
pub mod authorize;
pub mod directory;
pub mod roles;

pub use account::{Account, AccountSummary};
pub use authorize::{authorize, AuthzError};
pub use directory::{AccountDirectory, AuthnError, IdentityResolver};
pub use roles::{CustomRole, Role};
