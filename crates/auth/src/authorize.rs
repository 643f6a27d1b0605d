use thiserror::Error;

use crate::{Account, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("unauthorized: no account resolved for request")]
    UnknownIdentity,

    #[error("unauthorized: role '{0}' required")]
    Forbidden(Role),
}

/// Decide whether a resolved account may perform an operation gated on `required`.
///
/// - `admin` passes every check
/// - any other role passes only on exact equality with `required`
/// - no account resolved is always a denial
///
/// No IO, no panics. Halting the request on denial is the caller's job.
pub fn authorize(account: Option<&Account>, required: &Role) -> Result<(), AuthzError> {
    let Some(account) = account else {
        tracing::warn!(required = %required, "access denied: unknown identity");
        return Err(AuthzError::UnknownIdentity);
    };

    if account.role.is_admin() || &account.role == required {
        tracing::debug!(account_id = %account.id, role = %account.role, required = %required, "access granted");
        Ok(())
    } else {
        tracing::warn!(account_id = %account.id, role = %account.role, required = %required, "access denied: role mismatch");
        Err(AuthzError::Forbidden(required.clone()))
    }
}
