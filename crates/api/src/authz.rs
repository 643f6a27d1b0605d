//! Route-level access guard.
//!
//! Handlers call this before touching any state; on denial they must return
//! immediately without revealing anything about the resource.

use freightdesk_auth::{AuthzError, Role, authorize};

use crate::context::CallerContext;

pub fn require_role(caller: &CallerContext, required: &Role) -> Result<(), AuthzError> {
    authorize(caller.account(), required)
}
