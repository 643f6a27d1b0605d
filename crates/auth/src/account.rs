use serde::Serialize;

use freightdesk_core::{AccountId, Entity};

use crate::Role;

/// A seeded login account.
///
/// Passwords are stored and compared in plaintext; accounts exist only for the
/// lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Public view of an account, safe to return to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub username: String,
    pub role: Role,
}

impl Account {
    pub fn new(id: u64, username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            id: AccountId::new(id),
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }
}
