//! Identity resolution against the seeded account set.
//!
//! Identity is trust-on-claim: callers state an account id and nothing proves
//! they own it. This is a known security gap; a deployment outside a demo must
//! put a verified session/token resolver behind [`IdentityResolver`] instead.

use thiserror::Error;

use freightdesk_core::{AccountId, Entity};

use crate::{Account, Role};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthnError {
    /// Deliberately does not say whether the username or the password was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Maps a request-supplied identity claim to a stored account.
///
/// Resolution never fails loudly: absent, malformed and unknown claims all
/// resolve to `None`, and the access decision is left to [`crate::authorize`].
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, claim: Option<&str>) -> Option<&Account>;
}

/// Immutable, process-wide account list.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// The fixed accounts every process starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Account::new(1, "gestor", "password123", Role::LogisticsManager),
            Account::new(2, "admin", "admin123", Role::Admin),
        ])
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id() == id)
    }

    /// Check a username/password pair by exact equality on both.
    pub fn login(&self, username: &str, password: &str) -> Result<&Account, AuthnError> {
        match self
            .accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
        {
            Some(account) => {
                tracing::info!(account_id = %account.id, role = %account.role, "login succeeded");
                Ok(account)
            }
            None => {
                tracing::warn!(username, "login rejected");
                Err(AuthnError::InvalidCredentials)
            }
        }
    }
}

impl IdentityResolver for AccountDirectory {
    fn resolve(&self, claim: Option<&str>) -> Option<&Account> {
        let id: AccountId = claim?.parse().ok()?;
        self.get(id)
    }
}
