use freightdesk_auth::Account;

/// Caller identity for a request, as resolved from its identity claim.
///
/// Anonymous when the claim was absent, malformed or unknown. Handlers never
/// see the raw claim, only the resolved account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerContext {
    account: Option<Account>,
}

impl CallerContext {
    pub fn new(account: Option<Account>) -> Self {
        Self { account }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }
}
