use serde::Serialize;
use serde_json::Value;

use freightdesk_auth::AccountSummary;
use freightdesk_transport::Transport;

// -------------------------
// Request DTOs
// -------------------------

/// Login body. Missing fields behave like wrong credentials.
#[derive(Debug, Default, PartialEq)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Read credentials from any JSON value without ever rejecting it.
    ///
    /// Anything that is not an object, and any field that is not a string,
    /// reads as absent, so the attempt fails like a wrong password.
    pub fn from_value(body: &Value) -> Self {
        let Value::Object(fields) = body else {
            return Self::default();
        };
        let text = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_owned);

        Self {
            username: text("username"),
            password: text("password"),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct LoginSucceeded {
    pub success: bool,
    pub user: AccountSummary,
}

#[derive(Debug, Serialize)]
pub struct LoginFailed {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TransportRegistered {
    pub message: &'static str,
    pub transporte: Transport,
}
