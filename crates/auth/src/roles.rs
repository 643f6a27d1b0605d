use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role tag carried by an account.
///
/// The set of roles is open-ended, but the two roles the service itself
/// reasons about are closed variants so that policy code never compares raw
/// strings. Everything else lands in [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Superuser: passes every role check.
    Admin,
    /// Logistics manager (`gestor_logistico`): may register and list transports.
    LogisticsManager,
    Other(CustomRole),
}

/// Name of a role the service does not reason about.
///
/// Only [`Role::parse`] builds one, so it never holds a reserved name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomRole(Cow<'static, str>);

impl CustomRole {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Role {
    pub const ADMIN: &'static str = "admin";
    pub const LOGISTICS_MANAGER: &'static str = "gestor_logistico";

    /// Map a role string to its variant. Never fails.
    pub fn parse(name: &str) -> Self {
        match name {
            Self::ADMIN => Self::Admin,
            Self::LOGISTICS_MANAGER => Self::LogisticsManager,
            other => Self::Other(CustomRole(Cow::Owned(other.to_string()))),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => Self::ADMIN,
            Self::LogisticsManager => Self::LOGISTICS_MANAGER,
            Self::Other(name) => name.as_str(),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}
