//! Opaque user identities
//!
//! Crewline records reference users in two historical forms: a numeric
//! row identifier or a string-form UUID. `Identity` carries either form.
//! Comparison is strict within a form; a numeric identity never equals
//! its string rendering. Callers that need the two forms to meet are
//! responsible for normalizing before comparing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::id::UserId;

/// An opaque value identifying a user.
///
/// Serialized untagged: numeric identities travel as JSON numbers,
/// string identities as JSON strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Identity {
    /// Numeric row identifier.
    Numeric(u64),
    /// String-form unique identifier (UUID column). Not validated:
    /// member rows imported from older records carry arbitrary strings.
    Uuid(String),
}

impl Identity {
    /// Numeric-form identity.
    pub fn numeric(id: u64) -> Self {
        Self::Numeric(id)
    }

    /// String-form identity.
    pub fn uuid(uuid: impl Into<String>) -> Self {
        Self::Uuid(uuid.into())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{}", id),
            Self::Uuid(uuid) => write!(f, "{}", uuid),
        }
    }
}

impl From<u64> for Identity {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<String> for Identity {
    fn from(uuid: String) -> Self {
        Self::Uuid(uuid)
    }
}

impl From<&str> for Identity {
    fn from(uuid: &str) -> Self {
        Self::Uuid(uuid.to_string())
    }
}

impl From<uuid::Uuid> for Identity {
    fn from(uuid: uuid::Uuid) -> Self {
        Self::Uuid(uuid.to_string())
    }
}

impl From<&UserId> for Identity {
    fn from(id: &UserId) -> Self {
        Self::Uuid(id.uuid().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equality_is_strict_within_a_form() {
        assert_eq!(Identity::numeric(5), Identity::numeric(5));
        assert_eq!(Identity::uuid("abc"), Identity::uuid("abc"));
        assert_ne!(Identity::numeric(5), Identity::numeric(6));
        assert_ne!(Identity::uuid("abc"), Identity::uuid("abd"));
    }

    #[test]
    fn no_coercion_across_forms() {
        // The string "5" is a different identity than the number 5
        assert_ne!(Identity::numeric(5), Identity::uuid("5"));
    }

    #[test]
    fn untagged_wire_form() {
        let numeric: Identity = serde_json::from_str("7").unwrap();
        assert_eq!(numeric, Identity::numeric(7));

        let uuid: Identity = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(uuid, Identity::uuid("7"));

        assert_eq!(serde_json::to_string(&numeric).unwrap(), "7");
        assert_eq!(serde_json::to_string(&uuid).unwrap(), "\"7\"");
    }

    #[test]
    fn from_user_id_uses_bare_uuid() {
        let user_id = UserId::generate();
        let identity = Identity::from(&user_id);

        assert_eq!(identity, Identity::uuid(user_id.uuid().to_string()));
        // The typed-ID prefix stays out of the identity value
        assert_ne!(identity, Identity::uuid(user_id.to_string()));
    }
}
