//! Membership and ownership access checks
//!
//! One predicate answers the two questions the platform keeps asking:
//! may this identity view or act on a resource, and is the acting user
//! the resource's owner. The server authorization layer and the client
//! UI gate both call through here, so the two sides cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// A membership row as the predicate sees it.
///
/// A row may carry a numeric identifier, a UUID, or both; rows with only
/// one form populated are ordinary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl Member {
    /// Row carrying only a numeric identifier.
    pub fn numeric(id: u64) -> Self {
        Self {
            id: Some(id),
            uuid: None,
        }
    }

    /// Row carrying only a UUID.
    pub fn uuid(uuid: impl Into<String>) -> Self {
        Self {
            id: None,
            uuid: Some(uuid.into()),
        }
    }

    /// Exact-form match: numeric identities compare against `id`, string
    /// identities against `uuid`. Never across forms.
    pub fn matches(&self, identity: &Identity) -> bool {
        match identity {
            Identity::Numeric(n) => self.id == Some(*n),
            Identity::Uuid(u) => self.uuid.as_deref() == Some(u.as_str()),
        }
    }
}

/// Outcome of an access check for one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessResult {
    /// The checked identity may view or act on the resource.
    pub access: bool,
    /// The acting user is the resource's owner. Ownership does not imply
    /// membership.
    pub owner: bool,
}

/// Outcome of an admin-only check. Ownership is not a meaningful
/// question in this call shape, so the type does not carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccess {
    pub access: bool,
}

/// Decide whether `checked` may view or act on a resource, and whether
/// the acting user is that resource's owner.
///
/// Policy:
/// - `access`: `checked` appears in `members` (either identifier form,
///   exact equality), or `current_user` equals `checked`, or `is_admin`.
/// - `owner`: `current_user` equals `checked`, independent of the member
///   list and the admin flag.
/// - `members` may be `None` or empty; both mean "no matching member".
///
/// Pure and total over its inputs: no I/O, no mutation, and identical
/// arguments always produce the identical result.
pub fn evaluate_access(
    checked: &Identity,
    members: Option<&[Member]>,
    current_user: &Identity,
    is_admin: bool,
) -> AccessResult {
    let is_member =
        members.is_some_and(|members| members.iter().any(|member| member.matches(checked)));
    let owner = current_user == checked;

    AccessResult {
        access: is_member || owner || is_admin,
        owner,
    }
}

/// Admin-flag check for surfaces with no membership or ownership notion.
pub fn evaluate_admin_access(is_admin: bool) -> AdminAccess {
    AdminAccess { access: is_admin }
}
