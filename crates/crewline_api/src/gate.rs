//! Client-side UI gating
//!
//! Helpers for clients deciding which interactive controls to render
//! from already-fetched page and session data. Advisory only: the server
//! runs the same predicate on every request and is the authority. Both
//! sides call the one implementation in `crewline_core::access`.

use crewline_core::{Identity, Member, evaluate_access, evaluate_admin_access};

/// Controls a client may render for a checked identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiGate {
    /// Render the resource at all
    pub can_view: bool,
    /// Render owner-only controls (rename, delete, member management)
    pub can_manage: bool,
}

/// Gate member-scoped controls.
pub fn member_controls(
    checked: &Identity,
    members: Option<&[Member]>,
    current_user: &Identity,
    is_admin: bool,
) -> UiGate {
    let result = evaluate_access(checked, members, current_user, is_admin);
    UiGate {
        can_view: result.access,
        can_manage: result.owner || is_admin,
    }
}

/// Gate admin-only controls.
pub fn admin_controls(is_admin: bool) -> bool {
    evaluate_admin_access(is_admin).access
}
