//! Admin-only handlers

use axum::Extension;
use axum::extract::{Json, State};
use crewline_api::{ApiError, responses::UserResponse};
use crewline_core::evaluate_admin_access;

use crate::{middleware::AuthedUser, state::AppState};

/// List all users. Gated by the admin flag alone; membership and
/// ownership play no part here.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    if !evaluate_admin_access(session.is_admin).access {
        return Err(ApiError::forbidden("admin area"));
    }

    let users: Vec<UserResponse> = state
        .registry
        .all_users()
        .iter()
        .map(|user| user.profile_response())
        .collect();

    Ok(Json(users))
}
