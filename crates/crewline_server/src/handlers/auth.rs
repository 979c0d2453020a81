//! Authentication handlers

use axum::extract::{Json, State};
use crewline_api::{ApiError, requests::AuthRequest, responses::AuthResponse};

use crate::{
    auth::{generate_access_token, verify_password},
    state::AppState,
};

/// Handle login requests
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    match request {
        AuthRequest::Password { username, password } => {
            let invalid = || ApiError::Unauthorized {
                message: Some("Invalid username or password".to_string()),
            };

            let user = state
                .registry
                .user_by_username(&username)
                .filter(|user| user.is_active)
                .ok_or_else(invalid)?;

            // Verify password
            if !verify_password(&password, &user.password_hash).map_err(|_| invalid())? {
                return Err(invalid());
            }

            let access_token = generate_access_token(
                user.id(),
                user.is_admin,
                &state.jwt_encoding_key,
                state.config.access_token_ttl,
            )
            .map_err(|_| ApiError::Core {
                message: "Failed to generate access token".to_string(),
            })?;

            Ok(Json(AuthResponse {
                access_token,
                token_type: "Bearer".to_string(),
                expires_in: state.config.access_token_ttl,
                user: user.profile_response(),
            }))
        }
        AuthRequest::ApiKey { api_key: _ } => {
            // TODO: Implement API key authentication
            Err(ApiError::ServiceUnavailable {
                retry_after_seconds: None,
            })
        }
    }
}
