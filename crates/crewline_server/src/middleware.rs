//! Middleware for authentication

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use crewline_api::ApiError;
use crewline_core::{Identity, UserId};

use crate::state::AppState;

/// The authenticated session attached to each request.
///
/// Supplies the acting identity and admin flag that access checks
/// consume.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: UserId,
    pub is_admin: bool,
}

impl AuthedUser {
    /// Identity value fed to access checks.
    pub fn identity(&self) -> Identity {
        Identity::from(&self.id)
    }
}

/// Extract and validate bearer token from Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Authentication middleware
pub async fn require_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).ok_or_else(|| ApiError::Unauthorized {
        message: Some("Missing authorization header".to_string()),
    })?;

    // Validate token
    let claims =
        crate::auth::validate_access_token(token, &state.jwt_decoding_key).map_err(|_| {
            ApiError::Unauthorized {
                message: Some("Invalid or expired token".to_string()),
            }
        })?;

    // Attach the session to the request for handlers to use
    request.extensions_mut().insert(AuthedUser {
        id: claims.sub,
        is_admin: claims.is_admin,
    });

    Ok(next.run(request).await)
}
