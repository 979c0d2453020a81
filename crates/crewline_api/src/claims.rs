//! JWT claim types shared by the server and API clients

use crewline_core::UserId;
use serde::{Deserialize, Serialize};

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject: the authenticated user
    pub sub: UserId,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Token identifier
    pub jti: uuid::Uuid,
    /// Always "access"
    pub token_type: String,
    /// Whether the subject holds an administrative role
    #[serde(default)]
    pub is_admin: bool,
}
