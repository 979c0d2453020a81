//! Server error types

use axum::response::{IntoResponse, Response};
use crewline_api::ApiError;
use crewline_billing::BillingError;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Core error: {0}")]
    Core(#[from] crewline_core::CoreError),

    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    Argon2(#[from] argon2::password_hash::Error),

    #[error("Invalid address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error")]
    Internal,
}

/// Billing failures surface as conflict or validation responses.
pub(crate) fn billing_api_error(err: BillingError) -> ApiError {
    match &err {
        BillingError::UnknownPlan { .. } => ApiError::validation(err.to_string()),
        BillingError::Provider { .. } => ApiError::ServiceUnavailable {
            retry_after_seconds: None,
        },
        _ => ApiError::Conflict {
            message: err.to_string(),
        },
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Convert to ApiError for consistent error responses
        let api_error = match self {
            ServerError::Core(e) => ApiError::from(e),
            ServerError::Billing(e) => billing_api_error(e),
            ServerError::Api(e) => e,
            ServerError::Jwt(_) => ApiError::Unauthorized {
                message: Some("Invalid or expired token".to_string()),
            },
            ServerError::Argon2(_) => ApiError::validation("Invalid password"),
            _ => ApiError::ServiceUnavailable {
                retry_after_seconds: Some(30),
            },
        };

        api_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewline_billing::PlanKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn guard_violations_become_conflicts() {
        let api = billing_api_error(BillingError::AlreadySubscribed {
            plan: PlanKind::Monthly,
        });
        assert_eq!(api.status_code(), 409);
    }

    #[test]
    fn unknown_plan_is_a_validation_error() {
        let api = billing_api_error(BillingError::UnknownPlan {
            plan: "weekly".to_string(),
        });
        assert_eq!(api.status_code(), 400);
    }
}
