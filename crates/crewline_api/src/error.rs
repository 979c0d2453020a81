//! API error types

use miette::Diagnostic;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, thiserror::Error, Diagnostic, Serialize, Deserialize)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation failed: {message}")]
    #[diagnostic(
        code(api::validation_error),
        help("Check the field errors for specific validation issues")
    )]
    ValidationError {
        message: String,
        fields: Option<Vec<FieldError>>,
    },

    /// Authentication required
    #[error("Authentication required")]
    #[diagnostic(
        code(api::unauthorized),
        help("Please provide valid authentication credentials")
    )]
    Unauthorized { message: Option<String> },

    /// Insufficient permissions
    #[error("Insufficient permissions")]
    #[diagnostic(
        code(api::forbidden),
        help("You do not have access to this {resource}")
    )]
    Forbidden { resource: String },

    /// Resource not found
    #[error("Resource not found: {resource_type}")]
    #[diagnostic(
        code(api::not_found),
        help("The {resource_type} with ID '{resource_id}' does not exist")
    )]
    NotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Conflict with existing resource or state
    #[error("Resource conflict")]
    #[diagnostic(
        code(api::conflict),
        help("The resource already exists or is in a conflicting state")
    )]
    Conflict { message: String },

    /// Core error from crewline-core
    #[error("{message}")]
    #[diagnostic(code(api::core_error), help("Core operation failed"))]
    Core { message: String },

    /// Invalid entity ID
    #[error("Invalid ID: {0}")]
    #[diagnostic(
        code(api::invalid_id),
        help("IDs are written as 'prefix_uuid' for the entity type")
    )]
    InvalidId(String),

    /// Service temporarily unavailable
    #[error("Service temporarily unavailable")]
    #[diagnostic(
        code(api::service_unavailable),
        help("The service is temporarily down for maintenance")
    )]
    ServiceUnavailable { retry_after_seconds: Option<u64> },
}

/// Field-level validation error
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError { .. } => 400,
            ApiError::Unauthorized { .. } => 401,
            ApiError::Forbidden { .. } => 403,
            ApiError::NotFound { .. } => 404,
            ApiError::Conflict { .. } => 409,
            ApiError::ServiceUnavailable { .. } => 503,

            ApiError::Core { .. } => 500,
            ApiError::InvalidId(_) => 400,
        }
    }

    /// Create a validation error with field details
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            fields: None,
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Create a forbidden error for a named resource
    pub fn forbidden(resource: impl Into<String>) -> Self {
        Self::Forbidden {
            resource: resource.into(),
        }
    }
}

// Conversion implementations
impl From<crewline_core::CoreError> for ApiError {
    fn from(err: crewline_core::CoreError) -> Self {
        use crewline_core::CoreError;

        match err {
            CoreError::ProjectNotFound { id } => Self::not_found("project", id),
            CoreError::UserNotFound { id } => Self::not_found("user", id),
            CoreError::NotificationNotFound { id } => Self::not_found("notification", id),
            CoreError::PermissionDenied { resource, .. } => Self::Forbidden { resource },
            err @ CoreError::SerializationError { .. } => Self::Core {
                message: err.to_string(),
            },
        }
    }
}

impl From<crewline_core::IdError> for ApiError {
    fn from(err: crewline_core::IdError) -> Self {
        Self::InvalidId(err.to_string())
    }
}

// Server-side response conversion
#[cfg(feature = "server")]
impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_message = self.to_string();
        let error_type = match &self {
            ApiError::ValidationError { .. } => "validation_error",
            ApiError::Unauthorized { .. } => "unauthorized",
            ApiError::Forbidden { .. } => "forbidden",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Conflict { .. } => "conflict",
            ApiError::Core { .. } => "core_error",
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::ServiceUnavailable { .. } => "service_unavailable",
        };

        let body = serde_json::json!({
            "error": {
                "type": error_type,
                "message": error_message,
            },
            "timestamp": chrono::Utc::now(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_codes_follow_http_semantics() {
        assert_eq!(ApiError::validation("bad").status_code(), 400);
        assert_eq!(
            ApiError::Unauthorized { message: None }.status_code(),
            401
        );
        assert_eq!(ApiError::forbidden("project").status_code(), 403);
        assert_eq!(ApiError::not_found("project", "proj_x").status_code(), 404);
        assert_eq!(
            ApiError::Conflict {
                message: "already subscribed".into()
            }
            .status_code(),
            409
        );
    }

    #[test]
    fn core_not_found_maps_to_api_not_found() {
        let err = crewline_core::CoreError::ProjectNotFound {
            id: "proj_123".into(),
        };
        let api: ApiError = err.into();

        assert_eq!(api.status_code(), 404);
    }

    #[test]
    fn permission_denied_maps_to_forbidden() {
        let err = crewline_core::CoreError::PermissionDenied {
            identity: "7".into(),
            action: "delete".into(),
            resource: "project".into(),
        };
        let api: ApiError = err.into();

        assert_eq!(api.status_code(), 403);
    }
}
