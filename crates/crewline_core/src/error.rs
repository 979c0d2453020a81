use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CoreError {
    #[error("Project not found")]
    #[diagnostic(
        code(crewline_core::project_not_found),
        help("No project with ID '{id}' is registered")
    )]
    ProjectNotFound { id: String },

    #[error("User not found")]
    #[diagnostic(
        code(crewline_core::user_not_found),
        help("No user with ID '{id}' is registered")
    )]
    UserNotFound { id: String },

    #[error("Notification not found")]
    #[diagnostic(
        code(crewline_core::notification_not_found),
        help("No notification with ID '{id}' exists for this user")
    )]
    NotificationNotFound { id: String },

    #[error("Permission denied")]
    #[diagnostic(
        code(crewline_core::permission_denied),
        help("Identity {identity} doesn't have permission to {action} on {resource}")
    )]
    PermissionDenied {
        identity: String,
        action: String,
        resource: String,
    },

    #[error("Serialization error")]
    #[diagnostic(
        code(crewline_core::serialization_error),
        help("Failed to serialize/deserialize {data_type}")
    )]
    SerializationError {
        data_type: String,
        #[source]
        cause: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
