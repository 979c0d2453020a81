//! Crewline Core - Domain Types and Access Evaluation
//!
//! This crate provides the shared domain model for the Crewline
//! team-collaboration platform: typed entity identifiers, user and
//! project records, notifications, and the access predicate consumed by
//! both the HTTP server and UI clients.

pub mod access;
pub mod error;
pub mod id;
pub mod identity;
pub mod notification;
pub mod project;
pub mod users;

// Macros are automatically available at crate root due to #[macro_export]

pub use access::{AccessResult, AdminAccess, Member, evaluate_access, evaluate_admin_access};
pub use error::{CoreError, Result};
pub use id::{Id, IdError, IdType, NotificationId, ProjectId, SubscriptionId, TaskId, UserId};
pub use identity::Identity;
pub use notification::{Notification, NotifierData};
pub use project::{Project, ProjectMember, Task};
pub use users::User;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        AccessResult, AdminAccess, CoreError, Id, IdType, Identity, Member, Notification,
        NotificationId, NotifierData, Project, ProjectId, ProjectMember, Result, Task, TaskId,
        User, UserId, evaluate_access, evaluate_admin_access,
    };
}
