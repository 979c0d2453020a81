//! Server-specific data models

use crewline_api::responses::UserResponse;
use crewline_billing::{Subscriber, Subscription};
use crewline_core::{Identity, User, UserId};
use serde::{Deserialize, Serialize};

/// Server-side user model: the core profile plus authentication and
/// billing fields that never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerUser {
    /// Core profile
    pub user: User,
    pub password_hash: String,
    pub is_admin: bool,
    pub is_active: bool,
    /// Current billing state, if the account ever subscribed
    pub subscription: Option<Subscription>,
}

impl ServerUser {
    pub fn new(user: User, password_hash: impl Into<String>) -> Self {
        Self {
            user,
            password_hash: password_hash.into(),
            is_admin: false,
            is_active: true,
            subscription: None,
        }
    }

    pub fn id(&self) -> UserId {
        self.user.id
    }

    pub fn identity(&self) -> Identity {
        self.user.identity()
    }

    /// Public profile shape returned by the API.
    pub fn profile_response(&self) -> UserResponse {
        UserResponse {
            id: self.user.id,
            name: self.user.name.clone(),
            username: self.user.username.clone(),
            email: self.user.email.clone(),
            avatar_path: self.user.avatar_path.clone(),
            is_admin: self.is_admin,
            created_at: self.user.created_at,
            updated_at: self.user.updated_at,
        }
    }
}

impl Subscriber for ServerUser {
    fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }
}
