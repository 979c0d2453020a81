use crate::id::UserId;
use crate::identity::Identity;
use crate::notification::NotifierData;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user
    pub id: UserId,

    /// Numeric identifier, when one exists for this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<u64>,

    /// Display name
    pub name: String,

    /// Unique handle
    pub username: String,

    /// Contact email, if provided
    pub email: Option<String>,

    /// Path to the user's avatar image
    pub avatar_path: Option<String>,

    /// When this user was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// When this user was last updated
    pub updated_at: chrono::DateTime<chrono::Utc>,

    /// User-specific settings (e.g., preferences, notification settings)
    #[serde(default)]
    pub settings: HashMap<String, serde_json::Value>,

    /// Additional metadata about the user (e.g., source, tags)
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl User {
    /// The canonical identity value for this user (UUID form).
    pub fn identity(&self) -> Identity {
        Identity::from(&self.id)
    }

    /// Payload embedded in notifications this user triggers.
    pub fn notifier_data(&self) -> NotifierData {
        NotifierData {
            name: self.name.clone(),
            username: self.username.clone(),
            avatar_path: self.avatar_path.clone(),
        }
    }
}
