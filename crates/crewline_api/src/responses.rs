//! API response types

use crewline_core::{
    access::AccessResult,
    id::{NotificationId, ProjectId, TaskId, UserId},
    identity::Identity,
    notification::NotifierData,
};
use serde::{Deserialize, Serialize};

/// Authentication response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Access token for API requests
    pub access_token: String,
    /// Token type (usually "Bearer")
    pub token_type: String,
    /// Expiration time in seconds
    pub expires_in: u64,
    /// User information
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: Option<String>,
    pub avatar_path: Option<String>,
    pub is_admin: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Project response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub name: String,
    pub slug: String,
    pub owner: Identity,
    pub member_count: u32,
    pub task_count: u32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Project member response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMemberResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub joined_at: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}

/// Project with members response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectWithMembersResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    /// Included only when the viewer owns the project or is an admin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<ProjectMemberResponse>>,
    /// The viewer's standing, for client-side control gating
    pub viewer: AccessResult,
}

/// Task response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: TaskId,
    pub name: String,
    pub completed: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Notification response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: NotificationId,
    pub message: String,
    pub notifier: NotifierData,
    pub link: String,
    pub read_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Current subscription state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionStatusResponse {
    /// Plan name: "monthly", "yearly", "Not Subscribed", or "Unknown"
    pub plan: String,
    pub on_grace_period: bool,
    pub next_payment: Option<NextPaymentResponse>,
}

/// Upcoming payment details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextPaymentResponse {
    pub amount_cents: i64,
    pub currency: String,
    pub due_at: chrono::DateTime<chrono::Utc>,
}

/// Checkout handoff for a newly created subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// URL the user must visit to approve the agreement
    pub approval_url: String,
}

/// Confirmation message for subscription changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}
