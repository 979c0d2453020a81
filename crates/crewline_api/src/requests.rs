//! API request types

use crewline_core::Identity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authentication request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum AuthRequest {
    /// Login with username/password
    Password { username: String, password: String },
    /// Login with API key
    ApiKey { api_key: String },
}

/// Project creation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectRequest {
    pub name: String,
    pub slug: String,
}

/// Member addition request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddMemberRequest {
    /// Identity of the user to add, in either identifier form
    pub identity: Identity,
}

/// Task creation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskRequest {
    pub name: String,
}

/// Subscription creation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SubscribeRequest {
    /// Plan key, resolved against the server's plan catalog
    pub plan: String,
}

/// Plan change request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SwapPlanRequest {
    pub plan: String,
}

/// Subscription cancellation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CancelSubscriptionRequest {
    /// Plan key the caller believes is active; must match
    pub plan: String,
}
