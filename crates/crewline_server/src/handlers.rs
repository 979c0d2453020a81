//! HTTP request handlers

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

pub mod admin;
pub mod auth;
pub mod health;
pub mod notifications;
pub mod projects;
pub mod subscriptions;

use crate::state::AppState;

/// Build all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        // Projects
        .route("/projects", get(projects::list).post(projects::create))
        .route("/projects/:project_id", delete(projects::remove))
        .route("/projects/:project_id/members", post(projects::add_member))
        .route("/projects/:project_id/tasks", post(projects::create_task))
        .route(
            "/projects/:project_id/access/:identity",
            get(projects::member_access),
        )
        .route(
            "/users/:identity/projects/:project_id",
            get(projects::board_view),
        )
        // Notifications
        .route("/notifications", get(notifications::list))
        .route(
            "/notifications/:notification_id/read",
            post(notifications::mark_read),
        )
        // Subscriptions
        .route(
            "/subscriptions",
            get(subscriptions::status)
                .post(subscriptions::subscribe)
                .put(subscriptions::swap)
                .delete(subscriptions::cancel),
        )
        // Admin
        .route("/admin/users", get(admin::list_users))
        .layer(middleware::from_fn_with_state(
            state,
            crate::middleware::require_auth,
        ));

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth endpoints
        .route("/auth/login", post(auth::login))
        .merge(protected)
}
