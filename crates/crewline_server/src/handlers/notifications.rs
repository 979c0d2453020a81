//! Notification handlers

use axum::Extension;
use axum::extract::{Json, Path, Query, State};
use chrono::Utc;
use crewline_api::{
    ApiError, PaginatedResponse, PaginationParams, responses::NotificationResponse,
};
use crewline_core::{Notification, NotificationId};

use crate::{middleware::AuthedUser, state::AppState};

fn notification_response(notification: &Notification) -> NotificationResponse {
    NotificationResponse {
        id: notification.id,
        message: notification.message.clone(),
        notifier: notification.notifier.clone(),
        link: notification.link.clone(),
        read_at: notification.read_at,
        created_at: notification.created_at,
    }
}

/// List the session user's notifications, newest first
pub async fn list(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<NotificationResponse>>, ApiError> {
    let all = state.registry.notifications_for(&session.id);
    let total = all.len() as u64;

    let page = pagination.page.max(1);
    let start = ((page - 1) as usize).saturating_mul(pagination.limit as usize);

    let items = all
        .iter()
        .skip(start)
        .take(pagination.limit as usize)
        .map(notification_response)
        .collect();

    Ok(Json(PaginatedResponse::new(
        items,
        page,
        pagination.limit,
        total,
    )))
}

/// Mark one notification as read
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Path(notification_id): Path<String>,
) -> Result<Json<NotificationResponse>, ApiError> {
    let id = NotificationId::parse(&notification_id)?;
    let notification = state
        .registry
        .mark_notification_read(&session.id, &id, Utc::now())?;

    Ok(Json(notification_response(&notification)))
}
