//! Subscription handlers

use std::str::FromStr;

use axum::Extension;
use axum::extract::{Json, State};
use chrono::Utc;
use crewline_api::{
    ApiError,
    requests::{CancelSubscriptionRequest, SubscribeRequest, SwapPlanRequest},
    responses::{
        CheckoutResponse, MessageResponse, NextPaymentResponse, SubscriptionStatusResponse,
    },
};
use crewline_billing::{PlanKind, Subscriber, SubscriptionStatus};

use crate::error::billing_api_error;
use crate::models::ServerUser;
use crate::{middleware::AuthedUser, state::AppState};

fn plan_from_request(plan: &str) -> Result<PlanKind, ApiError> {
    PlanKind::from_str(plan).map_err(|err| ApiError::validation(err.to_string()))
}

fn session_user(state: &AppState, session: &AuthedUser) -> Result<ServerUser, ApiError> {
    state
        .registry
        .user(&session.id)
        .ok_or_else(|| ApiError::not_found("user", session.id.to_string()))
}

/// Report the session user's subscription state
pub async fn status(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
) -> Result<Json<SubscriptionStatusResponse>, ApiError> {
    let user = session_user(&state, &session)?;

    let next_payment = user.next_payment().map(|payment| NextPaymentResponse {
        amount_cents: payment.amount_cents,
        currency: payment.currency.clone(),
        due_at: payment.due_at,
    });

    Ok(Json(SubscriptionStatusResponse {
        plan: user.subscribed_plan(state.billing.catalog()).to_string(),
        on_grace_period: user.has_grace_period(Utc::now()),
        next_payment,
    }))
}

/// Start a subscription; responds with the provider approval URL
pub async fn subscribe(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let plan = plan_from_request(&request.plan)?;
    let user = session_user(&state, &session)?;

    let checkout = state
        .billing
        .subscribe(&user, plan)
        .await
        .map_err(billing_api_error)?;

    Ok(Json(CheckoutResponse {
        approval_url: checkout.approval_url,
    }))
}

/// Move the active subscription to a different plan
pub async fn swap(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Json(request): Json<SwapPlanRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let plan = plan_from_request(&request.plan)?;
    let user = session_user(&state, &session)?;

    let outcome = state
        .billing
        .swap(&user, plan)
        .await
        .map_err(billing_api_error)?;

    let price = state.billing.catalog().price_id(plan).clone();
    state.registry.update_subscription(&session.id, |subscription| {
        if let Some(subscription) = subscription {
            subscription.price_id = price;
        }
    })?;

    Ok(Json(MessageResponse {
        message: outcome.message,
    }))
}

/// Cancel the active subscription
pub async fn cancel(
    State(state): State<AppState>,
    Extension(session): Extension<AuthedUser>,
    Json(request): Json<CancelSubscriptionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let plan = plan_from_request(&request.plan)?;
    let user = session_user(&state, &session)?;

    let outcome = state
        .billing
        .cancel(&user, plan)
        .await
        .map_err(billing_api_error)?;

    state.registry.update_subscription(&session.id, |subscription| {
        if let Some(subscription) = subscription {
            subscription.status = SubscriptionStatus::Cancelled;
            subscription.ends_at = Some(outcome.ends_at);
        }
    })?;

    Ok(Json(MessageResponse {
        message: outcome.message,
    }))
}
