//! Billing provider seam
//!
//! The payment providers live behind this trait; Crewline code never
//! talks to a provider SDK directly. Implementations translate these
//! calls into whatever their provider's API wants.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crewline_core::SubscriptionId;

use crate::error::BillingResult;
use crate::plan::PriceId;

pub mod mock;

/// Product name attached to every Crewline agreement.
pub const SUBSCRIPTION_NAME: &str = "Crewline";

/// A billing agreement ready to submit to a provider.
#[derive(Debug, Clone)]
pub struct AgreementDraft {
    pub name: String,
    pub description: String,
    /// First billing moment; providers require this to be in the future.
    pub start_date: DateTime<Utc>,
    pub price_id: PriceId,
    /// Where the provider sends the user after approval.
    pub return_url: String,
}

impl AgreementDraft {
    /// Standard draft: named after the product, billing starts 24 hours
    /// out.
    pub fn standard(price_id: PriceId, return_url: impl Into<String>) -> Self {
        Self {
            name: format!("{} Agreement", SUBSCRIPTION_NAME),
            description: format!("{} Agreement", SUBSCRIPTION_NAME),
            start_date: Utc::now() + chrono::Duration::hours(24),
            price_id,
            return_url: return_url.into(),
        }
    }
}

/// Approval handoff returned when a subscription is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// URL the user must visit to approve the agreement
    pub approval_url: String,
}

/// Operations every payment provider integration supports.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Create a subscription agreement; the user approves it at the
    /// returned URL.
    async fn create_subscription(&self, draft: AgreementDraft) -> BillingResult<CheckoutSession>;

    /// Move an existing subscription to a new price and invoice the
    /// difference immediately.
    async fn swap_and_invoice(
        &self,
        subscription: &SubscriptionId,
        price: &PriceId,
    ) -> BillingResult<()>;

    /// Cancel a subscription. Returns when the paid-up period ends; the
    /// account keeps access until then.
    async fn cancel(&self, subscription: &SubscriptionId) -> BillingResult<DateTime<Utc>>;
}

#[async_trait]
impl<P: BillingProvider + ?Sized> BillingProvider for Box<P> {
    async fn create_subscription(&self, draft: AgreementDraft) -> BillingResult<CheckoutSession> {
        (**self).create_subscription(draft).await
    }

    async fn swap_and_invoice(
        &self,
        subscription: &SubscriptionId,
        price: &PriceId,
    ) -> BillingResult<()> {
        (**self).swap_and_invoice(subscription, price).await
    }

    async fn cancel(&self, subscription: &SubscriptionId) -> BillingResult<DateTime<Utc>> {
        (**self).cancel(subscription).await
    }
}
