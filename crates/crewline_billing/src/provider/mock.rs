//! Mock billing provider for testing.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use crewline_core::SubscriptionId;

use super::{AgreementDraft, BillingProvider, CheckoutSession};
use crate::error::BillingResult;
use crate::plan::PriceId;

/// Billing provider that approves everything without leaving the
/// process.
///
/// Useful for tests and local development: created agreements point at
/// a fake approval URL, swaps succeed immediately, and cancellations
/// leave 30 days of paid-up time.
#[derive(Debug, Clone)]
pub struct MockBillingProvider {
    approval_base: String,
}

impl MockBillingProvider {
    pub fn new() -> Self {
        Self {
            approval_base: "https://billing.invalid/approve".to_string(),
        }
    }

    pub fn with_approval_base(approval_base: impl Into<String>) -> Self {
        Self {
            approval_base: approval_base.into(),
        }
    }
}

impl Default for MockBillingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillingProvider for MockBillingProvider {
    async fn create_subscription(&self, draft: AgreementDraft) -> BillingResult<CheckoutSession> {
        Ok(CheckoutSession {
            approval_url: format!("{}?price={}", self.approval_base, draft.price_id),
        })
    }

    async fn swap_and_invoice(
        &self,
        _subscription: &SubscriptionId,
        _price: &PriceId,
    ) -> BillingResult<()> {
        Ok(())
    }

    async fn cancel(&self, _subscription: &SubscriptionId) -> BillingResult<DateTime<Utc>> {
        Ok(Utc::now() + Duration::days(30))
    }
}
