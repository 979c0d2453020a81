//! Subscription management
//!
//! Guards and orchestration over the billing provider: the provider
//! owns the money movement, this service owns the rules about when a
//! change is allowed.

use crate::error::{BillingError, BillingResult};
use crate::plan::{PlanCatalog, PlanKind};
use crate::provider::{AgreementDraft, BillingProvider, CheckoutSession};
use crate::subscription::Subscriber;

/// Outcome of a successful plan swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub message: String,
}

/// Outcome of a successful cancellation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOutcome {
    pub message: String,
    /// When the paid-up period (and the grace period with it) ends
    pub ends_at: chrono::DateTime<chrono::Utc>,
}

/// Subscription operations for one plan catalog and provider.
pub struct SubscriptionService<P> {
    provider: P,
    catalog: PlanCatalog,
    return_url: String,
}

impl<P: BillingProvider> SubscriptionService<P> {
    pub fn new(provider: P, catalog: PlanCatalog, return_url: impl Into<String>) -> Self {
        Self {
            provider,
            catalog,
            return_url: return_url.into(),
        }
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Start a new subscription on `plan`.
    ///
    /// Fails when the account already holds an active subscription to
    /// that same plan.
    pub async fn subscribe<S: Subscriber>(
        &self,
        subscriber: &S,
        plan: PlanKind,
    ) -> BillingResult<CheckoutSession> {
        if subscriber.subscribed_plan(&self.catalog).matches(plan) {
            return Err(BillingError::AlreadySubscribed { plan });
        }

        let draft =
            AgreementDraft::standard(self.catalog.price_id(plan).clone(), self.return_url.clone());

        tracing::info!(%plan, "creating subscription agreement");
        self.provider.create_subscription(draft).await
    }

    /// Move the active subscription to a different plan and invoice the
    /// difference.
    pub async fn swap<S: Subscriber>(
        &self,
        subscriber: &S,
        plan: PlanKind,
    ) -> BillingResult<SwapOutcome> {
        let current = subscriber.subscribed_plan(&self.catalog);
        if current.matches(plan) {
            return Err(BillingError::AlreadyOnPlan { plan });
        }

        let subscription = subscriber.subscription().ok_or(BillingError::NotSubscribed)?;
        self.provider
            .swap_and_invoice(&subscription.id, self.catalog.price_id(plan))
            .await?;

        tracing::info!(from = %current, to = %plan, "subscription plan swapped");
        Ok(SwapOutcome {
            message: format!(
                "Your subscription has been successfully updated to the {} plan",
                plan
            ),
        })
    }

    /// Cancel the active subscription, which must be on `plan`.
    pub async fn cancel<S: Subscriber>(
        &self,
        subscriber: &S,
        plan: PlanKind,
    ) -> BillingResult<CancelOutcome> {
        if !subscriber.subscribed_plan(&self.catalog).matches(plan) {
            return Err(BillingError::NotSubscribedToPlan { plan });
        }

        let subscription = subscriber.subscription().ok_or(BillingError::NotSubscribed)?;
        let ends_at = self.provider.cancel(&subscription.id).await?;

        tracing::info!(%plan, %ends_at, "subscription cancelled");
        Ok(CancelOutcome {
            message: "Your subscription has been canceled successfully.".to_string(),
            ends_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PriceId;
    use crate::provider::mock::MockBillingProvider;
    use crate::subscription::Subscription;
    use pretty_assertions::assert_eq;

    struct Account {
        subscription: Option<Subscription>,
    }

    impl Subscriber for Account {
        fn subscription(&self) -> Option<&Subscription> {
            self.subscription.as_ref()
        }
    }

    fn service() -> SubscriptionService<MockBillingProvider> {
        SubscriptionService::new(
            MockBillingProvider::new(),
            PlanCatalog::new(PriceId::new("pm"), PriceId::new("py")),
            "https://app.example/subscriptions",
        )
    }

    fn subscribed_monthly() -> Account {
        Account {
            subscription: Some(Subscription::active(PriceId::new("pm"), None)),
        }
    }

    #[tokio::test]
    async fn subscribe_hands_back_an_approval_url() {
        let service = service();
        let account = Account { subscription: None };

        let checkout = service
            .subscribe(&account, PlanKind::Monthly)
            .await
            .unwrap();

        assert!(checkout.approval_url.contains("price=pm"));
    }

    #[tokio::test]
    async fn subscribe_rejects_the_active_plan() {
        let service = service();
        let account = subscribed_monthly();

        let err = service
            .subscribe(&account, PlanKind::Monthly)
            .await
            .unwrap_err();

        assert!(matches!(err, BillingError::AlreadySubscribed { .. }));
    }

    #[tokio::test]
    async fn swap_to_the_same_plan_is_rejected() {
        let service = service();
        let account = subscribed_monthly();

        let err = service.swap(&account, PlanKind::Monthly).await.unwrap_err();

        assert!(matches!(err, BillingError::AlreadyOnPlan { .. }));
    }

    #[tokio::test]
    async fn swap_confirms_the_new_plan() {
        let service = service();
        let account = subscribed_monthly();

        let outcome = service.swap(&account, PlanKind::Yearly).await.unwrap();

        assert_eq!(
            outcome.message,
            "Your subscription has been successfully updated to the yearly plan"
        );
    }

    #[tokio::test]
    async fn swap_without_a_subscription_fails() {
        let service = service();
        let account = Account { subscription: None };

        let err = service.swap(&account, PlanKind::Yearly).await.unwrap_err();

        assert!(matches!(err, BillingError::NotSubscribed));
    }

    #[tokio::test]
    async fn cancel_requires_the_matching_plan() {
        let service = service();
        let account = subscribed_monthly();

        let err = service
            .cancel(&account, PlanKind::Yearly)
            .await
            .unwrap_err();

        assert!(matches!(err, BillingError::NotSubscribedToPlan { .. }));
    }

    #[tokio::test]
    async fn cancel_reports_the_grace_period_end() {
        let service = service();
        let account = subscribed_monthly();

        let outcome = service.cancel(&account, PlanKind::Monthly).await.unwrap();

        assert_eq!(
            outcome.message,
            "Your subscription has been canceled successfully."
        );
        assert!(outcome.ends_at > chrono::Utc::now());
    }
}
