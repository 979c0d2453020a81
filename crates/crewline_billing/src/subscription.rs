//! Subscription state and the subscriber surface

use chrono::{DateTime, Utc};
use crewline_core::SubscriptionId;
use serde::{Deserialize, Serialize};

use crate::plan::{PlanCatalog, PriceId, SubscribedPlan};

/// Upcoming payment details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPayment {
    pub amount_cents: i64,
    pub currency: String,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
}

/// One account's subscription record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    /// Price the account is billed on
    pub price_id: PriceId,
    pub status: SubscriptionStatus,
    /// End of the already-paid period, set when cancelled
    pub ends_at: Option<DateTime<Utc>>,
    pub next_payment: Option<NextPayment>,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Fresh active subscription on `price_id`.
    pub fn active(price_id: PriceId, next_payment: Option<NextPayment>) -> Self {
        Self {
            id: SubscriptionId::generate(),
            price_id,
            status: SubscriptionStatus::Active,
            ends_at: None,
            next_payment,
            created_at: Utc::now(),
        }
    }

    /// Cancelled but still inside the paid-up period.
    pub fn on_grace_period(&self, now: DateTime<Utc>) -> bool {
        self.status == SubscriptionStatus::Cancelled
            && self.ends_at.is_some_and(|ends_at| ends_at > now)
    }
}

/// Subscription-state surface exposed on user-like types.
///
/// Implementors supply the record; every question about it is answered
/// here so the answers cannot diverge between call sites.
pub trait Subscriber {
    /// The account's current subscription, if any.
    fn subscription(&self) -> Option<&Subscription>;

    fn is_subscribed(&self) -> bool {
        self.subscription().is_some()
    }

    /// Plan name for display and guard checks.
    fn subscribed_plan(&self, catalog: &PlanCatalog) -> SubscribedPlan {
        match self.subscription() {
            Some(subscription) => catalog.classify(&subscription.price_id),
            None => SubscribedPlan::NotSubscribed,
        }
    }

    fn has_grace_period(&self, now: DateTime<Utc>) -> bool {
        self.subscription()
            .map(|subscription| subscription.on_grace_period(now))
            .unwrap_or(false)
    }

    /// Upcoming payment, absent without an active subscription.
    fn next_payment(&self) -> Option<&NextPayment> {
        self.subscription()
            .and_then(|subscription| subscription.next_payment.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanKind;
    use pretty_assertions::assert_eq;

    struct Account {
        subscription: Option<Subscription>,
    }

    impl Subscriber for Account {
        fn subscription(&self) -> Option<&Subscription> {
            self.subscription.as_ref()
        }
    }

    fn catalog() -> PlanCatalog {
        PlanCatalog::new(PriceId::new("pm"), PriceId::new("py"))
    }

    #[test]
    fn active_subscription_has_no_grace_period() {
        let subscription = Subscription::active(PriceId::new("pm"), None);
        assert!(!subscription.on_grace_period(Utc::now()));
    }

    #[test]
    fn cancelled_with_future_end_is_on_grace_period() {
        let now = Utc::now();
        let mut subscription = Subscription::active(PriceId::new("pm"), None);
        subscription.status = SubscriptionStatus::Cancelled;
        subscription.ends_at = Some(now + chrono::Duration::days(10));

        assert!(subscription.on_grace_period(now));
        assert!(!subscription.on_grace_period(now + chrono::Duration::days(11)));
    }

    #[test]
    fn cancelled_without_end_date_has_no_grace_period() {
        let mut subscription = Subscription::active(PriceId::new("pm"), None);
        subscription.status = SubscriptionStatus::Cancelled;

        assert!(!subscription.on_grace_period(Utc::now()));
    }

    #[test]
    fn unsubscribed_account_reports_not_subscribed() {
        let account = Account { subscription: None };

        assert!(!account.is_subscribed());
        assert_eq!(
            account.subscribed_plan(&catalog()),
            SubscribedPlan::NotSubscribed
        );
        assert!(!account.has_grace_period(Utc::now()));
        assert_eq!(account.next_payment(), None);
    }

    #[test]
    fn subscribed_account_reports_its_plan() {
        let account = Account {
            subscription: Some(Subscription::active(PriceId::new("py"), None)),
        };

        assert!(account.is_subscribed());
        assert!(account.subscribed_plan(&catalog()).matches(PlanKind::Yearly));
    }

    #[test]
    fn retired_price_reports_unknown() {
        let account = Account {
            subscription: Some(Subscription::active(PriceId::new("gone"), None)),
        };

        assert_eq!(account.subscribed_plan(&catalog()), SubscribedPlan::Unknown);
    }
}
