//! Crewline Billing - Subscription State and Provider Seam
//!
//! Provider-agnostic subscription management: the plan catalog, the
//! subscription-state surface exposed on user types, and the service
//! that enforces when a plan change is allowed. Payment providers live
//! behind the `BillingProvider` trait; no provider SDK enters this
//! crate.

pub mod error;
pub mod plan;
pub mod provider;
pub mod service;
pub mod subscription;

pub use error::{BillingError, BillingResult};
pub use plan::{PlanCatalog, PlanKind, PriceId, SubscribedPlan};
pub use provider::{AgreementDraft, BillingProvider, CheckoutSession, SUBSCRIPTION_NAME};
pub use service::{CancelOutcome, SubscriptionService, SwapOutcome};
pub use subscription::{NextPayment, Subscriber, Subscription, SubscriptionStatus};
