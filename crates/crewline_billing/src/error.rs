use miette::Diagnostic;
use thiserror::Error;

use crate::plan::PlanKind;

#[derive(Error, Diagnostic, Debug)]
pub enum BillingError {
    #[error("You are already subscribed to this plan")]
    #[diagnostic(
        code(crewline_billing::already_subscribed),
        help("The {plan} plan is already active for this account")
    )]
    AlreadySubscribed { plan: PlanKind },

    #[error("You are already on this plan")]
    #[diagnostic(
        code(crewline_billing::already_on_plan),
        help("Swapping to {plan} would be a no-op")
    )]
    AlreadyOnPlan { plan: PlanKind },

    #[error("You are not subscribed to this plan")]
    #[diagnostic(
        code(crewline_billing::not_subscribed_to_plan),
        help("Cancellation names {plan}, which is not the active plan")
    )]
    NotSubscribedToPlan { plan: PlanKind },

    #[error("No active subscription")]
    #[diagnostic(
        code(crewline_billing::not_subscribed),
        help("This operation requires an active subscription")
    )]
    NotSubscribed,

    #[error("Unknown plan key: {plan}")]
    #[diagnostic(
        code(crewline_billing::unknown_plan),
        help("Offered plan keys are 'monthly' and 'yearly'")
    )]
    UnknownPlan { plan: String },

    #[error("Billing provider error: {message}")]
    #[diagnostic(
        code(crewline_billing::provider_error),
        help("The payment provider rejected or failed the operation")
    )]
    Provider { message: String },
}

pub type BillingResult<T> = std::result::Result<T, BillingError>;
