//! Plan catalog and price identifiers

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::BillingError;

/// Provider-side price identifier for a plan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceId(pub String);

impl PriceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for PriceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plan keys offered at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Monthly,
    Yearly,
}

impl Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for PlanKind {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(BillingError::UnknownPlan {
                plan: other.to_string(),
            }),
        }
    }
}

/// Prices for the offered plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    pub monthly: PriceId,
    pub yearly: PriceId,
}

impl PlanCatalog {
    pub fn new(monthly: PriceId, yearly: PriceId) -> Self {
        Self { monthly, yearly }
    }

    pub fn price_id(&self, plan: PlanKind) -> &PriceId {
        match plan {
            PlanKind::Monthly => &self.monthly,
            PlanKind::Yearly => &self.yearly,
        }
    }

    /// Classify a stored price id back into a reportable plan name.
    /// Prices no longer in the catalog come back as `Unknown`.
    pub fn classify(&self, price: &PriceId) -> SubscribedPlan {
        if *price == self.monthly {
            SubscribedPlan::Monthly
        } else if *price == self.yearly {
            SubscribedPlan::Yearly
        } else {
            SubscribedPlan::Unknown
        }
    }
}

/// The four states subscription reporting distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscribedPlan {
    NotSubscribed,
    Monthly,
    Yearly,
    /// Subscribed, but to a price the catalog no longer lists
    Unknown,
}

impl SubscribedPlan {
    /// Whether this state names the same plan as `plan`.
    pub fn matches(&self, plan: PlanKind) -> bool {
        matches!(
            (self, plan),
            (Self::Monthly, PlanKind::Monthly) | (Self::Yearly, PlanKind::Yearly)
        )
    }
}

impl Display for SubscribedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSubscribed => write!(f, "Not Subscribed"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl From<PlanKind> for SubscribedPlan {
    fn from(plan: PlanKind) -> Self {
        match plan {
            PlanKind::Monthly => Self::Monthly,
            PlanKind::Yearly => Self::Yearly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> PlanCatalog {
        PlanCatalog::new(PriceId::new("price_monthly_01"), PriceId::new("price_yearly_01"))
    }

    #[test]
    fn plan_keys_parse() {
        assert_eq!("monthly".parse::<PlanKind>().unwrap(), PlanKind::Monthly);
        assert_eq!("yearly".parse::<PlanKind>().unwrap(), PlanKind::Yearly);
        assert!("weekly".parse::<PlanKind>().is_err());
    }

    #[test]
    fn classify_known_and_unknown_prices() {
        let catalog = catalog();

        assert_eq!(
            catalog.classify(&PriceId::new("price_monthly_01")),
            SubscribedPlan::Monthly
        );
        assert_eq!(
            catalog.classify(&PriceId::new("price_yearly_01")),
            SubscribedPlan::Yearly
        );
        assert_eq!(
            catalog.classify(&PriceId::new("price_retired_99")),
            SubscribedPlan::Unknown
        );
    }

    #[test]
    fn reported_names_match_the_api_contract() {
        assert_eq!(SubscribedPlan::NotSubscribed.to_string(), "Not Subscribed");
        assert_eq!(SubscribedPlan::Monthly.to_string(), "monthly");
        assert_eq!(SubscribedPlan::Yearly.to_string(), "yearly");
        assert_eq!(SubscribedPlan::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn matches_ignores_unknown_and_unsubscribed() {
        assert!(SubscribedPlan::Monthly.matches(PlanKind::Monthly));
        assert!(!SubscribedPlan::Monthly.matches(PlanKind::Yearly));
        assert!(!SubscribedPlan::Unknown.matches(PlanKind::Monthly));
        assert!(!SubscribedPlan::NotSubscribed.matches(PlanKind::Yearly));
    }
}
