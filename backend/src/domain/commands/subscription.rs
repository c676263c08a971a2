use shared::SubscriptionTier;

use crate::domain::checkout::CardDetails;
use crate::domain::entitlement::Entitlements;
use crate::domain::reference::PlanDefinition;

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionStatus {
    pub tier: SubscriptionTier,
    pub entitlements: Entitlements,
}

#[derive(Debug, Clone)]
pub struct CheckoutCommand {
    pub tier: SubscriptionTier,
    pub card: CardDetails,
}

#[derive(Debug, Clone)]
pub struct PlanCatalog {
    pub current_tier: SubscriptionTier,
    pub plans: &'static [PlanDefinition],
}
