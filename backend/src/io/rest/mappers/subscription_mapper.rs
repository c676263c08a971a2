use shared::{
    CheckoutRequest, CheckoutResponse, PlanCatalogResponse, PlanSummary, SubscriptionResponse,
};

use crate::domain::checkout::CardDetails;
use crate::domain::commands::subscription::{CheckoutCommand, PlanCatalog, SubscriptionStatus};
use crate::domain::reference::PlanDefinition;

pub struct SubscriptionMapper;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SubscriptionMapper {
    pub fn to_dto(domain: SubscriptionStatus) -> SubscriptionResponse {
        SubscriptionResponse {
            tier: domain.tier,
            max_children: domain.entitlements.max_children,
            advanced_features: domain.entitlements.advanced_features,
        }
    }

    pub fn to_plan_dto(plan: &PlanDefinition) -> PlanSummary {
        PlanSummary {
            tier: plan.tier,
            name: plan.tier.display_name().to_string(),
            price: plan.price.to_string(),
            period: plan.period.to_string(),
            features: strings(plan.features),
            limitations: strings(plan.limitations),
            popular: plan.popular,
        }
    }

    pub fn to_catalog_dto(domain: PlanCatalog) -> PlanCatalogResponse {
        PlanCatalogResponse {
            current_tier: domain.current_tier,
            plans: domain.plans.iter().map(Self::to_plan_dto).collect(),
        }
    }

    pub fn to_checkout_command(request: CheckoutRequest) -> CheckoutCommand {
        CheckoutCommand {
            tier: request.tier,
            card: CardDetails {
                number: request.card_number,
                holder_name: request.card_holder,
                expiry: request.expiry,
                cvv: request.cvv,
            },
        }
    }

    pub fn to_checkout_dto(domain: SubscriptionStatus) -> CheckoutResponse {
        let message = format!("Bem-vinda ao plano {}! 🎉", domain.tier.display_name());
        CheckoutResponse {
            subscription: Self::to_dto(domain),
            success_message: message,
        }
    }
}
