//! Subscription tier, plan catalog and the mock checkout flow.

use anyhow::{Context, Result};
use log::info;
use shared::SubscriptionTier;

use crate::domain::checkout::CheckoutService;
use crate::domain::commands::subscription::{CheckoutCommand, PlanCatalog, SubscriptionStatus};
use crate::domain::entitlement::Entitlements;
use crate::domain::errors::SubscriptionError;
use crate::domain::reference::PLAN_CATALOG;
use crate::storage::kv::{KvConnection, PreferenceRepository};
use crate::storage::traits::PreferenceStorage;

#[derive(Clone)]
pub struct SubscriptionService {
    preference_repository: PreferenceRepository,
    checkout_service: CheckoutService,
}

impl SubscriptionService {
    pub fn new(connection: &KvConnection, checkout_service: CheckoutService) -> Self {
        Self {
            preference_repository: connection.create_preference_repository(),
            checkout_service,
        }
    }

    fn status(tier: SubscriptionTier) -> SubscriptionStatus {
        SubscriptionStatus {
            tier,
            entitlements: Entitlements::for_tier(tier),
        }
    }

    pub fn get_subscription(&self) -> SubscriptionStatus {
        Self::status(self.preference_repository.get_tier())
    }

    /// Switch tiers without payment; only the free tier can be selected this way
    pub fn set_tier(&self, tier: SubscriptionTier) -> Result<SubscriptionStatus> {
        if tier != SubscriptionTier::Free {
            return Err(SubscriptionError::CheckoutRequired(tier).into());
        }
        self.preference_repository.store_tier(tier)?;
        Ok(Self::status(tier))
    }

    pub fn get_plan_catalog(&self) -> PlanCatalog {
        PlanCatalog {
            current_tier: self.preference_repository.get_tier(),
            plans: PLAN_CATALOG.as_slice(),
        }
    }

    /// Run the mock checkout and persist the purchased tier
    pub async fn checkout(&self, command: CheckoutCommand) -> Result<SubscriptionStatus> {
        info!("Starting checkout for {} plan", command.tier);

        let tier = self
            .checkout_service
            .checkout(command.tier, &command.card)
            .await?;

        let preference_repository = self.preference_repository.clone();
        tokio::task::spawn_blocking(move || preference_repository.store_tier(tier))
            .await
            .context("Saving the purchased plan did not complete")??;

        Ok(Self::status(tier))
    }
}
