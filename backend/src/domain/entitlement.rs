//! Feature visibility and record limits per subscription tier.

use shared::{GatedContent, SubscriptionTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlements {
    pub max_children: usize,
    pub advanced_features: bool,
}

impl Entitlements {
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Free => Self {
                max_children: 1,
                advanced_features: false,
            },
            SubscriptionTier::Premium => Self {
                max_children: 3,
                advanced_features: true,
            },
            SubscriptionTier::Family => Self {
                max_children: 5,
                advanced_features: true,
            },
        }
    }
}

/// Result of checking whether another child profile fits the tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityCheck {
    Available,
    LimitReached { message: String },
}

pub fn check_child_capacity(tier: SubscriptionTier, current_children: usize) -> CapacityCheck {
    let max_children = Entitlements::for_tier(tier).max_children;
    if current_children < max_children {
        return CapacityCheck::Available;
    }

    let plan = match tier {
        SubscriptionTier::Free => "Gratuito",
        _ => "atual",
    };
    CapacityCheck::LimitReached {
        message: format!(
            "Você atingiu o limite de {} criança(s) no plano {}. Faça upgrade para adicionar mais!",
            max_children, plan
        ),
    }
}

/// A gated feature's locked teaser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedFeature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ADVANCED_FERTILITY_TIPS: LockedFeature = LockedFeature {
    title: "Dicas Avançadas de Fertilidade",
    description: "Acesse recomendações personalizadas baseadas em ciência para aumentar suas chances de concepção",
};

pub const DEVELOPMENT_MILESTONES: LockedFeature = LockedFeature {
    title: "Marcos de Desenvolvimento",
    description: "Acompanhe os marcos esperados para cada idade e monitore o desenvolvimento do seu filho",
};

/// Build the content only when the tier unlocks advanced features
pub fn gate<T>(
    tier: SubscriptionTier,
    feature: LockedFeature,
    content: impl FnOnce() -> T,
) -> GatedContent<T> {
    if Entitlements::for_tier(tier).advanced_features {
        GatedContent::Unlocked { content: content() }
    } else {
        GatedContent::Locked {
            title: feature.title.to_string(),
            description: feature.description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entitlements_per_tier() {
        assert_eq!(
            Entitlements::for_tier(SubscriptionTier::Free),
            Entitlements {
                max_children: 1,
                advanced_features: false
            }
        );
        assert_eq!(Entitlements::for_tier(SubscriptionTier::Premium).max_children, 3);
        assert_eq!(Entitlements::for_tier(SubscriptionTier::Family).max_children, 5);
        assert!(Entitlements::for_tier(SubscriptionTier::Family).advanced_features);
    }

    #[test]
    fn test_capacity_check() {
        assert_eq!(check_child_capacity(SubscriptionTier::Free, 0), CapacityCheck::Available);
        match check_child_capacity(SubscriptionTier::Free, 1) {
            CapacityCheck::LimitReached { message } => {
                assert!(message.contains("limite de 1"));
                assert!(message.contains("plano Gratuito"));
            }
            other => panic!("expected limit, got {:?}", other),
        }
        assert_eq!(check_child_capacity(SubscriptionTier::Premium, 2), CapacityCheck::Available);
        assert!(matches!(
            check_child_capacity(SubscriptionTier::Family, 5),
            CapacityCheck::LimitReached { .. }
        ));
    }

    #[test]
    fn test_gate_does_not_build_locked_content() {
        let locked: GatedContent<Vec<u32>> = gate(SubscriptionTier::Free, DEVELOPMENT_MILESTONES, || {
            panic!("content built for a locked feature")
        });
        assert_eq!(
            locked,
            GatedContent::Locked {
                title: "Marcos de Desenvolvimento".to_string(),
                description: DEVELOPMENT_MILESTONES.description.to_string(),
            }
        );

        let unlocked = gate(SubscriptionTier::Premium, ADVANCED_FERTILITY_TIPS, || vec![1, 2]);
        assert_eq!(unlocked.content(), Some(&vec![1, 2]));
    }
}
