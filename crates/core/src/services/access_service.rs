use serde::{Deserialize, Serialize};

use crate::models::subscription::{CurrentSubscription, Subscription, Usage};

pub const FREE_TIER_SLUG: &str = "free";
pub const FREE_TIER_NAME: &str = "Free";

/// Features available without a paid plan.
pub const FREE_FEATURES: [&str; 2] = ["property_search", "basic_roi"];

/// Flattened view of the user's plan, with free-plan defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    pub subscription: Option<Subscription>,
    pub tier_slug: String,
    pub tier_name: String,
    pub has_active_subscription: bool,
    pub is_trialing: bool,
    pub days_remaining: i64,
    pub will_cancel_at_period_end: bool,
}

impl SubscriptionStatus {
    pub fn free() -> Self {
        Self {
            subscription: None,
            tier_slug: FREE_TIER_SLUG.to_string(),
            tier_name: FREE_TIER_NAME.to_string(),
            has_active_subscription: false,
            is_trialing: false,
            days_remaining: 0,
            will_cancel_at_period_end: false,
        }
    }

    pub fn from_current(current: &CurrentSubscription) -> Self {
        match current.subscription() {
            Some(s) => Self {
                subscription: Some(s.clone()),
                tier_slug: s.tier.slug.clone(),
                tier_name: s.tier.name.clone(),
                has_active_subscription: s.is_active,
                is_trialing: s.is_trialing,
                days_remaining: s.days_remaining,
                will_cancel_at_period_end: s.cancel_at_period_end,
            },
            None => Self::free(),
        }
    }

    pub fn is_paid(&self) -> bool {
        self.subscription.is_some() && self.tier_slug != FREE_TIER_SLUG
    }
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        Self::free()
    }
}

/// Whether the user may use a feature, and how much of it they used.
///
/// Advisory only: the backend enforces the real limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureAccess {
    pub feature: String,
    pub has_access: bool,
    pub usage_count: u32,
    /// Set once the limit has been reached: the count at which it was hit.
    pub usage_limit: Option<u32>,
    pub is_within_limit: bool,
}

pub fn feature_access(feature: &str, status: &SubscriptionStatus, usage: &[Usage]) -> FeatureAccess {
    let record = usage.iter().find(|u| u.feature_slug == feature);
    let is_within_limit = record.map_or(true, |u| u.is_within_limit);

    FeatureAccess {
        feature: feature.to_string(),
        has_access: status.is_paid() || FREE_FEATURES.contains(&feature),
        usage_count: record.map_or(0, |u| u.count),
        usage_limit: record.filter(|u| !u.is_within_limit).map(|u| u.count),
        is_within_limit,
    }
}
