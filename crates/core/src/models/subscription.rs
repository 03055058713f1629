use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::decimal;

/// A purchasable plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionTier {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(with = "decimal")]
    pub price_monthly: f64,
    #[serde(with = "decimal")]
    pub price_yearly: f64,
    #[serde(default)]
    pub features: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub features_list: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

impl SubscriptionTier {
    /// Savings of paying yearly instead of twelve monthly payments, in percent.
    pub fn yearly_discount_pct(&self) -> f64 {
        let twelve_months = self.price_monthly * 12.0;
        if twelve_months > 0.0 {
            (1.0 - self.price_yearly / twelve_months) * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    Active,
    Trialing,
    Cancelled,
    PastDue,
    Unpaid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u64,
    pub tier: SubscriptionTier,
    pub status: SubscriptionState,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    #[serde(default)]
    pub trial_ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_trialing: bool,
    #[serde(default)]
    pub days_remaining: i64,
}

/// The current-subscription endpoint answers either with a subscription or
/// with a `{ "message": ... }` when the user is on the free plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurrentSubscription {
    Subscribed(Box<Subscription>),
    Unsubscribed { message: String },
}

impl CurrentSubscription {
    pub fn subscription(&self) -> Option<&Subscription> {
        match self {
            CurrentSubscription::Subscribed(s) => Some(s),
            CurrentSubscription::Unsubscribed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Succeeded,
    Failed,
    Pending,
    Refunded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u64,
    #[serde(with = "decimal")]
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_successful: bool,
}

/// Usage counter of one feature within the current billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub id: u64,
    pub feature_name: String,
    pub feature_slug: String,
    pub count: u32,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub is_within_limit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub tier_slug: String,
    pub billing_period: BillingPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalSession {
    pub portal_url: String,
}
