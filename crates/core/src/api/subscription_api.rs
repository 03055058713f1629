use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::auth::MessageResponse;
use crate::models::subscription::{
    BillingPeriod, CheckoutRequest, CheckoutSession, CurrentSubscription, Payment, PortalSession,
    SubscriptionTier, Usage,
};
use crate::services::validation::require_non_empty;
use crate::storage::cache::{QueryCache, ResourceTag, Tag};

use super::client::HttpClient;
use super::query::QueryParams;

const TIERS: &str = "api/subscriptions/tiers/";
const CURRENT: &str = "api/subscriptions/current/";
const CHECKOUT: &str = "api/subscriptions/create-checkout/";
const PORTAL: &str = "api/subscriptions/create-portal/";
const CANCEL: &str = "api/subscriptions/cancel/";
const RESUME: &str = "api/subscriptions/resume/";
const HISTORY: &str = "api/subscriptions/history/";
const USAGE: &str = "api/subscriptions/usage/";

/// Plans, the user's subscription, billing history and feature usage.
/// Served from the auth root.
#[derive(Debug, Clone)]
pub struct SubscriptionApi {
    http: HttpClient,
    cache: Arc<QueryCache>,
}

impl SubscriptionApi {
    pub fn new(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    pub async fn tiers(&self) -> Result<Vec<SubscriptionTier>, CoreError> {
        self.cached(TIERS, QueryParams::new(), ResourceTag::Tier).await
    }

    pub async fn current(&self) -> Result<CurrentSubscription, CoreError> {
        self.cached(CURRENT, QueryParams::new(), ResourceTag::Subscription)
            .await
    }

    /// Start a hosted checkout; the caller sends the user to `checkout_url`.
    pub async fn create_checkout(
        &self,
        tier_slug: &str,
        billing_period: BillingPeriod,
    ) -> Result<CheckoutSession, CoreError> {
        require_non_empty("Tier", tier_slug)?;
        let body = CheckoutRequest {
            tier_slug: tier_slug.to_string(),
            billing_period,
        };
        self.http.post(CHECKOUT, &body).await
    }

    pub async fn create_portal(&self) -> Result<PortalSession, CoreError> {
        self.http.post_empty(PORTAL).await
    }

    pub async fn cancel(&self) -> Result<MessageResponse, CoreError> {
        let response = self.http.post_empty(CANCEL).await?;
        self.cache.invalidate(&[Tag::all(ResourceTag::Subscription)]);
        tracing::info!("subscription cancelled");
        Ok(response)
    }

    pub async fn resume(&self) -> Result<MessageResponse, CoreError> {
        let response = self.http.post_empty(RESUME).await?;
        self.cache.invalidate(&[Tag::all(ResourceTag::Subscription)]);
        tracing::info!("subscription resumed");
        Ok(response)
    }

    pub async fn history(&self) -> Result<Vec<Payment>, CoreError> {
        self.cached(HISTORY, QueryParams::new(), ResourceTag::Payment)
            .await
    }

    /// Usage counters, optionally for a single feature slug.
    pub async fn usage(&self, feature: Option<&str>) -> Result<Vec<Usage>, CoreError> {
        let mut query = QueryParams::new();
        query.text("feature", feature);
        self.cached(USAGE, query, ResourceTag::Usage).await
    }

    async fn cached<T>(&self, path: &str, query: QueryParams, resource: ResourceTag) -> Result<T, CoreError>
    where
        T: serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let key = self.http.cache_key(path, &query);
        self.cache
            .get_or_fetch(&key, vec![Tag::all(resource)], || self.http.get(path, &query))
            .await
    }
}
