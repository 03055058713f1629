use std::sync::Arc;

use serde::Serialize;

use crate::errors::CoreError;
use crate::models::page::Page;
use crate::models::portfolio::{
    AddPortfolioProperty, CreatePortfolio, Portfolio, PortfolioProperty, UpdatePortfolio,
    UpdatePortfolioProperty,
};
use crate::services::validation::require_non_empty;
use crate::storage::cache::{QueryCache, ResourceTag, Tag};

use super::client::HttpClient;
use super::query::QueryParams;

const PORTFOLIOS: &str = "portfolios/";

#[derive(Serialize)]
struct RemoveProperty {
    property_id: u64,
}

/// The user's portfolios and the properties saved into them.
#[derive(Debug, Clone)]
pub struct PortfolioApi {
    http: HttpClient,
    cache: Arc<QueryCache>,
}

impl PortfolioApi {
    pub fn new(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    // ── Reads ───────────────────────────────────────────────────────

    pub async fn list(&self) -> Result<Vec<Portfolio>, CoreError> {
        let page: Page<Portfolio> = self
            .cached(PORTFOLIOS.to_string(), Tag::all(ResourceTag::PortfolioList))
            .await?;
        Ok(page.results)
    }

    pub async fn get(&self, id: u64) -> Result<Portfolio, CoreError> {
        self.cached(format!("{PORTFOLIOS}{id}/"), Tag::id(ResourceTag::Portfolio, id))
            .await
    }

    pub async fn get_default(&self) -> Result<Portfolio, CoreError> {
        self.cached(
            format!("{PORTFOLIOS}default/"),
            Tag::default_of(ResourceTag::Portfolio),
        )
        .await
    }

    // ── Portfolio lifecycle ─────────────────────────────────────────

    pub async fn create(&self, data: &CreatePortfolio) -> Result<Portfolio, CoreError> {
        require_non_empty("Portfolio name", &data.name)?;
        let created: Portfolio = self.http.post(PORTFOLIOS, data).await?;
        self.cache.invalidate(&[
            Tag::all(ResourceTag::PortfolioList),
            Tag::default_of(ResourceTag::Portfolio),
        ]);
        tracing::info!(portfolio_id = created.id, "portfolio created");
        Ok(created)
    }

    pub async fn update(&self, id: u64, data: &UpdatePortfolio) -> Result<Portfolio, CoreError> {
        if let Some(name) = &data.name {
            require_non_empty("Portfolio name", name)?;
        }
        let updated: Portfolio = self.http.patch(&format!("{PORTFOLIOS}{id}/"), data).await?;
        self.invalidate_contents(id);
        if data.is_default.is_some() {
            // The previous default's detail carries the old flag.
            self.cache.invalidate(&[Tag::all(ResourceTag::Portfolio)]);
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<(), CoreError> {
        self.http.delete(&format!("{PORTFOLIOS}{id}/")).await?;
        self.invalidate_contents(id);
        tracing::info!(portfolio_id = id, "portfolio deleted");
        Ok(())
    }

    // ── Saved properties ────────────────────────────────────────────

    pub async fn add_property(
        &self,
        portfolio_id: u64,
        data: &AddPortfolioProperty,
    ) -> Result<PortfolioProperty, CoreError> {
        let saved = self
            .http
            .post(&format!("{PORTFOLIOS}{portfolio_id}/add_property/"), data)
            .await?;
        self.invalidate_contents(portfolio_id);
        Ok(saved)
    }

    pub async fn remove_property(&self, portfolio_id: u64, property_id: u64) -> Result<(), CoreError> {
        self.http
            .post_unit(
                &format!("{PORTFOLIOS}{portfolio_id}/remove-property/"),
                &RemoveProperty { property_id },
            )
            .await?;
        self.invalidate_contents(portfolio_id);
        Ok(())
    }

    pub async fn update_property(
        &self,
        portfolio_id: u64,
        property_id: u64,
        data: &UpdatePortfolioProperty,
    ) -> Result<PortfolioProperty, CoreError> {
        let updated = self
            .http
            .patch(
                &format!("{PORTFOLIOS}{portfolio_id}/update-property/{property_id}/"),
                data,
            )
            .await?;
        self.invalidate_contents(portfolio_id);
        Ok(updated)
    }

    /// A portfolio changed: its detail, the default slot and the list may all be out of date.
    fn invalidate_contents(&self, portfolio_id: u64) {
        self.cache.invalidate(&[
            Tag::id(ResourceTag::Portfolio, portfolio_id),
            Tag::default_of(ResourceTag::Portfolio),
            Tag::all(ResourceTag::PortfolioList),
        ]);
    }

    async fn cached<T>(&self, path: String, tag: Tag) -> Result<T, CoreError>
    where
        T: serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let query = QueryParams::new();
        let key = self.http.cache_key(&path, &query);
        self.cache
            .get_or_fetch(&key, vec![tag], || self.http.get(&path, &query))
            .await
    }
}

/// The user's default portfolio out of a list. The backend keeps at most one;
/// if it ever returns several, the first wins.
pub fn default_portfolio(portfolios: &[Portfolio]) -> Option<&Portfolio> {
    let mut defaults = portfolios.iter().filter(|p| p.is_default);
    let first = defaults.next();
    let extra = defaults.count();
    if extra > 0 {
        tracing::warn!(count = extra + 1, "more than one default portfolio returned");
    }
    first
}
