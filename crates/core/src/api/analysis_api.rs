use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::analysis::{AnalysisAssumptions, AnalysisResult};
use crate::models::property::Property;
use crate::services::analysis_service::Analyzer;
use crate::storage::cache::{QueryCache, ResourceTag, Tag};

use super::client::HttpClient;

/// Server-side investment analysis.
#[derive(Debug, Clone)]
pub struct AnalysisApi {
    http: HttpClient,
    cache: Arc<QueryCache>,
}

impl AnalysisApi {
    pub fn new(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    pub async fn analyze(
        &self,
        property_id: u64,
        assumptions: &AnalysisAssumptions,
    ) -> Result<AnalysisResult, CoreError> {
        let result = self
            .http
            .post(&format!("properties/{property_id}/analyze/"), assumptions)
            .await?;
        self.cache.invalidate(&[Tag::id(ResourceTag::Analysis, property_id)]);
        Ok(result)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Analyzer for AnalysisApi {
    fn name(&self) -> &str {
        "server"
    }

    async fn evaluate(
        &self,
        property: &Property,
        assumptions: &AnalysisAssumptions,
    ) -> Result<AnalysisResult, CoreError> {
        self.analyze(property.id, assumptions).await
    }
}
