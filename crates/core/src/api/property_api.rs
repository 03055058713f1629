use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::filters::PropertyFilters;
use crate::models::page::Page;
use crate::models::property::Property;
use crate::storage::cache::{QueryCache, ResourceTag, Tag};

use super::client::HttpClient;
use super::query::QueryParams;

const PROPERTIES: &str = "properties/";

/// Read-only access to the property catalog.
#[derive(Debug, Clone)]
pub struct PropertyApi {
    http: HttpClient,
    cache: Arc<QueryCache>,
}

impl PropertyApi {
    pub fn new(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    /// One page of properties matching `filters`.
    pub async fn list(&self, filters: &PropertyFilters) -> Result<Page<Property>, CoreError> {
        let query = filters.to_query();
        let key = self.http.cache_key(PROPERTIES, &query);
        self.cache
            .get_or_fetch(&key, vec![Tag::all(ResourceTag::Property)], || {
                self.http.get(PROPERTIES, &query)
            })
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Property, CoreError> {
        let path = format!("{PROPERTIES}{id}/");
        let query = QueryParams::new();
        let key = self.http.cache_key(&path, &query);
        self.cache
            .get_or_fetch(&key, vec![Tag::id(ResourceTag::Property, id)], || {
                self.http.get(&path, &query)
            })
            .await
    }
}
