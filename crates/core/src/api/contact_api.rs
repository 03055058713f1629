use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::contact::{ContactRequest, ContactSubmission};
use crate::models::page::Page;
use crate::services::validation::{require_non_empty, validate_email};
use crate::storage::cache::{QueryCache, ResourceTag, Tag};

use super::client::HttpClient;
use super::query::QueryParams;

const CONTACT: &str = "contact/";

/// Requests to be contacted about a listed property.
#[derive(Debug, Clone)]
pub struct ContactApi {
    http: HttpClient,
    cache: Arc<QueryCache>,
}

impl ContactApi {
    pub fn new(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    pub async fn submit(&self, request: &ContactSubmission) -> Result<ContactRequest, CoreError> {
        require_non_empty("Name", &request.name)?;
        validate_email(&request.email)?;
        require_non_empty("Message", &request.message)?;

        let created: ContactRequest = self.http.post(CONTACT, request).await?;
        self.cache.invalidate(&[Tag::all(ResourceTag::Contact)]);
        tracing::info!(property_id = request.property, "contact request sent");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<ContactRequest>, CoreError> {
        let query = QueryParams::new();
        let key = self.http.cache_key(CONTACT, &query);
        let page: Page<ContactRequest> = self
            .cache
            .get_or_fetch(&key, vec![Tag::all(ResourceTag::Contact)], || {
                self.http.get(CONTACT, &query)
            })
            .await?;
        Ok(page.results)
    }

    pub async fn get(&self, id: u64) -> Result<ContactRequest, CoreError> {
        let path = format!("{CONTACT}{id}/");
        let query = QueryParams::new();
        let key = self.http.cache_key(&path, &query);
        self.cache
            .get_or_fetch(&key, vec![Tag::id(ResourceTag::Contact, id)], || {
                self.http.get(&path, &query)
            })
            .await
    }
}
