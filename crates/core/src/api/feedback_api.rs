use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::feedback::{Feedback, FeedbackSubmission, SupportMessage, SupportMessageSubmission};
use crate::models::page::Page;
use crate::services::validation::{require_non_empty, validate_email, MIN_SUPPORT_MESSAGE_LEN};
use crate::storage::cache::{QueryCache, ResourceTag, Tag};

use super::client::HttpClient;
use super::query::QueryParams;

const FEEDBACK: &str = "feedback/";
const SUPPORT: &str = "support/";

/// Star ratings and support messages.
#[derive(Debug, Clone)]
pub struct FeedbackApi {
    http: HttpClient,
    cache: Arc<QueryCache>,
}

impl FeedbackApi {
    pub fn new(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        Self { http, cache }
    }

    pub async fn submit_feedback(&self, feedback: &FeedbackSubmission) -> Result<Feedback, CoreError> {
        if !(1..=5).contains(&feedback.rating) {
            return Err(CoreError::ValidationError(
                "Rating must be between 1 and 5".into(),
            ));
        }
        let created = self.http.post(FEEDBACK, feedback).await?;
        self.cache.invalidate(&[Tag::all(ResourceTag::Feedback)]);
        Ok(created)
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, CoreError> {
        let page: Page<Feedback> = self.cached(FEEDBACK, ResourceTag::Feedback).await?;
        Ok(page.results)
    }

    pub async fn submit_support_message(
        &self,
        message: &SupportMessageSubmission,
    ) -> Result<SupportMessage, CoreError> {
        validate_email(&message.email)?;
        require_non_empty("Message", &message.message)?;
        if message.message.trim().chars().count() < MIN_SUPPORT_MESSAGE_LEN {
            return Err(CoreError::ValidationError(format!(
                "Message must be at least {MIN_SUPPORT_MESSAGE_LEN} characters long"
            )));
        }
        let created = self.http.post(SUPPORT, message).await?;
        self.cache.invalidate(&[Tag::all(ResourceTag::Support)]);
        Ok(created)
    }

    pub async fn list_support_messages(&self) -> Result<Vec<SupportMessage>, CoreError> {
        let page: Page<SupportMessage> = self.cached(SUPPORT, ResourceTag::Support).await?;
        Ok(page.results)
    }

    async fn cached<T>(&self, path: &str, resource: ResourceTag) -> Result<T, CoreError>
    where
        T: serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let query = QueryParams::new();
        let key = self.http.cache_key(path, &query);
        self.cache
            .get_or_fetch(&key, vec![Tag::all(resource)], || self.http.get(path, &query))
            .await
    }
}
