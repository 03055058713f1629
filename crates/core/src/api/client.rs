use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use crate::storage::session::Session;

use super::query::QueryParams;

/// Sees every failed request, across all API modules, before the caller does.
pub trait ResponseObserver: Send + Sync {
    fn on_failure(&self, error: &CoreError);
}

/// JSON-over-HTTP client bound to one API root.
///
/// The bearer token is read from the injected [`Session`] on every request,
/// so a login or logout takes effect for requests issued afterwards without
/// rebuilding the client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Session,
    observers: Vec<Arc<dyn ResponseObserver>>,
}

impl HttpClient {
    pub fn new(base_url: &str, session: Session, timeout: Duration) -> Result<Self, CoreError> {
        url::Url::parse(base_url)?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;
        let client = builder
            .build()
            .map_err(|e| CoreError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            observers: Vec::new(),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResponseObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cache key of a GET: full URL including the query string.
    pub fn cache_key(&self, path: &str, query: &QueryParams) -> String {
        query.append_to(&self.url(path))
    }

    // ── Verbs ───────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> Result<T, CoreError> {
        let req = self.request(Method::GET, path).query(query.pairs());
        self.fetch(req).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path).json(body);
        self.fetch(req).await
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let req = self.request(Method::POST, path);
        self.fetch(req).await
    }

    /// POST whose response body, if any, is ignored (e.g. `204 No Content`).
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), CoreError> {
        let req = self.request(Method::POST, path).json(body);
        let result = self.send(req).await.map(|_| ());
        self.observe(result)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PATCH, path).json(body);
        self.fetch(req).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), CoreError> {
        let req = self.request(Method::DELETE, path);
        let result = self.send(req).await.map(|_| ());
        self.observe(result)
    }

    // ── Internals ───────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");
        let req = self.client.request(method, url);
        match self.session.access_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, CoreError> {
        let result = match self.send(req).await {
            Ok(body) => decode(&body),
            Err(e) => Err(e),
        };
        self.observe(result)
    }

    /// Status check plus body read. Non-2xx becomes `Http`, transport
    /// failures become `Network`.
    async fn send(&self, req: RequestBuilder) -> Result<Vec<u8>, CoreError> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            return Err(CoreError::Http {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }
        Ok(body)
    }

    fn observe<T>(&self, result: Result<T, CoreError>) -> Result<T, CoreError> {
        if let Err(e) = &result {
            for observer in &self.observers {
                observer.on_failure(e);
            }
        }
        result
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, CoreError> {
    serde_json::from_slice(body).map_err(|e| CoreError::Parsing(e.to_string()))
}

/// Human-readable message of an error payload: `{"detail": "Not found."}`,
/// or `{"error": "..."}` as sent by the auth views.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["detail", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|d| d.as_str()))
        .map(str::to_string)
}
