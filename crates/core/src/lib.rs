pub mod api;
pub mod config;
pub mod data;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::sync::Arc;
use std::time::Duration;

use api::{
    AnalysisApi, AuthApi, ContactApi, FeedbackApi, HttpClient, PortfolioApi, PropertyApi,
    ResponseObserver, SubscriptionApi,
};
use config::Config;
use errors::CoreError;
use models::auth::LoginCredentials;
use models::filters::PropertyFilters;
use models::property::Property;
use services::access_service::{feature_access, FeatureAccess, SubscriptionStatus};
use services::analysis_service::{AnalysisSession, Analyzer, LocalAnalyzer};
use services::auth_guard::{AuthGuard, Navigator, DEFAULT_LOGIN_REDIRECT};
use services::catalog_service::{property_list_view, PropertyListView, ViewState};
use services::map_service::MapPanel;
use storage::cache::QueryCache;
use storage::filter_store::FilterStore;
use storage::session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};

/// Which calculator backs an analysis panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Computed locally; results are immediate.
    Local,
    /// Computed by the backend; recomputation is debounced.
    Server,
}

/// Main entry point for the Atlas client core.
///
/// Owns the session, the route state, the shared read cache and one instance
/// of every API module. All modules share the same session, so logging in or
/// out through [`AtlasClient::login`] / [`AtlasClient::logout`] affects every
/// subsequent request.
#[must_use]
pub struct AtlasClient {
    config: Config,
    session: Session,
    navigator: Navigator,
    cache: Arc<QueryCache>,
    filter_store: Option<FilterStore>,
    properties: PropertyApi,
    portfolios: PortfolioApi,
    auth: AuthApi,
    analysis: AnalysisApi,
    subscriptions: SubscriptionApi,
    feedback: FeedbackApi,
    contact: ContactApi,
}

impl std::fmt::Debug for AtlasClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtlasClient")
            .field("api_url", &self.config.api_url)
            .field("auth_url", &self.config.auth_url)
            .field("authenticated", &self.session.is_authenticated())
            .field("cached_reads", &self.cache.len())
            .finish()
    }
}

impl AtlasClient {
    /// Build a client from `config`. Tokens go to `config.token_file` when
    /// set, otherwise they live in memory.
    pub fn new(config: Config) -> Result<Self, CoreError> {
        let store: Arc<dyn TokenStore> = match &config.token_file {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::with_token_store(config, store)
    }

    /// Configuration from `ATLAS_*` environment variables (and `.env`).
    pub fn from_env() -> Result<Self, CoreError> {
        Self::new(Config::from_env())
    }

    pub fn with_token_store(config: Config, store: Arc<dyn TokenStore>) -> Result<Self, CoreError> {
        config.validate()?;
        Self::build(config, Session::new(store))
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn properties(&self) -> &PropertyApi {
        &self.properties
    }

    pub fn portfolios(&self) -> &PortfolioApi {
        &self.portfolios
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub fn analysis(&self) -> &AnalysisApi {
        &self.analysis
    }

    pub fn subscriptions(&self) -> &SubscriptionApi {
        &self.subscriptions
    }

    pub fn feedback(&self) -> &FeedbackApi {
        &self.feedback
    }

    pub fn contact(&self) -> &ContactApi {
        &self.contact
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Log in, then go back to the page the user was sent away from (or the
    /// dashboard). Returns the route navigated to.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String, CoreError> {
        self.auth.login(credentials).await?;
        let target = self
            .navigator
            .take_redirect_after_login()
            .unwrap_or_else(|| DEFAULT_LOGIN_REDIRECT.to_string());
        self.navigator.navigate(&target);
        Ok(target)
    }

    pub fn logout(&self) -> Result<(), CoreError> {
        self.auth.logout()
    }

    // ── Subscription ────────────────────────────────────────────────

    /// The user's plan. Anonymous users are on the free plan without asking
    /// the server.
    pub async fn subscription_status(&self) -> Result<SubscriptionStatus, CoreError> {
        if !self.session.is_authenticated() {
            return Ok(SubscriptionStatus::free());
        }
        let current = self.subscriptions.current().await?;
        Ok(SubscriptionStatus::from_current(&current))
    }

    pub async fn feature_access(&self, feature: &str) -> Result<FeatureAccess, CoreError> {
        let status = self.subscription_status().await?;
        let usage = if self.session.is_authenticated() && !feature.trim().is_empty() {
            self.subscriptions.usage(Some(feature)).await?
        } else {
            Vec::new()
        };
        Ok(feature_access(feature, &status, &usage))
    }

    // ── Catalog ─────────────────────────────────────────────────────

    /// Load one catalog page and map it to a view state. Filters that loaded
    /// successfully are remembered for the next run when a filter file is
    /// configured.
    pub async fn browse_properties(&self, filters: &PropertyFilters) -> ViewState<PropertyListView> {
        let result = self.properties.list(filters).await;
        if result.is_ok() {
            if let Some(store) = &self.filter_store {
                if let Err(e) = store.save(filters) {
                    tracing::warn!("could not persist filters: {e}");
                }
            }
        }
        property_list_view(result, filters)
    }

    /// Filters saved by the last successful browse, or the defaults.
    pub fn restore_filters(&self) -> PropertyFilters {
        let Some(store) = &self.filter_store else {
            return PropertyFilters::default();
        };
        match store.load() {
            Ok(filters) => filters.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("ignoring unreadable saved filters: {e}");
                PropertyFilters::default()
            }
        }
    }

    pub fn map_panel(&self, properties: &[Property]) -> MapPanel {
        MapPanel::build(self.config.map_token(), properties)
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// Analysis panel for `property`. The server-backed panel waits for the
    /// assumptions to settle; the local one recomputes immediately.
    pub fn analysis_session(&self, property: Property, mode: AnalysisMode) -> AnalysisSession {
        match mode {
            AnalysisMode::Server => {
                let analyzer: Arc<dyn Analyzer> = Arc::new(self.analysis.clone());
                AnalysisSession::new(analyzer, property)
            }
            AnalysisMode::Local => {
                AnalysisSession::new(Arc::new(LocalAnalyzer::new()), property).with_delay(Duration::ZERO)
            }
        }
    }

    // ── Private ─────────────────────────────────────────────────────

    fn build(config: Config, session: Session) -> Result<Self, CoreError> {
        let navigator = Navigator::new();
        let guard: Arc<dyn ResponseObserver> =
            Arc::new(AuthGuard::new(session.clone(), navigator.clone()));
        let cache = Arc::new(QueryCache::new());
        let timeout = config.request_timeout();

        let api = HttpClient::new(&config.api_url, session.clone(), timeout)?
            .with_observer(guard.clone());
        let auth_root = HttpClient::new(&config.auth_url, session.clone(), timeout)?
            .with_observer(guard);

        Ok(Self {
            filter_store: config.filter_file.as_ref().map(FilterStore::new),
            properties: PropertyApi::new(api.clone(), cache.clone()),
            portfolios: PortfolioApi::new(api.clone(), cache.clone()),
            analysis: AnalysisApi::new(api.clone(), cache.clone()),
            feedback: FeedbackApi::new(api.clone(), cache.clone()),
            contact: ContactApi::new(api, cache.clone()),
            auth: AuthApi::new(auth_root.clone(), cache.clone()),
            subscriptions: SubscriptionApi::new(auth_root, cache.clone()),
            config,
            session,
            navigator,
            cache,
        })
    }
}
