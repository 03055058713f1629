use std::sync::{Arc, Mutex};

use crate::api::client::ResponseObserver;
use crate::errors::CoreError;
use crate::storage::lock;
use crate::storage::session::Session;

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
/// Where a successful login lands when no return path was recorded.
pub const DEFAULT_LOGIN_REDIRECT: &str = "/dashboard";

/// Routes readable without a session. A route is public when it equals an
/// entry or lies below one (`/properties/42`).
pub const PUBLIC_ROUTES: [&str; 7] = [
    "/pricing",
    "/login",
    "/register",
    "/",
    "/properties",
    "/about",
    "/support",
];

pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES
        .iter()
        .any(|route| path == *route || path.starts_with(&format!("{route}/")))
}

#[derive(Debug)]
struct NavState {
    current: String,
    redirect_after_login: Option<String>,
    history: Vec<String>,
}

/// Route state of the UI shell: where the user is, where to send them back
/// after logging in, and every forced navigation so far.
///
/// Clones share state.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: Arc<Mutex<NavState>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::at("/")
    }

    pub fn at(path: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(NavState {
                current: path.to_string(),
                redirect_after_login: None,
                history: Vec::new(),
            })),
        }
    }

    pub fn current_path(&self) -> String {
        lock(&self.state).current.clone()
    }

    /// The user moved to `path` on their own.
    pub fn set_current(&self, path: &str) {
        lock(&self.state).current = path.to_string();
    }

    /// Move to `path` and log the navigation.
    pub fn navigate(&self, path: &str) {
        let mut state = lock(&self.state);
        state.current = path.to_string();
        state.history.push(path.to_string());
    }

    pub fn history(&self) -> Vec<String> {
        lock(&self.state).history.clone()
    }

    pub fn remember_return_path(&self, path: &str) {
        lock(&self.state).redirect_after_login = Some(path.to_string());
    }

    pub fn redirect_after_login(&self) -> Option<String> {
        lock(&self.state).redirect_after_login.clone()
    }

    /// Consume the recorded return path.
    pub fn take_redirect_after_login(&self) -> Option<String> {
        lock(&self.state).redirect_after_login.take()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// What the guard did about an authentication failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardAction {
    /// Public route: stale tokens dropped, the user stays put.
    ClearedTokens,
    /// Protected route: tokens dropped, `from` recorded, sent to the login page.
    RedirectedToLogin { from: String },
}

/// Global reaction to failed requests, registered on every [`HttpClient`].
///
/// [`HttpClient`]: crate::api::client::HttpClient
#[derive(Debug, Clone)]
pub struct AuthGuard {
    session: Session,
    navigator: Navigator,
}

impl AuthGuard {
    pub fn new(session: Session, navigator: Navigator) -> Self {
        Self { session, navigator }
    }

    /// React to a 401 (or an unreadable response) seen on the current route.
    pub fn handle_auth_failure(&self) -> GuardAction {
        let path = self.navigator.current_path();
        if let Err(e) = self.session.clear() {
            tracing::warn!("could not clear stored session: {e}");
        }

        if is_public_route(&path) {
            tracing::debug!(%path, "session rejected on public route; tokens cleared");
            return GuardAction::ClearedTokens;
        }

        if path != LOGIN_ROUTE && path != REGISTER_ROUTE {
            self.navigator.remember_return_path(&path);
        }
        self.navigator.navigate(LOGIN_ROUTE);
        tracing::info!(%path, "session rejected; redirecting to login");
        GuardAction::RedirectedToLogin { from: path }
    }
}

impl ResponseObserver for AuthGuard {
    fn on_failure(&self, error: &CoreError) {
        if error.is_auth_failure() {
            self.handle_auth_failure();
        } else if error.is_forbidden() {
            tracing::warn!(
                path = %self.navigator.current_path(),
                "access forbidden: you do not have permission to access this resource"
            );
        }
    }
}
