use std::sync::Arc;

use serde::Serialize;

use crate::errors::CoreError;
use crate::models::auth::{
    ActivationRequest, EmailRequest, LoginCredentials, MessageResponse, PasswordResetConfirm,
    RefreshedToken, RegisterData, RegisterResponse, TokenPair, User,
};
use crate::services::validation::{require_non_empty, validate_email, validate_password};
use crate::storage::cache::{QueryCache, ResourceTag, Tag};
use crate::storage::session::Session;

use super::client::HttpClient;
use super::query::QueryParams;

const LOGIN: &str = "api/auth/login/";
const REGISTER: &str = "api/auth/register/";
const ME: &str = "api/auth/me/";
const ACTIVATE: &str = "api/auth/activate/";
const PASSWORD_RESET: &str = "api/auth/password-reset/";
const PASSWORD_RESET_CONFIRM: &str = "api/auth/password-reset/confirm/";
const REFRESH: &str = "api/auth/refresh/";
const RESEND_ACTIVATION: &str = "api/auth/resend-activation/";

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

/// Account endpoints under the auth root. Owns every write to the session.
#[derive(Debug, Clone)]
pub struct AuthApi {
    http: HttpClient,
    cache: Arc<QueryCache>,
    session: Session,
}

impl AuthApi {
    pub fn new(http: HttpClient, cache: Arc<QueryCache>) -> Self {
        let session = http.session().clone();
        Self { http, cache, session }
    }

    /// Exchange credentials for a token pair and persist it.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<TokenPair, CoreError> {
        validate_email(&credentials.email)?;
        require_non_empty("Password", &credentials.password)?;

        let tokens: TokenPair = self.http.post(LOGIN, credentials).await?;
        self.session.store_tokens(&tokens)?;
        self.cache.invalidate(&[Tag::all(ResourceTag::User)]);
        tracing::info!("logged in");
        Ok(tokens)
    }

    pub async fn register(&self, data: &RegisterData) -> Result<RegisterResponse, CoreError> {
        validate_email(&data.email)?;
        validate_password(&data.password, &data.password_retype)?;
        self.http.post(REGISTER, data).await
    }

    pub async fn current_user(&self) -> Result<User, CoreError> {
        let query = QueryParams::new();
        let key = self.http.cache_key(ME, &query);
        self.cache
            .get_or_fetch(&key, vec![Tag::all(ResourceTag::User)], || {
                self.http.get(ME, &query)
            })
            .await
    }

    /// Local only: forget the tokens and every cached read. No request is sent,
    /// so logging out works offline.
    pub fn logout(&self) -> Result<(), CoreError> {
        self.cache.clear();
        self.session.clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    pub async fn activate(&self, request: &ActivationRequest) -> Result<MessageResponse, CoreError> {
        require_non_empty("Activation uid", &request.uid)?;
        require_non_empty("Activation token", &request.token)?;
        self.http.post(ACTIVATE, request).await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, CoreError> {
        validate_email(email)?;
        let body = EmailRequest {
            email: email.to_string(),
        };
        self.http.post(PASSWORD_RESET, &body).await
    }

    pub async fn confirm_password_reset(
        &self,
        request: &PasswordResetConfirm,
    ) -> Result<MessageResponse, CoreError> {
        validate_password(&request.new_password, &request.re_new_password)?;
        self.http.post(PASSWORD_RESET_CONFIRM, request).await
    }

    /// Trade the stored refresh token for a new access token. A rotated
    /// refresh token, when the backend sends one, replaces the stored one.
    pub async fn refresh_token(&self) -> Result<String, CoreError> {
        let refresh = self
            .session
            .refresh_token()
            .ok_or_else(|| CoreError::ValidationError("Refresh token is required".into()))?;

        let refreshed: RefreshedToken = self
            .http
            .post(REFRESH, &RefreshRequest { refresh: &refresh })
            .await?;
        self.session
            .update_access_token(&refreshed.access, refreshed.refresh.as_deref())?;
        tracing::info!("access token refreshed");
        Ok(refreshed.access)
    }

    pub async fn resend_activation(&self, email: &str) -> Result<MessageResponse, CoreError> {
        validate_email(email)?;
        let body = EmailRequest {
            email: email.to_string(),
        };
        self.http.post(RESEND_ACTIVATION, &body).await
    }
}
