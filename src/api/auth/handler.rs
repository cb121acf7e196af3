//! Authentication handler - turns verified credentials into a session token.

use async_trait::async_trait;
use std::sync::Arc;

use super::jwt::TokenIssuer;
use crate::api::models::{Authentication, UserView};
use crate::config::{TokenSettings, ROLE_USER};
use crate::errors::{AppError, AppResult};
use crate::services::{AuthenticationRequest, AuthenticationService};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Authentication handler trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthenticationHandler: Send + Sync {
    /// Verify the credentials and issue a session token.
    ///
    /// # Errors
    /// `AppError::Unauthorized` when the credentials do not match an account.
    /// Failures from the verifier or token issuer are returned unchanged.
    async fn authenticate(&self, request: &AuthenticationRequest) -> AppResult<Authentication>;
}

/// Issues JWT session tokens for users the authentication service accepts.
pub struct JwtAuthenticationHandler {
    token_issuer: Arc<dyn TokenIssuer>,
    authentication_service: Arc<dyn AuthenticationService>,
    settings: TokenSettings,
}

impl JwtAuthenticationHandler {
    pub fn new(
        token_issuer: Arc<dyn TokenIssuer>,
        authentication_service: Arc<dyn AuthenticationService>,
        settings: TokenSettings,
    ) -> Self {
        Self {
            token_issuer,
            authentication_service,
            settings,
        }
    }
}

#[async_trait]
impl AuthenticationHandler for JwtAuthenticationHandler {
    async fn authenticate(&self, request: &AuthenticationRequest) -> AppResult<Authentication> {
        let user = self
            .authentication_service
            .verify_credentials(request)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let user_view = UserView::from(&user);

        let token = self.token_issuer.generate_token(
            &user_view,
            ROLE_USER,
            self.settings.secret(),
            self.settings.lifetime_seconds(),
        )?;

        Ok(Authentication::new(token))
    }
}
