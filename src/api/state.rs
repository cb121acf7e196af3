//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::api::auth::{AuthenticationHandler, JwtAuthenticationHandler, JwtTokenUtil, TokenIssuer};
use crate::config::{Config, TokenSettings};
use crate::infra::{Database, UserStore};
use crate::services::CredentialVerifier;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Login handler
    pub authentication_handler: Arc<dyn AuthenticationHandler>,
    /// Verifies bearer tokens on protected routes
    pub token_issuer: Arc<dyn TokenIssuer>,
    /// Secret and lifetime used for every token
    pub token_settings: TokenSettings,
    /// Database connection, when one is attached
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the production collaborators on top of a database connection.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let verifier = Arc::new(CredentialVerifier::new(users));
        let token_issuer: Arc<dyn TokenIssuer> = Arc::new(JwtTokenUtil::new());

        let authentication_handler = Arc::new(JwtAuthenticationHandler::new(
            token_issuer.clone(),
            verifier,
            config.token.clone(),
        ));

        Self {
            authentication_handler,
            token_issuer,
            token_settings: config.token.clone(),
            database: Some(database),
        }
    }

    /// Create state from manually injected collaborators, without a database.
    pub fn new(
        authentication_handler: Arc<dyn AuthenticationHandler>,
        token_issuer: Arc<dyn TokenIssuer>,
        token_settings: TokenSettings,
    ) -> Self {
        Self {
            authentication_handler,
            token_issuer,
            token_settings,
            database: None,
        }
    }
}
