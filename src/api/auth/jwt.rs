//! JWT issuance and verification for session tokens.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::models::UserView;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signs and checks session tokens.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for `user` that expires `lifetime_seconds` from now.
    fn generate_token(
        &self,
        user: &UserView,
        role: &str,
        secret: &str,
        lifetime_seconds: i64,
    ) -> AppResult<String>;

    /// Check signature and expiry, returning the embedded claims.
    fn verify_token(&self, token: &str, secret: &str) -> AppResult<Claims>;
}

/// HS256 implementation of [`TokenIssuer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtTokenUtil;

impl JwtTokenUtil {
    pub fn new() -> Self {
        Self
    }
}

impl TokenIssuer for JwtTokenUtil {
    fn generate_token(
        &self,
        user: &UserView,
        role: &str,
        secret: &str,
        lifetime_seconds: i64,
    ) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = TimeDelta::try_seconds(lifetime_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Token lifetime of {} seconds is out of range",
                    lifetime_seconds
                ))
            })?;

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            name: user.display_name.clone(),
            role: role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        Ok(token)
    }

    fn verify_token(&self, token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
