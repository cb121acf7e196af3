//! Credential verification - decides whether a login attempt names a real
//! account with a matching password.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::config::DUMMY_PASSWORD_HASH;
use crate::domain::{Password, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credentials submitted by a client attempting to log in.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct AuthenticationRequest {
    /// Account email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Account password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

impl std::fmt::Debug for AuthenticationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AuthenticationRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Credential verification service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Return the matching user, or `None` when the credentials do not check out.
    ///
    /// Unknown accounts and wrong passwords are indistinguishable to the caller.
    async fn verify_credentials(&self, request: &AuthenticationRequest) -> AppResult<Option<User>>;
}

/// Verifies credentials against the user store using Argon2 hashes.
pub struct CredentialVerifier {
    users: Arc<dyn UserRepository>,
}

impl CredentialVerifier {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthenticationService for CredentialVerifier {
    async fn verify_credentials(&self, request: &AuthenticationRequest) -> AppResult<Option<User>> {
        let user = self.users.find_by_email(&request.email).await?;

        // Hash verification runs even for unknown emails so response timing
        // does not reveal which accounts exist.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => Password::from_hash(DUMMY_PASSWORD_HASH),
        };
        let password_valid = stored.verify(&request.password);

        match user {
            Some(user) if password_valid => Ok(Some(user)),
            _ => {
                tracing::debug!(email = %request.email, "Credential verification failed");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn stored_user(password: &str) -> User {
        User::new(
            Uuid::new_v4(),
            "alice@example.com".to_string(),
            Password::new(password).unwrap().into_string(),
            "alice".to_string(),
        )
    }

    fn verifier_with(repo: MockUserRepository) -> CredentialVerifier {
        CredentialVerifier::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_matching_password_returns_user() {
        let user = stored_user("correct-password");
        let expected_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("alice@example.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let request = AuthenticationRequest::new("alice@example.com", "correct-password");
        let result = verifier_with(repo).verify_credentials(&request).await.unwrap();

        assert_eq!(result.map(|u| u.id), Some(expected_id));
    }

    #[tokio::test]
    async fn test_wrong_password_returns_none() {
        let user = stored_user("correct-password");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let request = AuthenticationRequest::new("alice@example.com", "wrong-password");
        let result = verifier_with(repo).verify_credentials(&request).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_unknown_email_returns_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let request = AuthenticationRequest::new("nobody@example.com", "whatever123");
        let result = verifier_with(repo).verify_credentials(&request).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(AppError::internal("store offline")));

        let request = AuthenticationRequest::new("alice@example.com", "whatever123");
        let result = verifier_with(repo).verify_credentials(&request).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_request_validation() {
        assert!(AuthenticationRequest::new("alice@example.com", "pw").validate().is_ok());
        assert!(AuthenticationRequest::new("not-an-email", "pw").validate().is_err());
        assert!(AuthenticationRequest::new("alice@example.com", "").validate().is_err());
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let request = AuthenticationRequest::new("alice@example.com", "hunter2hunter2");
        assert!(!format!("{:?}", request).contains("hunter2"));
    }
}
