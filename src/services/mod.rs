//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits rather than concrete stores so
//! they can be exercised without a database.

mod authentication_service;

pub use authentication_service::{AuthenticationRequest, AuthenticationService, CredentialVerifier};

#[cfg(any(test, feature = "test-utils"))]
pub use authentication_service::MockAuthenticationService;
