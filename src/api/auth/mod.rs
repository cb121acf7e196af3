//! Login: credential verification followed by session token issuance.

mod handler;
mod jwt;

pub use handler::{AuthenticationHandler, JwtAuthenticationHandler};
pub use jwt::{Claims, JwtTokenUtil, TokenIssuer};

#[cfg(any(test, feature = "test-utils"))]
pub use handler::MockAuthenticationHandler;
#[cfg(any(test, feature = "test-utils"))]
pub use jwt::MockTokenIssuer;
