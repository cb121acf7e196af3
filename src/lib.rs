//! session-auth - credential verification and JWT session tokens.
//!
//! A login request is checked against the user store; a verified user is
//! projected into a client-safe view and handed back as a signed session
//! token. Anything short of a verified user yields a bare `UNAUTHORIZED`.
//!
//! # Layers
//!
//! - **api**: authentication handler, token issuer, HTTP handlers and routes
//! - **services**: credential verification
//! - **domain**: user entity and password value object
//! - **infra**: database connection, migrations, user repository
//! - **config** / **errors**: settings and the shared error type
//! - **cli** / **commands**: command-line entry points
//!
//! # CLI Usage
//!
//! ```bash
//! cargo run -- migrate up
//! cargo run -- user add alice@example.com Alice --password 'correct horse'
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::auth::{AuthenticationHandler, JwtAuthenticationHandler, JwtTokenUtil, TokenIssuer};
pub use api::models::{Authentication, UserView};
pub use api::AppState;
pub use config::{Config, TokenSettings};
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
pub use services::{AuthenticationRequest, AuthenticationService, CredentialVerifier};
