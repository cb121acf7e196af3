//! API layer - HTTP handlers and middleware
//!
//! - `auth`: the authentication handler and token issuer
//! - `models`: shapes returned to clients
//! - request handlers, middleware, extractors and route definitions

pub mod auth;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
