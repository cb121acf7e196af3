//! Presentation-layer shapes returned to HTTP clients.

mod authentication;
mod user;

pub use authentication::Authentication;
pub use user::UserView;
