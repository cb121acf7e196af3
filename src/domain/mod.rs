//! Domain layer - Core business entities and logic
//!
//! Holds the user record as the credential store knows it, independent
//! of how it is persisted or presented.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{User, UserRole};
