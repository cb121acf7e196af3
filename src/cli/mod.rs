//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `user` - Account provisioning

pub mod args;

pub use args::{Cli, Commands};
