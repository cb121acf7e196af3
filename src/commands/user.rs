//! User command - Provision login accounts.

use std::sync::Arc;

use validator::Validate;

use crate::cli::args::{UserAction, UserArgs};
use crate::config::Config;
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserRepository, UserStore};
use crate::services::AuthenticationRequest;

/// Execute the user command
pub async fn execute(args: UserArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.get_connection()));

    match args.action {
        UserAction::Add {
            email,
            name,
            password,
        } => {
            let user = add_user(users.as_ref(), email, name, &password).await?;
            tracing::info!(id = %user.id, email = %user.email, "User created");
            println!("{}", user.id);
        }
    }

    Ok(())
}

/// Create an account that `/auth/login` will accept.
///
/// The email goes through the same rules the login payload does.
async fn add_user(
    users: &dyn UserRepository,
    email: String,
    name: String,
    password: &str,
) -> AppResult<User> {
    AuthenticationRequest::new(email.as_str(), password)
        .validate()
        .map_err(|e| AppError::validation(format!("Invalid account details: {}", e)))?;

    let password_hash = Password::new(password)?.into_string();
    users.create(email, password_hash, name).await
}
