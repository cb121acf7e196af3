//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// session-auth - credential verification and session token service
#[derive(Parser, Debug)]
#[command(name = "session-auth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage login accounts
    User(UserArgs),
}

/// Arguments for the serve command. Fall back to the loaded configuration.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

/// Account actions
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Create an account that can log in
    Add {
        /// Login email address
        email: String,
        /// Display name
        name: String,
        /// Plain text password (minimum 8 characters)
        #[arg(long, env = "SESSION_AUTH_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_add() {
        let cli = Cli::try_parse_from([
            "session-auth",
            "user",
            "add",
            "alice@example.com",
            "Alice",
            "--password",
            "correct-horse",
        ])
        .unwrap();

        match cli.command {
            Commands::User(UserArgs {
                action: UserAction::Add { email, name, password },
            }) => {
                assert_eq!(email, "alice@example.com");
                assert_eq!(name, "Alice");
                assert_eq!(password, "correct-horse");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["session-auth", "-v", "serve", "--port", "8080"]).unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
