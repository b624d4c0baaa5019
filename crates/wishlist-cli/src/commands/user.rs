//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use wishlist_core::config::AppConfig;
use wishlist_core::error::AppError;
use wishlist_database::repositories::UserRepository;
use wishlist_entity::user::{CreateUser, User};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a user who can own wish lists
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List all users
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Name
    name: String,
    /// Email
    email: String,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            email: u.email.clone().unwrap_or_default(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let user_repo = UserRepository::new(pool.pool().clone());

    match &args.command {
        UserCommand::Create { name, email } => {
            let user = user_repo
                .create(&CreateUser {
                    name: name.clone(),
                    email: email.clone(),
                })
                .await?;

            output::print_success(&format!("User '{}' created", user.name));
            output::print_item(&UserRow::from(&user), format);
        }
        UserCommand::List => {
            let users = user_repo.find_all().await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    pool.close().await;
    Ok(())
}
