//! CLI command definitions and dispatch.

pub mod migrate;
pub mod token;
pub mod user;

use clap::{Parser, Subcommand};

use wishlist_core::config::{AppConfig, DatabaseProvider};
use wishlist_core::error::AppError;
use wishlist_database::DatabasePool;

use crate::output::OutputFormat;

/// Wishlist administration
#[derive(Debug, Parser)]
#[command(name = "wishlist", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load; falls back to `WISHLIST_ENV`, then `development`
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Session token management
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Token(args) => token::execute(args, &config, self.format),
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        let env = self
            .env
            .clone()
            .or_else(|| std::env::var("WISHLIST_ENV").ok())
            .unwrap_or_else(|| "development".to_string());
        AppConfig::load_from(&self.config_dir, &env)
    }
}

/// Helper: connect to PostgreSQL; the memory store has nothing to administer
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    if config.database.provider != DatabaseProvider::Postgres {
        return Err(AppError::configuration(
            "This command needs database.provider = \"postgres\"",
        ));
    }
    DatabasePool::connect(&config.database).await
}
