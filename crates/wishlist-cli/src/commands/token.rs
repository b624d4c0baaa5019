//! Session token commands.
//!
//! The identity provider lives outside this service; `token issue` mints a
//! bearer token for a known user id so the API can be exercised directly.

use clap::{Args, Subcommand};

use wishlist_auth::JwtEncoder;
use wishlist_core::config::AppConfig;
use wishlist_core::error::AppError;
use wishlist_core::types::UserId;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue an access token for a user
    Issue {
        /// The user the token authenticates as
        #[arg(short, long)]
        user_id: UserId,
    },
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let encoder = JwtEncoder::new(&config.auth);

    match &args.command {
        TokenCommand::Issue { user_id } => {
            let issued = encoder.issue(*user_id)?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&issued)?);
                }
                OutputFormat::Table => {
                    output::print_kv("Session", &issued.session_id.to_string());
                    output::print_kv("Expires", &issued.expires_at.to_rfc3339());
                    println!("{}", issued.access_token);
                }
            }
        }
    }

    Ok(())
}
