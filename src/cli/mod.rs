//! CLI module for Conduit
//!
//! Provides commands:
//! - `send`: deliver an outbound message payload to a Telegram chat
//! - `unregister`: delete the Shopify webhooks recorded in integration state

use crate::config::load_config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod send;
pub mod unregister;

/// Conduit integration adapters CLI
#[derive(Parser, Debug)]
#[command(name = "conduit")]
#[command(about = "Bot platform integration adapters")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send an outbound message payload (JSON) to a Telegram chat
    Send {
        /// Telegram chat id or @channel username
        #[arg(long)]
        chat: String,
        /// Host conversation id used in logs and errors
        #[arg(long, default_value = "cli")]
        conversation: String,
        /// Payload file, or `-` for stdin
        payload: PathBuf,
    },
    /// Delete the Shopify webhooks listed in an exported state file
    Unregister {
        /// JSON file holding `{"webhookIds": [...]}`
        state: PathBuf,
    },
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Send {
            chat,
            conversation,
            payload,
        }) => {
            let config = load_config()?;
            send::run(&config, conversation, chat, &payload).await
        }
        Some(Commands::Unregister { state }) => {
            let config = load_config()?;
            unregister::run(&config, &state).await
        }
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
