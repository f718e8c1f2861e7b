use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser, Serialize)]
#[command(name = "elf-herald", version, about = "Advent of Code private leaderboard bot for Discord")]
pub struct Cli {
    /// Port the interactions endpoint listens on
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Address the interactions endpoint binds to
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_address: Option<String>,

    #[command(subcommand)]
    #[serde(skip)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve Discord interactions and run the daily announcement job (default)
    Serve,
    /// Send the daily challenge announcement once and exit
    Announce {
        /// Scheduled time (RFC 3339) used to pick the day, defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Register the slash commands with Discord and exit
    Register,
}
