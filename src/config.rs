use crate::cli::Cli;
use crate::core::announce::AnnouncementFormat;
use crate::error::BotResult;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::Level;

const TRACE_LEVELS: [&'static str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];
const LOCAL_SETTINGS_YAML_FILE: &str = ".env.local.yaml";

// Settings are built once at startup and handed to every component that needs
// them. All settings may be configured via environment variables. Example:
// ADVENT_SESSION="xxx" would set advent_session to the xxx value.
#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(default = "default_trace_level")]
    trace_level: String,
    pub advent_year: i32,
    pub advent_owner_id: u64,
    pub advent_session: String,
    pub discord_token: String,
    pub discord_channel_id: u64,
    pub discord_application_id: u64,
    // Hex encoded ed25519 public key of the Discord application
    pub discord_public_key: String,
    #[serde(default = "default_aoc_base_url")]
    pub aoc_base_url: String,
    #[serde(default = "default_aoc_api_timeout_sec")]
    pub aoc_api_timeout_sec: u64,
    #[serde(default = "default_discord_api_url")]
    pub discord_api_url: String,
    #[serde(default = "default_cache_ttl_sec")]
    pub cache_ttl_sec: u64,
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    // Cron expression (with seconds) of the daily challenge announcement, in UTC.
    #[serde(default = "default_announce_schedule")]
    pub announce_schedule: String,
    #[serde(default)]
    pub announcement_format: AnnouncementFormat,
}

impl Settings {
    pub fn new(cli: &Cli) -> BotResult<Self> {
        let figment = match Path::new(LOCAL_SETTINGS_YAML_FILE).exists() {
            true => {
                println!(
                    "\n######################################\n\
                       ##   Found '.env.local.yaml' file,  ##\n\
                       ##   loading local configuration.   ##\n\
                       ######################################\n\
                    "
                );
                Figment::new()
                    .merge(Yaml::file(LOCAL_SETTINGS_YAML_FILE))
                    .merge(Env::raw())
            }
            false => Figment::new().merge(Env::raw()),
        };

        Settings::from_figment(figment.merge(Serialized::defaults(cli)))
    }

    pub fn from_figment(figment: Figment) -> BotResult<Self> {
        Ok(figment.extract()?)
    }

    pub fn get_trace_level(&self) -> Level {
        get_trace_level(&self.trace_level)
    }

    pub fn aoc_api_timeout(&self) -> Duration {
        Duration::from_secs(self.aoc_api_timeout_sec)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_sec)
    }

    pub fn listen_on(&self) -> String {
        format!("{}:{}", self.listen_address, self.port)
    }
}

fn get_trace_level(level_str: &str) -> Level {
    match level_str {
        level if level == TRACE_LEVELS[0] => Level::TRACE,
        level if level == TRACE_LEVELS[1] => Level::DEBUG,
        level if level == TRACE_LEVELS[2] => Level::INFO,
        level if level == TRACE_LEVELS[3] => Level::WARN,
        level if level == TRACE_LEVELS[4] => Level::ERROR,
        // Default trace level
        _ => Level::INFO,
    }
}

fn default_trace_level() -> String {
    "INFO".to_string()
}

fn default_aoc_base_url() -> String {
    "https://adventofcode.com".to_string()
}

fn default_aoc_api_timeout_sec() -> u64 {
    5
}

fn default_discord_api_url() -> String {
    "https://discord.com/api/v10".to_string()
}

// AoC API rules states to not fetch leaderboard at a frequency higher than 15min.
fn default_cache_ttl_sec() -> u64 {
    900
}

fn default_listen_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

// Puzzles unlock at 05:00:00 UTC, from December 1st to 25th.
fn default_announce_schedule() -> String {
    "0 0 5 1-25 12 *".to_string()
}
