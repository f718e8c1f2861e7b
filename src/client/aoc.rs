use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::core::leaderboard::LeaderboardSnapshot;
use crate::error::{BotError, BotResult};
use crate::storage::MemoryCache;

enum Endpoint {
    PrivateLeaderboardPage(i32, u64),
    PrivateLeaderboard(i32, u64),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::PrivateLeaderboardPage(year, id) => {
                write!(f, "/{}/leaderboard/private/view/{}", year, id)
            }
            Endpoint::PrivateLeaderboard(year, id) => {
                write!(f, "/{}/leaderboard/private/view/{}.json", year, id)
            }
        }
    }
}

/// Private leaderboard client, answering from the cache while an entry is fresh.
pub struct AoC {
    http_client: Client,
    base_url: String,
    session_cookie: String,
    private_leaderboard_id: u64,
    cache: MemoryCache,
    cache_ttl: Duration,
}

impl AoC {
    pub fn new(settings: &Settings, cache: MemoryCache) -> BotResult<Self> {
        let http_client = Client::builder().timeout(settings.aoc_api_timeout()).build()?;
        Ok(Self {
            http_client,
            base_url: settings.aoc_base_url.clone(),
            session_cookie: settings.advent_session.clone(),
            private_leaderboard_id: settings.advent_owner_id,
            cache,
            cache_ttl: settings.cache_ttl(),
        })
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Web page of the private leaderboard, for humans.
    pub fn private_leaderboard_page(&self, year: i32) -> String {
        self.url(&Endpoint::PrivateLeaderboardPage(year, self.private_leaderboard_id))
    }

    /// JSON endpoint of the private leaderboard, also used as cache key.
    pub fn private_leaderboard_url(&self, year: i32) -> String {
        self.url(&Endpoint::PrivateLeaderboard(year, self.private_leaderboard_id))
    }

    async fn get(&self, url: &str) -> BotResult<String> {
        let response = self
            .http_client
            .get(url)
            .header("content-type", "application/json;charset=UTF-8")
            .header("cookie", format!("session={}", self.session_cookie))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.text().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let error = BotError::Upstream {
            status: status.as_u16(),
            body,
        };
        match status {
            // AoC responds with INTERNAL_SERVER_ERROR when the session cookie is invalid.
            StatusCode::INTERNAL_SERVER_ERROR => {
                error!("{error}. The session cookie might have expired.")
            }
            _ => error!("{error}"),
        }
        Err(error)
    }

    pub async fn private_leaderboard(&self, year: i32) -> BotResult<LeaderboardSnapshot> {
        let url = self.private_leaderboard_url(year);

        if let Some(cached) = self.cache.get(&url) {
            match serde_json::from_str::<LeaderboardSnapshot>(&cached) {
                Ok(snapshot) => {
                    info!("cached value found for {url}");
                    return Ok(snapshot);
                }
                Err(e) => warn!("cached value for {url} could not be decoded, fetching again. {e}"),
            }
        } else {
            info!("no cached value found for {url}");
        }

        let body = self.get(&url).await?;
        let snapshot = serde_json::from_str::<LeaderboardSnapshot>(&body).map_err(|e| {
            let error = BotError::Parse(format!("Could not parse private leaderboard. {e}"));
            error!("{error}");
            error
        })?;

        self.cache.put(&url, body, self.cache_ttl);
        info!(
            "put cached value for {url}, expires in {} seconds",
            self.cache_ttl.as_secs()
        );

        Ok(snapshot)
    }
}
