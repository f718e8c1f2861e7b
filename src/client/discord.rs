use reqwest::{Client, RequestBuilder};
use std::fmt;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::core::commands::CommandDefinition;
use crate::core::interaction::MessageData;
use crate::error::{BotError, BotResult};

const DISCORD_API_TIMEOUT: Duration = Duration::from_secs(10);

enum Endpoint {
    ChannelMessages(u64),
    ApplicationCommands(u64),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::ChannelMessages(channel_id) => {
                write!(f, "/channels/{}/messages", channel_id)
            }
            Endpoint::ApplicationCommands(application_id) => {
                write!(f, "/applications/{}/commands", application_id)
            }
        }
    }
}

/// Discord REST API client, authenticated as the bot.
pub struct Discord {
    http_client: Client,
    api_url: String,
    token: String,
}

impl Discord {
    pub fn new(settings: &Settings) -> BotResult<Self> {
        let http_client = Client::builder().timeout(DISCORD_API_TIMEOUT).build()?;
        Ok(Self {
            http_client,
            api_url: settings.discord_api_url.clone(),
            token: settings.discord_token.clone(),
        })
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.api_url, endpoint)
    }

    async fn send(&self, request: RequestBuilder) -> BotResult<()> {
        let response = request
            .header("authorization", format!("Bot {}", self.token))
            .send()
            .await?;

        let status = response.status();
        match status.is_success() {
            true => Ok(()),
            false => Err(BotError::Upstream {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    pub async fn post_message(&self, channel_id: u64, message: &MessageData) -> BotResult<()> {
        let url = self.url(&Endpoint::ChannelMessages(channel_id));
        self.send(self.http_client.post(&url).json(message)).await
    }

    /// Overwrites the global slash commands of the application.
    pub async fn register_commands(
        &self,
        application_id: u64,
        commands: &[CommandDefinition],
    ) -> BotResult<()> {
        let url = self.url(&Endpoint::ApplicationCommands(application_id));
        self.send(self.http_client.put(&url).json(commands)).await?;
        info!("Registered {} commands for application {application_id}", commands.len());
        Ok(())
    }
}
