use crate::{
    client::discord::Discord,
    config::Settings,
    core::{
        components::Component,
        interaction::{Embed, MessageData},
        templates::MessageTemplate,
    },
    error::BotResult,
};
use chrono::{DateTime, Datelike, Utc};
use minijinja::context;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Layout of the daily challenge announcement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementFormat {
    /// Plain content with a link embed.
    Embed,
    /// Components v2 container with a link button.
    #[default]
    Components,
}

pub struct Announcer {
    discord: Discord,
    channel_id: u64,
    format: AnnouncementFormat,
    aoc_base_url: String,
}

impl Announcer {
    pub fn new(settings: &Settings) -> BotResult<Self> {
        Ok(Announcer {
            discord: Discord::new(settings)?,
            channel_id: settings.discord_channel_id,
            format: settings.announcement_format,
            aoc_base_url: settings.aoc_base_url.clone(),
        })
    }

    /// Announcement for the puzzle of the day the job was scheduled on (UTC).
    pub fn message(&self, scheduled: DateTime<Utc>) -> BotResult<MessageData> {
        let (year, day) = (scheduled.year(), scheduled.day());
        let url = format!("{}/{}/day/{}", self.aoc_base_url, year, day);
        let text = MessageTemplate::DailyChallenge.render(context! { day => day })?;

        let message = match self.format {
            AnnouncementFormat::Embed => MessageData {
                content: Some(text),
                embeds: vec![Embed {
                    title: format!("Advent of Code: Day {}", day),
                    description: "Click here to solve today's problem!".to_string(),
                    url,
                }],
                ..Default::default()
            },
            AnnouncementFormat::Components => MessageData::components(vec![Component::container(vec![
                Component::text(text),
                Component::divider(),
                Component::link(format!("Solve day {}", day), url),
            ])]),
        };
        Ok(message)
    }

    /// Sends the announcement once. Failures are logged and returned, never retried.
    pub async fn announce(&self, scheduled: DateTime<Utc>) -> BotResult<()> {
        let message = self.message(scheduled)?;
        match self.discord.post_message(self.channel_id, &message).await {
            Ok(()) => {
                info!("Sent daily challenge announcement for day {}", scheduled.day());
                Ok(())
            }
            Err(e) => {
                error!("Could not send daily challenge announcement. {e}");
                Err(e)
            }
        }
    }
}
