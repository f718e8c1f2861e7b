use crate::error::{BotError, BotResult};
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};
use tracing::{error, info};

static TEMPLATES_ENVIRONMENT: Lazy<Environment> = Lazy::new(|| {
    info!("Initializing templating engine environment.");
    let mut env = Environment::new();

    // Use strum to iterate over the variants of the enum.
    for template in MessageTemplate::iter() {
        if let Err(e) = env.add_template(template.name(), template.template()) {
            let error = BotError::Template(format!("Could not load '{}'. {e}", template.name()));
            error!("{error}");
        }
    }

    info!("Templates loaded in templating engine environment.");

    env
});

#[derive(Debug, Clone, Copy, EnumIter)]
pub enum MessageTemplate {
    LeaderboardTitle,
    StatsTitle,
    MemberNotFound,
    NoProgress,
    UsersTitle,
    DailyChallenge,
    LeaderboardUnavailable,
}

impl MessageTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            MessageTemplate::LeaderboardTitle => "leaderboard_title.txt",
            MessageTemplate::StatsTitle => "stats_title.txt",
            MessageTemplate::MemberNotFound => "member_not_found.txt",
            MessageTemplate::NoProgress => "no_progress.txt",
            MessageTemplate::UsersTitle => "users_title.txt",
            MessageTemplate::DailyChallenge => "daily_challenge.txt",
            MessageTemplate::LeaderboardUnavailable => "leaderboard_unavailable.txt",
        }
    }

    pub fn render<S: Serialize>(&self, ctx: S) -> BotResult<String> {
        let template = TEMPLATES_ENVIRONMENT.get_template(self.name())?;
        Ok(template.render(ctx)?)
    }

    pub fn template(&self) -> &'static str {
        // \n\ at each code line end creates a line break at the proper position and discards further spaces in this line of code.
        match self {
            MessageTemplate::LeaderboardTitle => {
                "🎅 **Current Leaderboard** for Advent of Code {{ year }}"
            }
            MessageTemplate::StatsTitle => {
                "🎅 **Completion level for {{ name }}**\n\
                 {{ stars }} ⭐ · {{ score }} points"
            }
            MessageTemplate::MemberNotFound => {
                "`{{ user_id }}` does not exist, use the `/users` command to list users and their IDs"
            }
            MessageTemplate::NoProgress => {
                "No days completed for user **{{ name }}**"
            }
            MessageTemplate::UsersTitle => {
                "🎅 **Members list for the current leaderboard** ({{ count }} member{{ 's' if count != 1 }})"
            }
            MessageTemplate::DailyChallenge => {
                "🎅 [ **Attention, elves!** ]\n\
                 **Day {{ day }}** of the Advent of Code is out!\n\
                 Happy solving!"
            }
            MessageTemplate::LeaderboardUnavailable => {
                "⚠️ The leaderboard could not be fetched from Advent of Code right now. Please try again later."
            }
        }
    }
}
