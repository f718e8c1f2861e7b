use serde::Serialize;
use serde_repr::Serialize_repr;
use strum::{EnumIter, IntoEnumIterator};

pub const USER_ID_OPTION: &str = "user_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SlashCommand {
    Leaderboard,
    Stats,
    Users,
    Invite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum CommandKind {
    ChatInput = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum OptionKind {
    String = 3,
}

/// Slash command definition, as registered with Discord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: CommandKind,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDefinition {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub description: &'static str,
    pub required: bool,
}

impl SlashCommand {
    pub fn name(&self) -> &'static str {
        match self {
            SlashCommand::Leaderboard => "lb",
            SlashCommand::Stats => "stats",
            SlashCommand::Users => "users",
            SlashCommand::Invite => "invite",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SlashCommand::Leaderboard => "Display private leaderboard",
            SlashCommand::Stats => "Display completion stats of a leaderboard member",
            SlashCommand::Users => "List user ids",
            SlashCommand::Invite => "Get invite link to add bot to your server",
        }
    }

    /// Command matching an interaction name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        SlashCommand::iter().find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }

    pub fn definition(&self) -> CommandDefinition {
        let options = match self {
            SlashCommand::Stats => vec![OptionDefinition {
                name: USER_ID_OPTION,
                kind: OptionKind::String,
                description: "advent of code user id",
                required: true,
            }],
            _ => vec![],
        };
        CommandDefinition {
            name: self.name(),
            kind: CommandKind::ChatInput,
            description: self.description(),
            options,
        }
    }

    pub fn definitions() -> Vec<CommandDefinition> {
        SlashCommand::iter().map(|cmd| cmd.definition()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_match_ignoring_case() {
        assert_eq!(SlashCommand::from_name("lb"), Some(SlashCommand::Leaderboard));
        assert_eq!(SlashCommand::from_name("LB"), Some(SlashCommand::Leaderboard));
        assert_eq!(SlashCommand::from_name("Stats"), Some(SlashCommand::Stats));
        assert_eq!(SlashCommand::from_name("USERS"), Some(SlashCommand::Users));
        assert_eq!(SlashCommand::from_name("invite"), Some(SlashCommand::Invite));
        assert_eq!(SlashCommand::from_name("standings"), None);
    }

    #[test]
    fn stats_definition_requires_a_user_id() {
        assert_eq!(
            serde_json::to_value(SlashCommand::Stats.definition()).unwrap(),
            json!({
                "name": "stats",
                "type": 1,
                "description": "Display completion stats of a leaderboard member",
                "options": [{
                    "name": "user_id",
                    "type": 3,
                    "description": "advent of code user id",
                    "required": true
                }]
            })
        );
    }

    #[test]
    fn all_four_commands_are_registered() {
        let names = SlashCommand::definitions()
            .iter()
            .map(|d| d.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["lb", "stats", "users", "invite"]);
        assert!(serde_json::to_value(SlashCommand::Users.definition())
            .unwrap()
            .get("options")
            .is_none());
    }
}
