use crate::{
    core::{
        components::Component,
        display,
        leaderboard::LeaderboardSnapshot,
        standings::standings_by_local_score,
        templates::MessageTemplate,
    },
    error::BotResult,
    utils::code_block,
};
use minijinja::context;
use tracing::info;

/// Answer built from a leaderboard snapshot for one of the commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedPayload {
    Leaderboard {
        title: String,
        table: String,
        link: String,
    },
    Stats {
        title: String,
        days: String,
    },
    MemberNotFound(String),
    NoProgress(String),
    Users {
        title: String,
        table: String,
    },
}

impl RenderedPayload {
    pub fn into_components(self) -> Vec<Component> {
        let body = match self {
            RenderedPayload::Leaderboard { title, table, link } => vec![
                Component::text(title),
                Component::divider(),
                Component::text(code_block(&table)),
                Component::link("View on adventofcode.com", link),
            ],
            RenderedPayload::Stats { title, days } => vec![
                Component::text(title),
                Component::divider(),
                Component::text(code_block(&days)),
            ],
            RenderedPayload::Users { title, table } => vec![
                Component::text(title),
                Component::divider(),
                Component::text(code_block(&table)),
            ],
            RenderedPayload::MemberNotFound(message) | RenderedPayload::NoProgress(message) => {
                vec![Component::text(message)]
            }
        };
        vec![Component::container(body)]
    }
}

pub fn leaderboard(snapshot: &LeaderboardSnapshot, year: i32, link: &str) -> BotResult<RenderedPayload> {
    let standings = standings_by_local_score(snapshot);
    Ok(RenderedPayload::Leaderboard {
        title: MessageTemplate::LeaderboardTitle.render(context! { year => year })?,
        table: display::board(&standings),
        link: link.to_string(),
    })
}

pub fn stats(snapshot: &LeaderboardSnapshot, user_id: &str) -> BotResult<RenderedPayload> {
    let member = match snapshot.member(user_id) {
        Some(member) => member,
        None => {
            let message = MessageTemplate::MemberNotFound.render(context! { user_id => user_id })?;
            info!("{message}");
            return Ok(RenderedPayload::MemberNotFound(message));
        }
    };

    if member.completion_day_level.is_empty() {
        let message = MessageTemplate::NoProgress.render(context! { name => &member.name })?;
        info!("{message}");
        return Ok(RenderedPayload::NoProgress(message));
    }

    Ok(RenderedPayload::Stats {
        title: MessageTemplate::StatsTitle.render(context! {
            name => &member.name,
            stars => member.stars,
            score => member.local_score,
        })?,
        days: display::completion(member),
    })
}

pub fn users(snapshot: &LeaderboardSnapshot) -> BotResult<RenderedPayload> {
    Ok(RenderedPayload::Users {
        title: MessageTemplate::UsersTitle.render(context! { count => snapshot.members.len() })?,
        table: display::roster(&snapshot.members),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::leaderboard::tests::sample;

    #[test]
    fn leaderboard_payload_for_sample() {
        let snapshot = sample();
        let payload = leaderboard(&snapshot, 2024, "https://adventofcode.com/2024/leaderboard/private/view/1").unwrap();

        match payload {
            RenderedPayload::Leaderboard { title, table, link } => {
                assert!(title.contains("2024"));
                let names = table
                    .lines()
                    .skip(2)
                    .map(|line| line.split_whitespace().nth(1).unwrap())
                    .collect::<Vec<_>>();
                assert_eq!(names, vec!["Ann", "Bo"]);
                assert!(link.ends_with("/view/1"));
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn stats_for_member_without_progress() {
        let snapshot = sample();
        assert_eq!(
            stats(&snapshot, "2").unwrap(),
            RenderedPayload::NoProgress("No days completed for user **Bo**".to_string())
        );
    }

    #[test]
    fn stats_for_unknown_member_echoes_the_id() {
        let snapshot = sample();
        match stats(&snapshot, "3").unwrap() {
            RenderedPayload::MemberNotFound(message) => {
                assert!(message.starts_with("`3` does not exist"));
                assert!(message.contains("/users"));
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn stats_for_member_with_progress() {
        let snapshot = sample();
        match stats(&snapshot, "1").unwrap() {
            RenderedPayload::Stats { title, days } => {
                assert!(title.contains("Ann"));
                assert!(title.contains("4 ⭐"));
                assert!(title.contains("40 points"));
                assert_eq!(days, "Day 1  ★ ☆");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn users_payload_lists_everyone() {
        let snapshot = sample();
        match users(&snapshot).unwrap() {
            RenderedPayload::Users { title, table } => {
                assert!(title.ends_with("(2 members)"));
                assert_eq!(table.lines().count(), 4);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn components_wrap_tables_in_code_blocks() {
        let snapshot = sample();
        let components = users(&snapshot).unwrap().into_components();

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].kind(), 17);
        let texts = components[0].texts();
        assert_eq!(texts.len(), 2);
        assert!(texts[1].starts_with("```\nName ID\n"));
        assert!(texts[1].ends_with("\n```"));
    }

    #[test]
    fn not_found_payload_is_a_single_text() {
        let components = RenderedPayload::MemberNotFound("nope".to_string()).into_components();
        assert_eq!(components[0].texts(), vec!["nope"]);
    }
}
