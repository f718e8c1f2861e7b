use crate::{
    core::leaderboard::{Member, ProblemPart},
    utils::{digits, text_width},
};
use itertools::Itertools;

const MIN_NAME_WIDTH: usize = 4;
const MIN_SCORE_WIDTH: usize = 5;
const STARS_WIDTH: usize = 5;
const MIN_ID_WIDTH: usize = 2;

const STAR_EARNED: &str = "★";
const STAR_MISSING: &str = "☆";

// Display leaderboard table from ranked members
pub fn board(standings: &[&Member]) -> String {
    // the width of the maximum position to be displayed
    let width_pos = digits(standings.len() as u64);

    let width_name = standings
        .iter()
        .map(|member| text_width(&member.name))
        .max()
        .unwrap_or_default()
        .max(MIN_NAME_WIDTH);

    let width_score = standings
        .iter()
        .map(|member| digits(member.local_score))
        .max()
        .unwrap_or_default()
        .max(MIN_SCORE_WIDTH);

    let width_stars = STARS_WIDTH;

    let header = format!(
        "{:>width_pos$} {:<width_name$} {:>width_score$} {:>width_stars$}",
        "#", "Name", "Score", "Stars"
    );
    let divider = "-".repeat(width_pos + width_name + width_score + width_stars + 3);

    let rows = standings.iter().enumerate().map(|(idx, member)| {
        format!(
            "{:>width_pos$} {:<width_name$} {:>width_score$} {:>width_stars$}",
            // idx is zero-based
            idx + 1,
            member.name,
            member.local_score,
            member.stars
        )
    });

    [header, divider].into_iter().chain(rows).join("\n")
}

// Display stars earned each day, most recent day first
pub fn completion(member: &Member) -> String {
    let width_day = member
        .completion_day_level
        .keys()
        .map(|day| digits(*day as u64))
        .max()
        .unwrap_or_default();

    member
        .completion_day_level
        .iter()
        // keys are numbers, so day 10 comes before day 9
        .sorted_by(|(a, _), (b, _)| b.cmp(a))
        .map(|(day, completion)| {
            format!(
                "Day {:>width_day$}  {} {}",
                day,
                star(completion.has(ProblemPart::FIRST)),
                star(completion.has(ProblemPart::SECOND)),
            )
        })
        .join("\n")
}

// Display member names next to their ids
pub fn roster(members: &[Member]) -> String {
    let width_name = members
        .iter()
        .map(|member| text_width(&member.name))
        .max()
        .unwrap_or_default()
        .max(MIN_NAME_WIDTH);

    let width_id = members
        .iter()
        .map(|member| text_width(&member.id))
        .max()
        .unwrap_or_default()
        .max(MIN_ID_WIDTH);

    let header = format!("{:<width_name$} {:>width_id$}", "Name", "ID");
    let divider = "-".repeat(width_name + width_id + 1);

    let rows = members
        .iter()
        .map(|member| format!("{:<width_name$} {:>width_id$}", member.name, member.id));

    [header, divider].into_iter().chain(rows).join("\n")
}

fn star(earned: bool) -> &'static str {
    match earned {
        true => STAR_EARNED,
        false => STAR_MISSING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        leaderboard::{tests::sample, LeaderboardSnapshot},
        standings::standings_by_local_score,
    };

    #[test]
    fn board_columns_fit_the_data() {
        let snapshot = sample();
        let table = board(&standings_by_local_score(&snapshot));

        assert_eq!(
            table,
            "# Name Score Stars\n\
             ------------------\n\
             1 Ann     40     4\n\
             2 Bo      40     2"
        );
    }

    #[test]
    fn board_widens_for_long_names_and_big_scores() {
        let json = r#"{"members": {
            "1": {"name": "a", "local_score": 1, "stars": 1},
            "2": {"name": "Rudolph the Red", "local_score": 1234567, "stars": 50},
            "3": {"name": "b", "local_score": 2, "stars": 1},
            "4": {"name": "c", "local_score": 3, "stars": 1},
            "5": {"name": "d", "local_score": 4, "stars": 1},
            "6": {"name": "e", "local_score": 5, "stars": 1},
            "7": {"name": "f", "local_score": 6, "stars": 1},
            "8": {"name": "g", "local_score": 7, "stars": 1},
            "9": {"name": "h", "local_score": 8, "stars": 1},
            "10": {"name": "i", "local_score": 0, "stars": 0}
        }}"#;
        let snapshot: LeaderboardSnapshot = serde_json::from_str(json).unwrap();
        let table = board(&standings_by_local_score(&snapshot));
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], " # Name              Score Stars");
        assert_eq!(lines[1].len(), 2 + 15 + 7 + 5 + 3);
        assert_eq!(lines[2], " 1 Rudolph the Red 1234567    50");
        assert_eq!(lines[11], "10 i                     0     0");
    }

    #[test]
    fn empty_board_has_only_headers() {
        let table = board(&[]);
        assert_eq!(table, "# Name Score Stars\n------------------");
    }

    #[test]
    fn completion_lists_days_in_descending_numeric_order() {
        let json = r#"{"members": {"1": {
            "name": "Ann", "local_score": 10, "stars": 5,
            "completion_day_level": {
                "9": {"1": {}, "2": {}},
                "10": {"1": {}},
                "2": {"1": {}, "2": {}}
            }
        }}}"#;
        let snapshot: LeaderboardSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(
            completion(snapshot.member("1").unwrap()),
            "Day 10  ★ ☆\n\
             Day  9  ★ ★\n\
             Day  2  ★ ★"
        );
    }

    #[test]
    fn roster_aligns_names_and_ids() {
        let json = r#"{"members": {
            "1234567": {"name": "Ann", "local_score": 0, "stars": 0},
            "7": {"name": "Bartholomew", "local_score": 0, "stars": 0}
        }}"#;
        let snapshot: LeaderboardSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(
            roster(&snapshot.members),
            "Name             ID\n\
             -------------------\n\
             Ann         1234567\n\
             Bartholomew       7"
        );
    }

    #[test]
    fn roster_uses_minimum_widths() {
        let snapshot = sample();
        assert_eq!(
            roster(&snapshot.members),
            "Name ID\n\
             -------\n\
             Ann   1\n\
             Bo    2"
        );
    }
}
