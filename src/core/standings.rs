use crate::core::leaderboard::{LeaderboardSnapshot, Member};
use itertools::Itertools;
use std::cmp::Reverse;

/// Members ranked by local score, highest first.
/// The sort is stable, so tied members keep the leaderboard document order.
pub fn standings_by_local_score(snapshot: &LeaderboardSnapshot) -> Vec<&Member> {
    snapshot
        .members
        .iter()
        .sorted_by_key(|member| Reverse(member.local_score))
        .collect()
}
