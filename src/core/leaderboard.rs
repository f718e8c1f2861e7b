use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer,
};
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    ops::Deref,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Deserialize)]
pub enum ProblemPart {
    #[serde(rename = "1")]
    FIRST,
    #[serde(rename = "2")]
    SECOND,
}

/// Star earned for one part of a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Star {
    #[serde(default)]
    pub get_star_ts: Option<i64>,
    #[serde(default)]
    pub star_index: Option<u64>,
}

/// Parts of a day completed by a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DayCompletion {
    parts: BTreeMap<ProblemPart, Star>,
}

impl DayCompletion {
    pub fn has(&self, part: ProblemPart) -> bool {
        self.parts.contains_key(&part)
    }

    pub fn n_stars(&self) -> usize {
        self.parts.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Key of the member in the leaderboard document.
    pub id: String,
    pub name: String,
    pub local_score: u64,
    pub stars: u64,
    /// Day number => completed parts. Days iterate in numeric order.
    pub completion_day_level: BTreeMap<u8, DayCompletion>,
}

// Member as sent by the AoC private leaderboard API.
#[derive(Debug, Deserialize)]
struct AOCPrivateLeaderboardMember {
    /// anonymous users appear with null names in the AoC API
    #[serde(default)]
    name: Option<String>,
    local_score: u64,
    stars: u64,
    #[serde(default)]
    completion_day_level: HashMap<String, DayCompletion>,
}

impl AOCPrivateLeaderboardMember {
    fn into_member(self, id: String) -> Result<Member, String> {
        let completion_day_level = self
            .completion_day_level
            .into_iter()
            .map(|(day, completion)| {
                day.parse::<u8>()
                    .map(|day| (day, completion))
                    .map_err(|_| format!("invalid day '{day}' for member {id}"))
            })
            .collect::<Result<BTreeMap<u8, DayCompletion>, String>>()?;

        let name = match self.name {
            Some(name) => name,
            None => format!("anonymous user #{}", id),
        };

        Ok(Member {
            id,
            name,
            local_score: self.local_score,
            stars: self.stars,
            completion_day_level,
        })
    }
}

/// Members in the order the leaderboard document lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Members(Vec<Member>);

impl Members {
    pub fn get(&self, id: &str) -> Option<&Member> {
        self.iter().find(|member| member.id == id)
    }
}

impl Deref for Members {
    type Target = Vec<Member>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Members {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of leaderboard members keyed by member id")
            }

            // Visiting the map entry by entry keeps the document order, which breaks ties in standings.
            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or_default());
                while let Some((id, member)) =
                    map.next_entry::<String, AOCPrivateLeaderboardMember>()?
                {
                    members.push(member.into_member(id).map_err(<A::Error as de::Error>::custom)?);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

/// Private leaderboard document, as returned by the AoC API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LeaderboardSnapshot {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub owner_id: Option<u64>,
    pub members: Members,
}

impl LeaderboardSnapshot {
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }
}
