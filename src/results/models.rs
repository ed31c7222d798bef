//! Match result records as they come out of the result store.
//!
//! The store hands out flat documents where `matchType` decides which of the
//! participant fields are meaningful. They are decoded into [`RawMatchResult`]
//! first and then converted into [`MatchResult`], whose [`Fixture`] makes the
//! two participant-naming schemes explicit.

use crate::constants::{self, competition, match_type};
use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender bracket of the squad that played the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Masculin")]
    Male,
    #[serde(rename = "Féminin")]
    Female,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Masculin",
            Gender::Female => "Féminin",
            Gender::Unknown => "Inconnu",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masculin" | "m" | "male" => Ok(Gender::Male),
            "féminin" | "feminin" | "f" | "female" => Ok(Gender::Female),
            other => Err(AppError::invalid_argument(format!("Unknown gender '{other}'"))),
        }
    }
}

/// Age or division bracket of the squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TeamCategory {
    #[serde(rename = "Sénior")]
    Senior,
    U20,
    U19,
    U18,
    U17,
    U16,
    U15,
    U14,
    U13,
    U12,
    U11,
    U10,
    U9,
    U8,
    U7,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TeamCategory {
    /// All known brackets, oldest first.
    pub const ALL: [TeamCategory; 15] = [
        TeamCategory::Senior,
        TeamCategory::U20,
        TeamCategory::U19,
        TeamCategory::U18,
        TeamCategory::U17,
        TeamCategory::U16,
        TeamCategory::U15,
        TeamCategory::U14,
        TeamCategory::U13,
        TeamCategory::U12,
        TeamCategory::U11,
        TeamCategory::U10,
        TeamCategory::U9,
        TeamCategory::U8,
        TeamCategory::U7,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TeamCategory::Senior => "Sénior",
            TeamCategory::U20 => "U20",
            TeamCategory::U19 => "U19",
            TeamCategory::U18 => "U18",
            TeamCategory::U17 => "U17",
            TeamCategory::U16 => "U16",
            TeamCategory::U15 => "U15",
            TeamCategory::U14 => "U14",
            TeamCategory::U13 => "U13",
            TeamCategory::U12 => "U12",
            TeamCategory::U11 => "U11",
            TeamCategory::U10 => "U10",
            TeamCategory::U9 => "U9",
            TeamCategory::U8 => "U8",
            TeamCategory::U7 => "U7",
            TeamCategory::Unknown => "Inconnue",
        }
    }
}

impl fmt::Display for TeamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TeamCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("senior") {
            return Ok(TeamCategory::Senior);
        }
        TeamCategory::ALL
            .into_iter()
            .find(|category| category.label().to_lowercase() == wanted.to_lowercase())
            .ok_or_else(|| AppError::invalid_argument(format!("Unknown team category '{wanted}'")))
    }
}

/// The competition tabs a league table can be shown for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Competition {
    #[serde(rename = "Match Championnat")]
    Championship,
    #[serde(rename = "Match Coupe")]
    Cup,
    #[serde(rename = "Match Tournoi")]
    Tournament,
}

impl Competition {
    pub const ALL: [Competition; 3] = [
        Competition::Championship,
        Competition::Cup,
        Competition::Tournament,
    ];

    /// The `category` value results of this competition carry.
    pub fn label(&self) -> &'static str {
        match self {
            Competition::Championship => competition::CHAMPIONSHIP,
            Competition::Cup => competition::CUP,
            Competition::Tournament => competition::TOURNAMENT,
        }
    }

    /// Short heading for the teletext page.
    pub fn heading(&self) -> &'static str {
        match self {
            Competition::Championship => "CHAMPIONNAT",
            Competition::Cup => "COUPE",
            Competition::Tournament => "TOURNOI",
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Competition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let lowered = wanted.to_lowercase();
        match lowered.as_str() {
            "championnat" | "championship" | "league" => return Ok(Competition::Championship),
            "coupe" | "cup" => return Ok(Competition::Cup),
            "tournoi" | "tournament" => return Ok(Competition::Tournament),
            _ => {}
        }
        Competition::ALL
            .into_iter()
            .find(|competition| competition.label().to_lowercase() == lowered)
            .ok_or_else(|| AppError::invalid_argument(format!("Unknown competition '{wanted}'")))
    }
}

/// Which side the club played on in a club match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Home,
    Away,
}

/// The participants of a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fixture {
    /// The club against a named opponent.
    ClubMatch { venue: Venue, opponent: String },
    /// Two teams that are not the club, e.g. inside a tournament bracket.
    OpponentMatch { home_team: String, away_team: String },
}

impl Fixture {
    /// Resolves `(home, away)` team names, standing `club_name` in for the club.
    pub fn teams<'a>(&'a self, club_name: &'a str) -> (&'a str, &'a str) {
        match self {
            Fixture::ClubMatch {
                venue: Venue::Home,
                opponent,
            } => (club_name, opponent.as_str()),
            Fixture::ClubMatch {
                venue: Venue::Away,
                opponent,
            } => (opponent.as_str(), club_name),
            Fixture::OpponentMatch {
                home_team,
                away_team,
            } => (home_team.as_str(), away_team.as_str()),
        }
    }

    pub fn is_club_match(&self) -> bool {
        matches!(self, Fixture::ClubMatch { .. })
    }
}

/// One scorer line of a result: a raw player name and the goals scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerEntry {
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(default = "default_goal_count")]
    pub count: u32,
}

fn default_goal_count() -> u32 {
    1
}

/// A single match result, read-only to the standings engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMatchResult")]
pub struct MatchResult {
    /// Competition label, free-form (e.g. "Match Championnat").
    pub category: String,
    pub team_category: TeamCategory,
    pub gender: Gender,
    pub fixture: Fixture,
    /// Home-away goals formatted `"<int>-<int>"`; may be malformed.
    pub score: String,
    pub scorers: Vec<ScorerEntry>,
}

impl MatchResult {
    /// Returns the result re-labelled for another squad.
    pub fn with_squad(mut self, team_category: TeamCategory, gender: Gender) -> Self {
        self.team_category = team_category;
        self.gender = gender;
        self
    }

    /// Returns the result with its scorer lines replaced.
    pub fn with_scorers(mut self, scorers: &[(&str, u32)]) -> Self {
        self.scorers = scorers
            .iter()
            .map(|(player_name, count)| ScorerEntry {
                player_name: (*player_name).to_string(),
                count: *count,
            })
            .collect();
        self
    }
}

/// Flat document shape used by the result store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchResult {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub team_category: Option<TeamCategory>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_or_away: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub score: String,
    #[serde(default, deserialize_with = "lenient_scorers")]
    pub scorers: Vec<ScorerEntry>,
}

impl From<RawMatchResult> for MatchResult {
    fn from(raw: RawMatchResult) -> Self {
        let fixture = match raw.match_type.as_deref() {
            Some(match_type::OPPONENT_VS_OPPONENT) => Fixture::OpponentMatch {
                home_team: raw.home_team.unwrap_or_default(),
                away_team: raw.away_team.unwrap_or_default(),
            },
            kind => {
                if let Some(other) = kind.filter(|t| *t != match_type::CLUB_MATCH) {
                    tracing::debug!("Unknown matchType {other:?}, reading it as a club match");
                }
                let venue = if raw.home_or_away.as_deref() == Some(constants::HOME) {
                    Venue::Home
                } else {
                    Venue::Away
                };
                Fixture::ClubMatch {
                    venue,
                    opponent: raw.opponent.unwrap_or_default(),
                }
            }
        };

        MatchResult {
            category: raw.category.unwrap_or_default(),
            team_category: raw.team_category.unwrap_or_default(),
            gender: raw.gender.unwrap_or_default(),
            fixture,
            score: raw.score,
            scorers: raw.scorers,
        }
    }
}

/// Accepts any JSON value, keeping strings and mapping everything else to "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Missing or malformed scorer data counts as no scorers at all.
fn lenient_scorers<'de, D>(deserializer: D) -> Result<Vec<ScorerEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Null => return Ok(Vec::new()),
        other => {
            tracing::debug!("Ignoring non-array scorers field: {other}");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ScorerEntry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping malformed scorer entry: {e}");
                None
            }
        })
        .collect())
}
