use crate::results::{Fixture, Gender, MatchResult, TeamCategory, Venue};

/// Test utilities for creating match results
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a senior men's match between the club and `opponent`
    pub fn club_match(category: &str, club_at_home: bool, opponent: &str, score: &str) -> MatchResult {
        MatchResult {
            category: category.to_string(),
            team_category: TeamCategory::Senior,
            gender: Gender::Male,
            fixture: Fixture::ClubMatch {
                venue: if club_at_home { Venue::Home } else { Venue::Away },
                opponent: opponent.to_string(),
            },
            score: score.to_string(),
            scorers: vec![],
        }
    }

    /// Creates a senior men's match between two teams other than the club
    pub fn opponent_match(category: &str, home_team: &str, away_team: &str, score: &str) -> MatchResult {
        MatchResult {
            category: category.to_string(),
            team_category: TeamCategory::Senior,
            gender: Gender::Male,
            fixture: Fixture::OpponentMatch {
                home_team: home_team.to_string(),
                away_team: away_team.to_string(),
            },
            score: score.to_string(),
            scorers: vec![],
        }
    }

    /// Creates a championship season for the club against `opponents`,
    /// alternating home and away, with the given scores in order
    pub fn championship_season(opponents: &[&str], scores: &[&str]) -> Vec<MatchResult> {
        opponents
            .iter()
            .zip(scores)
            .enumerate()
            .map(|(i, (opponent, score))| {
                Self::club_match("Match Championnat", i % 2 == 0, opponent, score)
            })
            .collect()
    }

    /// Creates a JSON result feed document in the result store's flat shape
    pub fn feed_document(
        category: &str,
        team_category: &str,
        gender: &str,
        opponent: &str,
        home_or_away: &str,
        score: &str,
        scorers: &[(&str, u32)],
    ) -> serde_json::Value {
        let scorers: Vec<serde_json::Value> = scorers
            .iter()
            .map(|(name, count)| serde_json::json!({ "playerName": name, "count": count }))
            .collect();
        serde_json::json!({
            "category": category,
            "teamCategory": team_category,
            "gender": gender,
            "matchType": "club-match",
            "homeOrAway": home_or_away,
            "opponent": opponent,
            "score": score,
            "scorers": scorers,
        })
    }
}
