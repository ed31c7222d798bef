//! Goal-scorer leaderboard across every competition of the selected squad.

use super::collation::compare_names;
use crate::constants::UNKNOWN_OPPONENT_LABEL;
use crate::results::{ClubRoster, Fixture, MatchResult};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// `"<name> (<team>)"`: everything up to the last parenthesised group is the
/// name, the group content is the team. Both parts are trimmed afterwards.
static PLAYER_TEAM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\(([^()]+)\)\s*$").unwrap());

/// One row of the scorer leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerStanding {
    pub rank: u32,
    pub name: String,
    pub team: String,
    pub is_club_player: bool,
    pub goals: u32,
}

/// Splits an external scorer label like `"Paul Durand (AS Lyon)"` into
/// `("Paul Durand", "AS Lyon")`.
///
/// Returns `None` when the label has no trailing team group or either part
/// is blank, in which case callers keep the raw label as the name.
///
/// # Examples
/// ```
/// use club_standings::standings::parse_player_team;
///
/// assert_eq!(parse_player_team("Paul Durand (AS Lyon)"), Some(("Paul Durand", "AS Lyon")));
/// assert_eq!(parse_player_team("Paul Durand"), None);
/// ```
pub fn parse_player_team(raw_name: &str) -> Option<(&str, &str)> {
    let captures = PLAYER_TEAM_PATTERN.captures(raw_name)?;
    let name = captures.get(1)?.as_str().trim();
    let team = captures.get(2)?.as_str().trim();
    if name.is_empty() || team.is_empty() {
        return None;
    }
    Some((name, team))
}

/// Display name, team and club membership for a raw scorer label.
fn resolve_scorer(
    raw_name: &str,
    result: &MatchResult,
    roster: &ClubRoster,
    club_name: &str,
) -> (String, String, bool) {
    if roster.contains(raw_name) {
        return (raw_name.to_string(), club_name.to_string(), true);
    }

    if let Some((name, team)) = parse_player_team(raw_name) {
        return (name.to_string(), team.to_string(), false);
    }

    let team = match &result.fixture {
        Fixture::ClubMatch { opponent, .. } if !opponent.is_empty() => opponent.clone(),
        Fixture::OpponentMatch {
            home_team,
            away_team,
        } if !home_team.is_empty() && !away_team.is_empty() => {
            format!("{home_team} / {away_team}")
        }
        _ => UNKNOWN_OPPONENT_LABEL.to_string(),
    };
    (raw_name.to_string(), team, false)
}

/// Standard competition ranks ("1224") for goal totals sorted in descending order.
///
/// Tied entries share a rank; the entry after a tie group gets its 1-based
/// position.
///
/// # Examples
/// ```
/// use club_standings::standings::competition_ranks;
///
/// assert_eq!(competition_ranks(&[5, 5, 3, 3, 3, 1]), vec![1, 1, 3, 3, 3, 6]);
/// ```
pub fn competition_ranks(sorted_goals: &[u32]) -> Vec<u32> {
    let mut ranks: Vec<u32> = Vec::with_capacity(sorted_goals.len());
    for (position, goals) in sorted_goals.iter().enumerate() {
        let rank = match (position, ranks.last()) {
            (0, _) | (_, None) => 1,
            (_, Some(&previous_rank)) => {
                if *goals < sorted_goals[position - 1] {
                    position as u32 + 1
                } else {
                    previous_rank
                }
            }
        };
        ranks.push(rank);
    }
    ranks
}

/// Builds the scorer leaderboard from every given result, regardless of
/// competition.
///
/// Entries are keyed by the raw scorer label, so `"J. Dupont"` and
/// `"J. Dupont (AS Lyon)"` stay separate rows. Goals for the same label are
/// summed across results. The list is ordered by goals, then name, and ranked
/// with [`competition_ranks`].
pub fn compute_scorer_ranking<'a, I>(
    results: I,
    roster: &ClubRoster,
    club_name: &str,
) -> Vec<ScorerStanding>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    let mut rows: Vec<ScorerStanding> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for result in results {
        for scorer in &result.scorers {
            let raw_name = scorer.player_name.as_str();
            let row = match index.get(raw_name) {
                Some(&row) => row,
                None => {
                    let (name, team, is_club_player) =
                        resolve_scorer(raw_name, result, roster, club_name);
                    rows.push(ScorerStanding {
                        rank: 0,
                        name,
                        team,
                        is_club_player,
                        goals: 0,
                    });
                    index.insert(raw_name, rows.len() - 1);
                    rows.len() - 1
                }
            };
            rows[row].goals = rows[row].goals.saturating_add(scorer.count);
        }
    }

    rows.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| compare_names(&a.name, &b.name)));

    let goals: Vec<u32> = rows.iter().map(|row| row.goals).collect();
    for (row, rank) in rows.iter_mut().zip(competition_ranks(&goals)) {
        row.rank = rank;
    }

    tracing::debug!("Scorer leaderboard has {} players", rows.len());
    rows
}
