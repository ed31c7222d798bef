//! League table aggregation for one competition tab.

use super::collation::compare_names;
use super::score::parse_score;
use crate::constants::points;
use crate::results::{Competition, MatchResult};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One row of a league table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Default::default()
        }
    }

    /// Adds one match seen from this team's side.
    ///
    /// Goal totals saturate at `u32::MAX`.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += points::WIN;
            }
            Ordering::Equal => {
                self.draws += 1;
                self.points += points::DRAW;
            }
            Ordering::Less => {
                self.losses += 1;
                self.points += points::LOSS;
            }
        }
    }

    fn finalize(&mut self) {
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
    }

    /// Table order: points, goal difference, goals scored, then name.
    pub fn table_order(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.goal_difference.cmp(&self.goal_difference))
            .then_with(|| other.goals_for.cmp(&self.goals_for))
            .then_with(|| compare_names(&self.team, &other.team))
    }
}

/// Whether a result counts towards the table of `competition`.
///
/// The championship table takes every result of its category. Cup and
/// tournament tables only take the club's own matches; fixtures between two
/// other teams still feed the scorer list.
pub fn counts_towards(result: &MatchResult, competition: Competition) -> bool {
    if result.category != competition.label() {
        return false;
    }
    competition == Competition::Championship || result.fixture.is_club_match()
}

/// Builds the league table of `competition` from scratch.
///
/// Results with an unparseable score or an empty team name are skipped
/// without touching any row. Only teams that took part in at least one
/// counted match appear.
pub fn compute_standings<'a, I>(
    results: I,
    club_name: &str,
    competition: Competition,
) -> Vec<TeamStanding>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    let mut rows: Vec<TeamStanding> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let mut row_for = |team: &str, rows: &mut Vec<TeamStanding>| -> usize {
        *index.entry(team.to_string()).or_insert_with(|| {
            rows.push(TeamStanding::new(team));
            rows.len() - 1
        })
    };

    for result in results {
        if !counts_towards(result, competition) {
            continue;
        }

        let Some((home_goals, away_goals)) = parse_score(&result.score) else {
            tracing::debug!("Skipping result with malformed score {:?}", result.score);
            continue;
        };

        let (home_team, away_team) = result.fixture.teams(club_name);
        if home_team.is_empty() || away_team.is_empty() {
            tracing::debug!(
                "Skipping result with unnamed team: {:?} vs {:?}",
                home_team,
                away_team
            );
            continue;
        }

        let home = row_for(home_team, &mut rows);
        rows[home].record(home_goals, away_goals);
        let away = row_for(away_team, &mut rows);
        rows[away].record(away_goals, home_goals);
    }

    for row in &mut rows {
        row.finalize();
    }
    rows.sort_by(TeamStanding::table_order);

    tracing::debug!("{} table has {} teams", competition.heading(), rows.len());
    rows
}
