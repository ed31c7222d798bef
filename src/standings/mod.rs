//! The standings engine.
//!
//! Everything here is a pure function of its inputs: results in, freshly
//! allocated tables out. Nothing is cached between calls; callers that want
//! memoization key it on their own inputs.

pub mod collation;
pub mod score;
pub mod scorers;
pub mod table;

pub use collation::compare_names;
pub use score::parse_score;
pub use scorers::{ScorerStanding, competition_ranks, compute_scorer_ranking, parse_player_team};
pub use table::{TeamStanding, compute_standings, counts_towards};

use crate::results::{ClubRoster, Competition, MatchResult, ResultFilter};
use serde::Serialize;

/// Both tables for one squad selection and competition tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsReport {
    pub club_name: String,
    pub competition: Competition,
    /// Results that passed the squad filter, across all competitions.
    pub results_considered: usize,
    pub teams: Vec<TeamStanding>,
    pub scorers: Vec<ScorerStanding>,
}

/// Runs the squad filter once, then builds the league table of
/// `competition` and the all-competition scorer leaderboard.
pub fn build_report(
    results: &[MatchResult],
    filter: &ResultFilter,
    club_name: &str,
    roster: &ClubRoster,
    competition: Competition,
) -> StandingsReport {
    let selected = filter.apply(results);

    let teams = compute_standings(selected.iter().copied(), club_name, competition);
    let scorers = compute_scorer_ranking(selected.iter().copied(), roster, club_name);

    tracing::info!(
        "Built {} report for {}: {} teams, {} scorers from {} results",
        competition.heading(),
        club_name,
        teams.len(),
        scorers.len(),
        selected.len()
    );

    StandingsReport {
        club_name: club_name.to_string(),
        competition,
        results_considered: selected.len(),
        teams,
        scorers,
    }
}
