use std::collections::HashMap;

use proptest::prelude::*;

use club_standings::results::{ClubRoster, Competition, MatchResult};
use club_standings::standings::{
    competition_ranks, compute_scorer_ranking, compute_standings, parse_score,
};
use club_standings::testing_utils::TestDataBuilder;

const CLUB: &str = "FC Club";
const TEAMS: [&str; 6] = ["AS Lyon", "US Nord", "Étoile", "Red Star", "", "as lyon"];
const CATEGORIES: [&str; 3] = ["Match Championnat", "Match Coupe", "Match Tournoi"];
const PLAYERS: [&str; 5] = ["Léo Martin", "Hugo Petit", "Paul Durand (AS Lyon)", "Tom", "Anna"];

fn score_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u32..8, 0u32..8).prop_map(|(h, a)| format!("{h}-{a}")),
        1 => prop::sample::select(vec!["abc", "2-", "", "1:0", "-1-2"]).prop_map(String::from),
    ]
}

fn result_strategy() -> impl Strategy<Value = MatchResult> {
    (
        any::<bool>(),
        any::<bool>(),
        0usize..TEAMS.len(),
        0usize..TEAMS.len(),
        0usize..CATEGORIES.len(),
        score_strategy(),
        prop::collection::vec((0usize..PLAYERS.len(), 0u32..4), 0..3),
    )
        .prop_map(|(club_match, at_home, first, second, category, score, scorers)| {
            let result = if club_match {
                TestDataBuilder::club_match(CATEGORIES[category], at_home, TEAMS[first], &score)
            } else {
                TestDataBuilder::opponent_match(
                    CATEGORIES[category],
                    TEAMS[first],
                    TEAMS[second],
                    &score,
                )
            };
            let scorers: Vec<(&str, u32)> = scorers
                .into_iter()
                .map(|(player, count)| (PLAYERS[player], count))
                .collect();
            result.with_scorers(&scorers)
        })
}

fn counted(results: &[MatchResult], competition: Competition) -> Vec<(String, String)> {
    results
        .iter()
        .filter(|r| club_standings::standings::counts_towards(r, competition))
        .filter(|r| parse_score(&r.score).is_some())
        .map(|r| {
            let (home, away) = r.fixture.teams(CLUB);
            (home.to_string(), away.to_string())
        })
        .filter(|(home, away)| !home.is_empty() && !away.is_empty())
        .collect()
}

proptest! {
    #[test]
    fn outcomes_cover_every_counted_match_twice(
        results in prop::collection::vec(result_strategy(), 0..40),
        competition in prop::sample::select(Competition::ALL.to_vec()),
    ) {
        let table = compute_standings(&results, CLUB, competition);
        let matches = counted(&results, competition);

        let outcomes: u32 = table.iter().map(|row| row.wins + row.draws + row.losses).sum();
        prop_assert_eq!(outcomes as usize, matches.len() * 2);

        let mut expected_played: HashMap<&str, u32> = HashMap::new();
        for (home, away) in &matches {
            *expected_played.entry(home.as_str()).or_default() += 1;
            *expected_played.entry(away.as_str()).or_default() += 1;
        }
        prop_assert_eq!(table.len(), expected_played.len());
        for row in &table {
            prop_assert_eq!(Some(&row.played), expected_played.get(row.team.as_str()));
            prop_assert_eq!(row.played, row.wins + row.draws + row.losses);
        }
    }

    #[test]
    fn goal_difference_and_points_are_consistent(
        results in prop::collection::vec(result_strategy(), 0..40),
    ) {
        let table = compute_standings(&results, CLUB, Competition::Championship);
        for row in &table {
            prop_assert_eq!(
                row.goal_difference,
                i64::from(row.goals_for) - i64::from(row.goals_against)
            );
            prop_assert_eq!(row.points, row.wins * 3 + row.draws);
        }
        let goals_for: u32 = table.iter().map(|row| row.goals_for).sum();
        let goals_against: u32 = table.iter().map(|row| row.goals_against).sum();
        prop_assert_eq!(goals_for, goals_against);
    }

    #[test]
    fn table_is_sorted_and_deterministic(
        results in prop::collection::vec(result_strategy(), 0..40),
    ) {
        let table = compute_standings(&results, CLUB, Competition::Championship);
        for pair in table.windows(2) {
            prop_assert!(pair[0].table_order(&pair[1]).is_lt());
        }

        let mut reversed = results.clone();
        reversed.reverse();
        prop_assert_eq!(table, compute_standings(&reversed, CLUB, Competition::Championship));
    }

    #[test]
    fn scorer_goals_are_conserved(
        results in prop::collection::vec(result_strategy(), 0..40),
    ) {
        let roster = ClubRoster::from_names(["Léo Martin", "Hugo Petit"]);
        let ranking = compute_scorer_ranking(&results, &roster, CLUB);

        let fed: u32 = results
            .iter()
            .flat_map(|r| r.scorers.iter())
            .map(|s| s.count)
            .sum();
        let ranked: u32 = ranking.iter().map(|row| row.goals).sum();
        prop_assert_eq!(fed, ranked);

        let distinct: std::collections::HashSet<&str> = results
            .iter()
            .flat_map(|r| r.scorers.iter())
            .map(|s| s.player_name.as_str())
            .collect();
        prop_assert_eq!(ranking.len(), distinct.len());
    }

    #[test]
    fn competition_ranks_share_ties_and_jump_to_position(
        mut goals in prop::collection::vec(0u32..6, 0..30),
    ) {
        goals.sort_by(|a, b| b.cmp(a));
        let ranks = competition_ranks(&goals);
        prop_assert_eq!(ranks.len(), goals.len());
        for i in 0..goals.len() {
            let first_of_tie = goals.iter().position(|g| *g == goals[i]).unwrap();
            prop_assert_eq!(ranks[i] as usize, first_of_tie + 1);
        }
    }
}
