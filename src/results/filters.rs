use super::models::{Gender, MatchResult, TeamCategory};

/// Squad selection applied before any standings are computed.
///
/// Unset criteria match every result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultFilter {
    pub team_category: Option<TeamCategory>,
    pub gender: Option<Gender>,
}

impl ResultFilter {
    pub fn new(team_category: Option<TeamCategory>, gender: Option<Gender>) -> Self {
        Self {
            team_category,
            gender,
        }
    }

    pub fn matches(&self, result: &MatchResult) -> bool {
        self.team_category
            .is_none_or(|category| category == result.team_category)
            && self.gender.is_none_or(|gender| gender == result.gender)
    }

    /// Borrows the results that belong to the selected squad, keeping feed order.
    pub fn apply<'a>(&self, results: &'a [MatchResult]) -> Vec<&'a MatchResult> {
        let selected: Vec<&MatchResult> = results.iter().filter(|r| self.matches(r)).collect();
        tracing::debug!(
            "Filter {:?} kept {} of {} results",
            self,
            selected.len(),
            results.len()
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_empty_filter_keeps_everything() {
        let results = vec![
            TestDataBuilder::club_match("Match Championnat", true, "AS Lyon", "1-0"),
            TestDataBuilder::club_match("Match Coupe", false, "US Nord", "0-0")
                .with_squad(TeamCategory::U13, Gender::Female),
        ];
        assert_eq!(ResultFilter::default().apply(&results).len(), 2);
    }

    #[test]
    fn test_filter_by_category_and_gender() {
        let results = vec![
            TestDataBuilder::club_match("Match Championnat", true, "AS Lyon", "1-0")
                .with_squad(TeamCategory::U13, Gender::Male),
            TestDataBuilder::club_match("Match Championnat", true, "AS Lyon", "1-0")
                .with_squad(TeamCategory::U13, Gender::Female),
            TestDataBuilder::club_match("Match Championnat", true, "AS Lyon", "1-0")
                .with_squad(TeamCategory::U15, Gender::Female),
        ];

        let filter = ResultFilter::new(Some(TeamCategory::U13), Some(Gender::Female));
        let kept = filter.apply(&results);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].gender, Gender::Female);
        assert_eq!(kept[0].team_category, TeamCategory::U13);

        let only_gender = ResultFilter::new(None, Some(Gender::Female));
        assert_eq!(only_gender.apply(&results).len(), 2);
    }
}
