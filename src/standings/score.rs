/// Parses a `"<home>-<away>"` score into goal counts.
///
/// Both sides must be non-negative integers; surrounding whitespace around
/// each side is tolerated. Anything else returns `None` and the result is
/// left out of the table.
///
/// # Examples
/// ```
/// use club_standings::standings::parse_score;
///
/// assert_eq!(parse_score("2-1"), Some((2, 1)));
/// assert_eq!(parse_score(" 0 - 0 "), Some((0, 0)));
/// assert_eq!(parse_score("2-"), None);
/// assert_eq!(parse_score("abc"), None);
/// ```
pub fn parse_score(score: &str) -> Option<(u32, u32)> {
    let (home, away) = score.split_once('-')?;
    let home = parse_goals(home)?;
    let away = parse_goals(away)?;
    Some((home, away))
}

fn parse_goals(side: &str) -> Option<u32> {
    let side = side.trim();
    // u32::from_str accepts a leading '+'
    if side.is_empty() || !side.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    side.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_scores() {
        assert_eq!(parse_score("2-1"), Some((2, 1)));
        assert_eq!(parse_score("0-0"), Some((0, 0)));
        assert_eq!(parse_score("10-12"), Some((10, 12)));
        assert_eq!(parse_score("3 - 2"), Some((3, 2)));
    }

    #[test]
    fn test_malformed_scores() {
        for score in ["", "abc", "2-", "-2", "2", "2:1", "a-1", "1-b", "2-1-0", "+1-0", "1.5-0", "-1-2"] {
            assert_eq!(parse_score(score), None, "score {score:?} should not parse");
        }
    }

    #[test]
    fn test_overflowing_goals_are_rejected() {
        assert_eq!(parse_score("99999999999-0"), None);
    }
}
