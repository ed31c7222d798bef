//! The set of player names that belong to the club.
//!
//! A scorer counts as a club player only when the raw scorer name matches a
//! roster name exactly. No case folding, no trimming.

use serde::Deserialize;
use std::collections::HashSet;

/// Builds a full name from first and last name components.
///
/// # Example
/// ```
/// use club_standings::results::roster::build_full_name;
///
/// assert_eq!(build_full_name("Léo", "Martin"), "Léo Martin");
/// ```
pub fn build_full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

/// One roster entry as stored by the player collection: either a plain
/// display name or separate name components.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RosterEntry {
    Name(String),
    #[serde(rename_all = "camelCase")]
    Person { first_name: String, last_name: String },
}

impl RosterEntry {
    pub fn full_name(&self) -> String {
        match self {
            RosterEntry::Name(name) => name.clone(),
            RosterEntry::Person {
                first_name,
                last_name,
            } => build_full_name(first_name, last_name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubRoster {
    names: HashSet<String>,
}

impl ClubRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::new();
        roster.extend(names);
        roster
    }

    pub fn from_entries(entries: &[RosterEntry]) -> Self {
        Self::from_names(entries.iter().map(RosterEntry::full_name))
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(
            names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty()),
        );
    }

    pub fn contains(&self, raw_name: &str) -> bool {
        self.names.contains(raw_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_entries_from_json() {
        let entries: Vec<RosterEntry> = serde_json::from_str(
            r#"["Hugo Petit", {"firstName": "Léo", "lastName": "Martin"}]"#,
        )
        .unwrap();
        let roster = ClubRoster::from_entries(&entries);

        assert_eq!(roster.len(), 2);
        assert!(roster.contains("Hugo Petit"));
        assert!(roster.contains("Léo Martin"));
    }

    #[test]
    fn test_contains_is_exact() {
        let roster = ClubRoster::from_names(["Léo Martin"]);
        assert!(!roster.contains("leo martin"));
        assert!(!roster.contains("Léo Martin "));
        assert!(!roster.contains("Léo Martin (FC Club)"));
    }

    #[test]
    fn test_empty_names_are_ignored() {
        let roster = ClubRoster::from_names(["", "Hugo Petit"]);
        assert_eq!(roster.len(), 1);
    }
}
